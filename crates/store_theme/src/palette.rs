//! Colour modes, per-theme palettes and merchant colour overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::registry::ThemeId;

// ============================================================================
// Colour mode
// ============================================================================

/// Light or dark rendering. Orthogonal to the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown colour mode: {other:?}")),
        }
    }
}

// ============================================================================
// Rgb
// ============================================================================

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` or `#rgb`. The leading `#` is optional.
    #[must_use]
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches('#');
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match s.len() {
            6 => Some(Self(
                u8::from_str_radix(&s[0..2], 16).ok()?,
                u8::from_str_radix(&s[2..4], 16).ok()?,
                u8::from_str_radix(&s[4..6], 16).ok()?,
            )),
            3 => Some(Self(
                u8::from_str_radix(&s[0..1], 16).ok()? * 17,
                u8::from_str_radix(&s[1..2], 16).ok()? * 17,
                u8::from_str_radix(&s[2..3], 16).ok()? * 17,
            )),
            _ => None,
        }
    }

    /// `#rrggbb`, lowercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Semantic colour tokens used by page renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Brand colour for headings, links and primary actions.
    pub primary: Rgb,
    /// Highlights such as prices and badges.
    pub accent: Rgb,
    pub text: Rgb,
    /// Secondary text: descriptions, hints.
    pub muted: Rgb,
    pub background: Rgb,
    /// Cards and header/footer bands.
    pub surface: Rgb,
    pub border: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
}

impl Palette {
    /// Palette for a theme in a colour mode.
    #[must_use]
    pub const fn for_theme(theme: ThemeId, mode: ColorMode) -> Self {
        let (primary, accent) = brand(theme, mode);
        match mode {
            ColorMode::Light => Self {
                primary,
                accent,
                text: Rgb::hex(0x18_18_1b),
                muted: Rgb::hex(0x71_71_7a),
                background: Rgb::hex(0xff_ff_ff),
                surface: Rgb::hex(0xf4_f4_f5),
                border: Rgb::hex(0xe4_e4_e7),
                success: Rgb::hex(0x16_a3_4a),
                warning: Rgb::hex(0xca_8a_04),
                error: Rgb::hex(0xdc_26_26),
            },
            ColorMode::Dark => Self {
                primary,
                accent,
                text: Rgb::hex(0xfa_fa_fa),
                muted: Rgb::hex(0xa1_a1_aa),
                background: Rgb::hex(0x0f_0f_10),
                surface: Rgb::hex(0x27_27_2a),
                border: Rgb::hex(0x3f_3f_46),
                success: Rgb::hex(0x4a_de_80),
                warning: Rgb::hex(0xfa_cc_15),
                error: Rgb::hex(0xf8_71_71),
            },
        }
    }

    /// Apply a merchant's colour overrides. Invalid hex values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, custom: &CustomColors) -> Self {
        let pick = |value: &Option<String>, current: Rgb| {
            value.as_deref().and_then(Rgb::parse_hex).unwrap_or(current)
        };
        self.primary = pick(&custom.primary, self.primary);
        self.accent = pick(&custom.accent, self.accent);
        self.background = pick(&custom.background, self.background);
        self.text = pick(&custom.text, self.text);
        self
    }
}

/// Brand colours: (primary, accent).
const fn brand(theme: ThemeId, mode: ColorMode) -> (Rgb, Rgb) {
    let (light, dark) = match theme {
        ThemeId::Minimal => ((0x18_18_1b, 0x52_52_5b), (0xfa_fa_fa, 0xa1_a1_aa)),
        ThemeId::Tech => ((0x25_63_eb, 0x06_b6_d4), (0x60_a5_fa, 0x22_d3_ee)),
        ThemeId::Modern => ((0x7c_3a_ed, 0xec_48_99), (0xa7_8b_fa, 0xf4_72_b6)),
        ThemeId::Luxe => ((0x78_35_0f, 0xb4_53_09), (0xd4_af_37, 0xe7_c9_7a)),
        ThemeId::Vibrant => ((0xe1_1d_48, 0xf5_9e_0b), (0xfb_71_85, 0xfb_bf_24)),
        ThemeId::Appliances => ((0x0f_76_6e, 0x0e_a5_e9), (0x2d_d4_bf, 0x38_bd_f8)),
        ThemeId::Toys => ((0xea_58_0c, 0x84_cc_16), (0xfb_92_3c, 0xa3_e6_35)),
        ThemeId::Software => ((0x4f_46_e5, 0x10_b9_81), (0x81_8c_f8, 0x34_d3_99)),
    };
    let (primary, accent) = match mode {
        ColorMode::Light => light,
        ColorMode::Dark => dark,
    };
    (Rgb::hex(primary), Rgb::hex(accent))
}

// ============================================================================
// Custom colours
// ============================================================================

/// A merchant's per-store colour overrides, stored as JSON under
/// `store-{id}-custom-colors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CustomColors {
    /// Whether no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.accent.is_none()
            && self.background.is_none()
            && self.text.is_none()
    }

    /// Names of fields whose value is not a valid hex colour.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("primary", &self.primary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("text", &self.text),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(|v| Rgb::parse_hex(v).is_none()))
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_toggle_and_strings() {
        assert_eq!(ColorMode::default(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled().toggled(), ColorMode::Dark);
        assert_eq!("dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert!("dim".parse::<ColorMode>().is_err());
        assert_eq!(ColorMode::Dark.to_string(), "dark");
    }

    #[test]
    fn rgb_parses_long_and_short_hex() {
        assert_eq!(Rgb::parse_hex("#ff8000"), Some(Rgb(255, 128, 0)));
        assert_eq!(Rgb::parse_hex("0f0"), Some(Rgb(0, 255, 0)));
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex("#zzzzzz"), None);
        assert_eq!(Rgb::parse_hex("#ééé"), None);
        assert_eq!(Rgb(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn rgb_rejects_signed_digits() {
        assert_eq!(Rgb::parse_hex("#+f+f+f"), None);
        assert_eq!(Rgb::parse_hex("+1+2+3"), None);
        assert_eq!(Rgb::parse_hex("#-1-2-3"), None);
        let custom = CustomColors {
            primary: Some("#+1+2+3".to_string()),
            ..Default::default()
        };
        assert_eq!(custom.invalid_fields(), vec!["primary"]);
    }

    #[test]
    fn palettes_differ_by_mode() {
        for theme in ThemeId::all() {
            let light = Palette::for_theme(theme, ColorMode::Light);
            let dark = Palette::for_theme(theme, ColorMode::Dark);
            assert_ne!(light.background, dark.background);
            assert_ne!(light.text, dark.text);
        }
    }

    #[test]
    fn overrides_replace_only_valid_fields() {
        let base = Palette::for_theme(ThemeId::Tech, ColorMode::Light);
        let custom = CustomColors {
            primary: Some("#112233".to_string()),
            accent: Some("not-a-colour".to_string()),
            ..Default::default()
        };
        let palette = base.with_overrides(&custom);
        assert_eq!(palette.primary, Rgb(0x11, 0x22, 0x33));
        assert_eq!(palette.accent, base.accent);
        assert_eq!(palette.text, base.text);
        assert_eq!(custom.invalid_fields(), vec!["accent"]);
    }

    #[test]
    fn custom_colors_json_skips_unset_fields() {
        let custom = CustomColors {
            accent: Some("#abc".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&custom).unwrap(), r##"{"accent":"#abc"}"##);
        assert!(CustomColors::default().is_empty());
        assert!(!custom.is_empty());
    }
}
