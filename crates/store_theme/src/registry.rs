//! Static catalog of storefront themes.
//!
//! Every theme the application ships is a [`ThemeId`] variant with a
//! matching [`ThemeDescriptor`] in [`THEMES`]. Lookups by raw string go
//! through [`get_theme_by_id`], which never fails: an identifier the
//! registry does not know (for example one left in storage by an older
//! build) resolves to the default descriptor so there is always something
//! to display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Closed set of theme identifiers.
///
/// The lowercase string form (`"minimal"`, `"tech"`, ...) is the persisted
/// form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Minimal,
    Tech,
    Modern,
    Luxe,
    Vibrant,
    Appliances,
    Toys,
    Software,
}

impl ThemeId {
    /// Theme used when nothing else applies.
    pub const DEFAULT: Self = Self::Minimal;

    /// Persisted identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Tech => "tech",
            Self::Modern => "modern",
            Self::Luxe => "luxe",
            Self::Vibrant => "vibrant",
            Self::Appliances => "appliances",
            Self::Toys => "toys",
            Self::Software => "software",
        }
    }

    /// All identifiers in registry order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Minimal,
            Self::Tech,
            Self::Modern,
            Self::Luxe,
            Self::Vibrant,
            Self::Appliances,
            Self::Toys,
            Self::Software,
        ]
    }

    /// Registry descriptor for this identifier.
    #[must_use]
    pub fn descriptor(self) -> &'static ThemeDescriptor {
        &THEMES[self as usize]
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme identifier: {0:?}")]
pub struct ParseThemeIdError(pub String);

impl FromStr for ThemeId {
    type Err = ParseThemeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::all()
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseThemeIdError(s.to_string()))
    }
}

/// Merchandising category a theme is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeCategory {
    General,
    Electronics,
    Fashion,
    Lifestyle,
    HomeAppliances,
    Kids,
    Digital,
}

impl ThemeCategory {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::Lifestyle => "Lifestyle",
            Self::HomeAppliances => "Home Appliances",
            Self::Kids => "Kids",
            Self::Digital => "Digital Products",
        }
    }
}

/// Display metadata for a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeDescriptor {
    pub id: ThemeId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ThemeCategory,
    /// Relative path of the preview image shown in the theme picker.
    pub preview_image: &'static str,
}

/// The registry, indexed by `ThemeId as usize`.
pub static THEMES: [ThemeDescriptor; 8] = [
    ThemeDescriptor {
        id: ThemeId::Minimal,
        name: "Minimal",
        description: "Clean typography and generous whitespace for any catalog.",
        category: ThemeCategory::General,
        preview_image: "themes/minimal.png",
    },
    ThemeDescriptor {
        id: ThemeId::Tech,
        name: "Tech",
        description: "Spec sheets, comparison tables and bold accents for gadgets.",
        category: ThemeCategory::Electronics,
        preview_image: "themes/tech.png",
    },
    ThemeDescriptor {
        id: ThemeId::Modern,
        name: "Modern",
        description: "Card-based layout with soft shadows and rounded corners.",
        category: ThemeCategory::Lifestyle,
        preview_image: "themes/modern.png",
    },
    ThemeDescriptor {
        id: ThemeId::Luxe,
        name: "Luxe",
        description: "Editorial look with serif headings and a lookbook.",
        category: ThemeCategory::Fashion,
        preview_image: "themes/luxe.png",
    },
    ThemeDescriptor {
        id: ThemeId::Vibrant,
        name: "Vibrant",
        description: "Saturated colours and a daily deals strip.",
        category: ThemeCategory::Lifestyle,
        preview_image: "themes/vibrant.png",
    },
    ThemeDescriptor {
        id: ThemeId::Appliances,
        name: "Appliances",
        description: "Integrated layout with energy ratings and side-by-side comparison.",
        category: ThemeCategory::HomeAppliances,
        preview_image: "themes/appliances.png",
    },
    ThemeDescriptor {
        id: ThemeId::Toys,
        name: "Toys",
        description: "Playful integrated layout with age filters and deals.",
        category: ThemeCategory::Kids,
        preview_image: "themes/toys.png",
    },
    ThemeDescriptor {
        id: ThemeId::Software,
        name: "Software",
        description: "Integrated layout for licenses, plans and downloads.",
        category: ThemeCategory::Digital,
        preview_image: "themes/software.png",
    },
];

/// All themes in display order.
#[must_use]
pub fn list_themes() -> &'static [ThemeDescriptor] {
    &THEMES
}

/// The designated default descriptor.
#[must_use]
pub fn default_theme() -> &'static ThemeDescriptor {
    ThemeId::DEFAULT.descriptor()
}

/// Look up a descriptor by raw identifier, falling back to the default.
#[must_use]
pub fn get_theme_by_id(id: &str) -> &'static ThemeDescriptor {
    if let Ok(theme) = id.parse::<ThemeId>() {
        return theme.descriptor();
    }
    debug!(
        theme.requested = %id,
        theme.fallback = %ThemeId::DEFAULT,
        "Unknown theme identifier, using default descriptor"
    );
    default_theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_indexed_by_id() {
        for (index, id) in ThemeId::all().into_iter().enumerate() {
            assert_eq!(THEMES[index].id, id);
            assert_eq!(id.descriptor().id, id);
        }
        assert_eq!(list_themes().len(), ThemeId::all().len());
    }

    #[test]
    fn ids_roundtrip_through_strings() {
        for id in ThemeId::all() {
            assert_eq!(id.to_string().parse::<ThemeId>(), Ok(id));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Tech ".parse::<ThemeId>(), Ok(ThemeId::Tech));
        assert_eq!("LUXE".parse::<ThemeId>(), Ok(ThemeId::Luxe));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "retro".parse::<ThemeId>().unwrap_err();
        assert_eq!(err, ParseThemeIdError("retro".to_string()));
        assert!(err.to_string().contains("retro"));
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(get_theme_by_id("vibrant").id, ThemeId::Vibrant);
        assert_eq!(get_theme_by_id("").id, ThemeId::Minimal);
        assert_eq!(get_theme_by_id("removed-theme"), default_theme());
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&ThemeId::Appliances).unwrap();
        assert_eq!(json, "\"appliances\"");
        let back: ThemeId = serde_json::from_str("\"software\"").unwrap();
        assert_eq!(back, ThemeId::Software);
    }

    #[test]
    fn descriptors_have_metadata() {
        for theme in list_themes() {
            assert!(!theme.name.is_empty());
            assert!(!theme.description.is_empty());
            assert!(theme.preview_image.ends_with(".png"));
            assert!(!theme.category.name().is_empty());
        }
    }
}
