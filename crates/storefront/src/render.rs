//! Styled text output for storefront pages.
//!
//! A [`Painter`] turns palette tokens into truecolor escapes (or nothing, in
//! plain mode) and lays text out for the page width and reading direction.

use colored::{ColoredString, Colorize};
use store_theme::{Palette, Rgb};
use unicode_width::UnicodeWidthChar;

use crate::i18n::Direction;

/// Narrowest layout the painter will produce.
pub const MIN_WIDTH: usize = 20;

/// Semantic colour slots of a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
    Text,
    Muted,
    Success,
    Warning,
    Error,
}

/// Renders text with a theme palette.
#[derive(Debug, Clone)]
pub struct Painter {
    palette: Palette,
    color: bool,
    direction: Direction,
    width: usize,
}

impl Painter {
    #[must_use]
    pub fn new(palette: Palette, color: bool, direction: Direction, width: usize) -> Self {
        Self {
            palette,
            color,
            direction,
            width: width.max(MIN_WIDTH),
        }
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn uses_color(&self) -> bool {
        self.color
    }

    const fn tone(&self, tone: Tone) -> Rgb {
        let p = &self.palette;
        match tone {
            Tone::Primary => p.primary,
            Tone::Accent => p.accent,
            Tone::Text => p.text,
            Tone::Muted => p.muted,
            Tone::Success => p.success,
            Tone::Warning => p.warning,
            Tone::Error => p.error,
        }
    }

    fn styled(&self, text: &str, style: impl FnOnce(ColoredString) -> ColoredString) -> String {
        if self.color {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }

    /// Foreground colour only.
    #[must_use]
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        let Rgb(r, g, b) = self.tone(tone);
        self.styled(text, |s| s.truecolor(r, g, b))
    }

    /// Bold primary text.
    #[must_use]
    pub fn title(&self, text: &str) -> String {
        let Rgb(r, g, b) = self.palette.primary;
        self.styled(text, |s| s.truecolor(r, g, b).bold())
    }

    /// Bold text in the body colour.
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        let Rgb(r, g, b) = self.palette.text;
        self.styled(text, |s| s.truecolor(r, g, b).bold())
    }

    #[must_use]
    pub fn muted(&self, text: &str) -> String {
        self.paint(text, Tone::Muted)
    }

    /// Text on a primary-coloured chip, e.g. `[ Shop now ]`.
    #[must_use]
    pub fn badge(&self, text: &str) -> String {
        let Rgb(fr, fg, fb) = self.palette.background;
        let Rgb(br, bg, bb) = self.palette.primary;
        let label = format!(" {text} ");
        if self.color {
            label.truecolor(fr, fg, fb).on_truecolor(br, bg, bb).bold().to_string()
        } else {
            format!("[{label}]")
        }
    }

    /// A full-width band on the surface colour.
    #[must_use]
    pub fn band(&self, text: &str) -> String {
        let padded = pad_to(&format!(" {text}"), self.width);
        let Rgb(fr, fg, fb) = self.palette.text;
        let Rgb(br, bg, bb) = self.palette.surface;
        self.styled(&padded, |s| s.truecolor(fr, fg, fb).on_truecolor(br, bg, bb))
    }

    /// A horizontal rule in the border colour.
    #[must_use]
    pub fn rule(&self, ch: char) -> String {
        let Rgb(r, g, b) = self.palette.border;
        let line: String = std::iter::repeat_n(ch, self.width).collect();
        self.styled(&line, |s| s.truecolor(r, g, b))
    }

    /// Place one (already styled) line according to the reading direction.
    #[must_use]
    pub fn line(&self, text: &str) -> String {
        match self.direction {
            Direction::Ltr => text.to_string(),
            Direction::Rtl => {
                let gap = self.width.saturating_sub(visible_width(text));
                format!("{}{text}", " ".repeat(gap))
            }
        }
    }

    /// Centre one line within the page width.
    #[must_use]
    pub fn center(&self, text: &str) -> String {
        let gap = self.width.saturating_sub(visible_width(text)) / 2;
        format!("{}{text}", " ".repeat(gap))
    }

    /// Wrap plain text to the page width and align it, one entry per line.
    #[must_use]
    pub fn paragraph(&self, text: &str, tone: Tone) -> Vec<String> {
        textwrap::wrap(text, self.width)
            .iter()
            .map(|line| self.line(&self.paint(line, tone)))
            .collect()
    }

    /// `label ........ value` across the page width.
    #[must_use]
    pub fn leader(&self, label: &str, value: &str) -> String {
        let used = visible_width(label) + visible_width(value) + 2;
        let dots = ".".repeat(self.width.saturating_sub(used).max(1));
        let row = match self.direction {
            Direction::Ltr => format!("{label} {} {value}", self.muted(&dots)),
            Direction::Rtl => format!("{value} {} {label}", self.muted(&dots)),
        };
        self.line(&row)
    }
}

/// Display width of a string, ignoring ANSI escape sequences.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Normal,
        Esc,
        Csi,
    }
    let mut state = State::Normal;
    let mut width = 0;
    for c in s.chars() {
        match state {
            State::Normal if c == '\x1b' => state = State::Esc,
            State::Normal => width += c.width().unwrap_or(0),
            State::Esc if c == '[' => state = State::Csi,
            State::Esc => state = State::Normal,
            State::Csi if ('@'..='~').contains(&c) => state = State::Normal,
            State::Csi => {}
        }
    }
    width
}

/// Right-pad plain text with spaces to `width` columns.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(visible_width(text));
    format!("{text}{}", " ".repeat(gap))
}
