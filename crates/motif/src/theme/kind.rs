use alloc::{boxed::Box, string::ToString};
use core::{fmt, str::FromStr};

use crate::{Color, Error, Result};

/// A pair of colors used to decorate text.
///
/// Callers work against this trait and obtain instances from
/// [`ThemeKind::create`], so they never name a concrete theme type.
pub trait Theme: fmt::Debug {
    /// Lower-case name of the theme.
    fn name(&self) -> &'static str;

    /// Color painted behind the text.
    fn background_color(&self) -> Color;

    /// Color of the text itself.
    fn text_color(&self) -> Color;
}

/// Black text on white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightTheme {
    pub background_color: Color,
    pub text_color: Color,
}

impl Default for LightTheme {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            text_color: Color::BLACK,
        }
    }
}

impl Theme for LightTheme {
    fn name(&self) -> &'static str {
        ThemeKind::Light.name()
    }

    fn background_color(&self) -> Color {
        self.background_color
    }

    fn text_color(&self) -> Color {
        self.text_color
    }
}

/// White text on black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkTheme {
    pub background_color: Color,
    pub text_color: Color,
}

impl Default for DarkTheme {
    fn default() -> Self {
        Self {
            background_color: Color::BLACK,
            text_color: Color::WHITE,
        }
    }
}

impl Theme for DarkTheme {
    fn name(&self) -> &'static str {
        ThemeKind::Dark.name()
    }

    fn background_color(&self) -> Color {
        self.background_color
    }

    fn text_color(&self) -> Color {
        self.text_color
    }
}

/// White text on brown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrownTheme {
    pub background_color: Color,
    pub text_color: Color,
}

impl Default for BrownTheme {
    fn default() -> Self {
        Self {
            background_color: Color::BROWN,
            text_color: Color::WHITE,
        }
    }
}

impl Theme for BrownTheme {
    fn name(&self) -> &'static str {
        ThemeKind::Brown.name()
    }

    fn background_color(&self) -> Color {
        self.background_color
    }

    fn text_color(&self) -> Color {
        self.text_color
    }
}

/// The closed set of built-in themes.
///
/// [`create`](Self::create) is the factory method: it returns the theme as a
/// `Box<dyn Theme>`, so adding or changing a concrete theme never touches the
/// callers.
///
/// # Example
/// ```
/// use motif::{Color, ThemeKind};
///
/// let theme = "dark".parse::<ThemeKind>()?.create();
///
/// assert_eq!(theme.name(), "dark");
/// assert_eq!(theme.background_color(), Color::BLACK);
/// assert_eq!(theme.text_color(), Color::WHITE);
/// # Ok::<(), motif::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeKind {
    Light,
    Dark,
    Brown,
}

impl ThemeKind {
    /// Every theme kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Brown];

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Brown => "brown",
        }
    }

    /// Creates the theme for this kind.
    pub fn create(self) -> Box<dyn Theme> {
        match self {
            Self::Light => Box::new(LightTheme::default()),
            Self::Dark => Box::new(DarkTheme::default()),
            Self::Brown => Box::new(BrownTheme::default()),
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownTheme {
                name: s.to_string(),
            })
    }
}
