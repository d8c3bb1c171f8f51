use alloc::string::String;

use crate::{Color, Theme};

/// Something whose colors can be set from a [`Theme`].
pub trait Stylable {
    /// Paints `self` with the theme's colors.
    fn apply_theme(&mut self, theme: &dyn Theme);
}

/// A line of text with a background and a text color.
///
/// A new label is black text on a clear background.
///
/// # Example
/// ```
/// use motif::{Color, Label, Stylable, ThemeKind};
///
/// let mut label = Label::new("What It Smell Like");
/// label.apply_theme(ThemeKind::Brown.create().as_ref());
///
/// assert_eq!(label.background_color(), Color::BROWN);
/// assert_eq!(label.text_color(), Color::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    text: String,
    background_color: Color,
    text_color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            background_color: Color::CLEAR,
            text_color: Color::BLACK,
        }
    }

    /// Returns the label painted with `theme`.
    #[must_use]
    pub fn with_theme(mut self, theme: &dyn Theme) -> Self {
        self.apply_theme(theme);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub const fn background_color(&self) -> Color {
        self.background_color
    }

    pub const fn text_color(&self) -> Color {
        self.text_color
    }
}

impl Stylable for Label {
    fn apply_theme(&mut self, theme: &dyn Theme) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            theme = theme.name(),
            background = %theme.background_color(),
            text = %theme.text_color(),
            "styling label {:?}",
            self.text
        );
        self.background_color = theme.background_color();
        self.text_color = theme.text_color();
    }
}
