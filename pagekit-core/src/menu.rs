/// CSS `visibility` values used to show and collapse the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub const PROPERTY: &'static str = "visibility";

    #[must_use]
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }

    /// Interpret a computed or inline `visibility` value.
    ///
    /// Anything other than `hidden` or `collapse` renders the panel.
    #[must_use]
    pub fn from_css(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hidden" | "collapse" => Self::Hidden,
            _ => Self::Visible,
        }
    }
}
