use std::fmt;

/// One of the eight standard ANSI foreground colors.
///
/// The discriminant is the selector `N` of the `ESC[3Nm` escape sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    /// All colors, in selector order.
    pub const ALL: [AnsiColor; 8] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
    ];

    /// Looks up the color for the selector `N` in `ESC[3Nm`.
    ///
    /// ```
    /// # use playground_html::AnsiColor;
    /// assert_eq!(AnsiColor::from_selector(1), Some(AnsiColor::Red));
    /// assert_eq!(AnsiColor::from_selector(8), None);
    /// ```
    pub fn from_selector(selector: u8) -> Option<Self> {
        Self::ALL.get(usize::from(selector)).copied()
    }

    pub fn selector(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// The CSS class used for text in this color, e.g. `ansi-red`.
    pub fn class(self) -> String {
        format!("ansi-{}", self.name())
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
