//! Character display trait for the two-line welcome panel

/// Errors that can occur when driving the character display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Line write attempted before the controller was initialized
    NotInitialized,
}

/// One of the two physical text rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayLine {
    /// Line 0
    Top,
    /// Line 1
    Bottom,
}

impl DisplayLine {
    /// Row index (0 or 1)
    pub const fn index(self) -> u8 {
        match self {
            DisplayLine::Top => 0,
            DisplayLine::Bottom => 1,
        }
    }
}

/// Line-oriented character display
///
/// The panel is treated as two independent rows of fixed width. Every
/// write replaces the whole row: text is placed at column 0 and the rest
/// of the row is blanked.
pub trait CharacterDisplay {
    /// Number of character cells per line
    fn columns(&self) -> u8;

    /// Replace the content of `line` with `text`
    ///
    /// Text longer than [`columns`](Self::columns) is truncated.
    fn write_line(&mut self, line: DisplayLine, text: &str) -> Result<(), DisplayError>;

    /// Blank `line`
    fn clear_line(&mut self, line: DisplayLine) -> Result<(), DisplayError>;
}

impl<T: CharacterDisplay + ?Sized> CharacterDisplay for &mut T {
    fn columns(&self) -> u8 {
        T::columns(self)
    }

    fn write_line(&mut self, line: DisplayLine, text: &str) -> Result<(), DisplayError> {
        T::write_line(self, line, text)
    }

    fn clear_line(&mut self, line: DisplayLine) -> Result<(), DisplayError> {
        T::clear_line(self, line)
    }
}
