//! Character classification for map cells.
//!
//! Roles are derived from the raw character every time they are needed.

/// Start marker
pub const START: char = '@';
/// End marker
pub const END: char = 'x';
/// Horizontal segment
pub const HORIZONTAL: char = '-';
/// Vertical segment
pub const VERTICAL: char = '|';
/// Junction, a mandatory turning point
pub const JUNCTION: char = '+';

/// Role a single character plays on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharRole {
    Start,
    End,
    Horizontal,
    Vertical,
    Junction,
    /// Uppercase letter collected along the way
    Letter(char),
    /// Anything else, including space. Never traversable.
    Other,
}

impl CharRole {
    pub fn of(c: char) -> Self {
        match c {
            START => CharRole::Start,
            END => CharRole::End,
            HORIZONTAL => CharRole::Horizontal,
            VERTICAL => CharRole::Vertical,
            JUNCTION => CharRole::Junction,
            c if is_capital_letter(c) => CharRole::Letter(c),
            _ => CharRole::Other,
        }
    }
}

/// Check if character is a path segment (-, | or +)
pub fn is_direction(c: char) -> bool {
    matches!(c, HORIZONTAL | VERTICAL | JUNCTION)
}

/// Check if character is an uppercase ASCII letter
pub fn is_capital_letter(c: char) -> bool {
    ('A'..='Z').contains(&c)
}

pub fn is_end(c: char) -> bool {
    c == END
}

pub fn is_junction(c: char) -> bool {
    c == JUNCTION
}

/// Check if the path may step onto this character while moving.
/// The start marker is not included: the path never walks back onto `@`.
pub fn is_valid_forward(c: char) -> bool {
    is_direction(c) || is_capital_letter(c) || is_end(c)
}
