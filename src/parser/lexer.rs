//! Character cursor over expression source
//!
//! There is no separate token stream: the grammar reads characters straight
//! from a [`Cursor`]. Spaces are insignificant and are skipped only by
//! [`Cursor::consume_if`] and [`Cursor::skip_spaces`]; everywhere else the
//! parser sees every character.

use super::ast::SourceLocation;

/// Characters that may not directly follow a binary or exponent operator
pub const OPERATOR_CHARS: [char; 6] = ['+', '-', '*', '/', '^', ')'];

/// Cursor over a single expression
///
/// The position never moves backwards. Once it reaches the end of input,
/// [`Cursor::current`] returns `None` for good.
#[derive(Debug, Clone)]
pub struct Cursor {
    input: Vec<char>,
    position: usize,
}

impl Cursor {
    /// Create a cursor positioned on the first character of `input`.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Character under the cursor, `None` at end of input
    pub fn current(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Move forward by one character
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// Skip any run of spaces
    pub fn skip_spaces(&mut self) {
        while self.current() == Some(' ') {
            self.advance();
        }
    }

    /// Skip spaces, then consume `expected` if it is the current character.
    ///
    /// On failure the cursor stays on the first non-space character.
    pub fn consume_if(&mut self, expected: char) -> bool {
        self.skip_spaces();
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a run of characters matching `pred` and return it.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.current().is_some_and(&pred) {
            self.advance();
        }
        self.input[start..self.position].iter().collect()
    }

    /// True if the current character (after spaces) is an operator or `)`
    pub fn at_operator(&mut self) -> bool {
        self.skip_spaces();
        self.current().is_some_and(|ch| OPERATOR_CHARS.contains(&ch))
    }

    /// 0-based character offset
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if at end of input
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    pub fn location(&self) -> SourceLocation {
        SourceLocation::from_offset(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_to_end() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.current(), Some('a'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        cursor.advance();
        assert_eq!(cursor.current(), None);
        assert!(cursor.is_at_end());

        // Sentinel is permanent
        cursor.advance();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_consume_if_skips_spaces() {
        let mut cursor = Cursor::new("   +  x");
        assert!(cursor.consume_if('+'));
        assert_eq!(cursor.position(), 4);

        // Failure leaves the cursor on the first non-space character
        assert!(!cursor.consume_if('-'));
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_tabs_are_not_spaces() {
        let mut cursor = Cursor::new("\t+");
        assert!(!cursor.consume_if('+'));
        assert_eq!(cursor.current(), Some('\t'));
    }

    #[test]
    fn test_take_while() {
        let mut cursor = Cursor::new("12.5e3");
        let digits = cursor.take_while(|ch| ch.is_ascii_digit() || ch == '.');
        assert_eq!(digits, "12.5");
        assert_eq!(cursor.current(), Some('e'));
    }

    #[test]
    fn test_at_operator() {
        let mut cursor = Cursor::new("  )");
        assert!(cursor.at_operator());
        let mut cursor = Cursor::new(" (");
        assert!(!cursor.at_operator());
        let mut cursor = Cursor::new("");
        assert!(!cursor.at_operator());
    }

    #[test]
    fn test_location_is_one_based() {
        let mut cursor = Cursor::new("1+2");
        cursor.advance();
        assert_eq!(cursor.location(), SourceLocation::new(2));
    }
}
