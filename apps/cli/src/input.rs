//! Mapping typed lines onto session input.

use study_core::Key;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A navigation or flip key.
    Key(Key),
    /// A 1-based choice, converted to a 0-based index.
    Choice(usize),
    /// Play again.
    Restart,
    /// Leave the mode.
    Quit,
    Unknown,
}

impl Input {
    /// Parse a line. An empty line counts as Enter.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Self::Key(Key::Enter),
            "n" | "next" | "l" => Self::Key(Key::Right),
            "p" | "prev" | "h" => Self::Key(Key::Left),
            "f" | "flip" => Self::Key(Key::Space),
            "r" | "again" => Self::Restart,
            "q" | "quit" | "back" => Self::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => Self::Choice(n - 1),
                _ => Self::Unknown,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(Input::parse(""), Input::Key(Key::Enter));
        assert_eq!(Input::parse("n"), Input::Key(Key::Right));
        assert_eq!(Input::parse("PREV"), Input::Key(Key::Left));
        assert_eq!(Input::parse(" f "), Input::Key(Key::Space));
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(Input::parse("1"), Input::Choice(0));
        assert_eq!(Input::parse("12"), Input::Choice(11));
        assert_eq!(Input::parse("0"), Input::Unknown);
        assert_eq!(Input::parse("-3"), Input::Unknown);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("back"), Input::Quit);
        assert_eq!(Input::parse("r"), Input::Restart);
        assert_eq!(Input::parse("what"), Input::Unknown);
    }
}
