//! Key bindings for keyboard-driven hosts.

/// A key press as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Enter,
    Char(char),
    Other,
}

/// Flashcard action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardAction {
    Prev,
    Next,
    Flip,
}

impl FlashcardAction {
    /// Left/right arrows step, space and enter flip.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Left => Some(Self::Prev),
            Key::Right => Some(Self::Next),
            Key::Space | Key::Enter => Some(Self::Flip),
            Key::Char(_) | Key::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_bindings() {
        assert_eq!(FlashcardAction::from_key(Key::Left), Some(FlashcardAction::Prev));
        assert_eq!(FlashcardAction::from_key(Key::Right), Some(FlashcardAction::Next));
        assert_eq!(FlashcardAction::from_key(Key::Space), Some(FlashcardAction::Flip));
        assert_eq!(FlashcardAction::from_key(Key::Enter), Some(FlashcardAction::Flip));
        assert_eq!(FlashcardAction::from_key(Key::Char('x')), None);
        assert_eq!(FlashcardAction::from_key(Key::Other), None);
    }
}
