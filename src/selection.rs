use crate::SelectionError;

use std::str::FromStr;

/// Word that ends the selection prompt.
pub const QUIT_COMMAND: &str = "quit";

/// One answer to the "which character?" prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Selection {
    /// Show this character. Unsupported characters are still accepted.
    Glyph(char),
    Quit,
}

impl FromStr for Selection {
    type Err = SelectionError;

    /// Surrounding whitespace is ignored. `quit` matches in any case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(QUIT_COMMAND) {
            return Ok(Self::Quit);
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(character), None) => Ok(Self::Glyph(character)),
            _ => Err(SelectionError::NotSingleCharacter(input.chars().count())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_characters() {
        assert_eq!("7".parse::<Selection>(), Ok(Selection::Glyph('7')));
        assert_eq!("  b\n".parse::<Selection>(), Ok(Selection::Glyph('b')));
        assert_eq!("q".parse::<Selection>(), Ok(Selection::Glyph('q')));
        assert_eq!("ß".parse::<Selection>(), Ok(Selection::Glyph('ß')));
    }

    #[test]
    fn quit_ignores_case() {
        assert_eq!("quit".parse::<Selection>(), Ok(Selection::Quit));
        assert_eq!(" QUIT ".parse::<Selection>(), Ok(Selection::Quit));
    }

    #[test]
    fn rejects_other_lengths() {
        assert_eq!(
            "ab".parse::<Selection>(),
            Err(SelectionError::NotSingleCharacter(2))
        );
        assert_eq!(
            "".parse::<Selection>(),
            Err(SelectionError::NotSingleCharacter(0))
        );
        assert_eq!(
            "   ".parse::<Selection>(),
            Err(SelectionError::NotSingleCharacter(0))
        );
    }
}
