// Expression tokens for lexical analysis

use super::ast::JoinKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Relation names, column names, operator words (`select`, `x`, `U`) and literals
    Word(String),
    /// A run of comparison characters, e.g. `=`, `>=`, `!=` or an unsupported `=>`
    Comparison(String),

    // Join operators: join, -join, join-, -join-
    Join(JoinKind),

    // Set operators without a word form
    Ampersand,
    Minus,

    // Delimiters
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Comma,

    // Special
    Unknown(char),
    Eof,
}

impl Token {
    /// Check if this token is the given bare word
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Token::Word(w) if w == word)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => write!(f, "'{}'", w),
            Token::Comparison(op) => write!(f, "'{}'", op),
            Token::Join(kind) => write!(f, "'{}'", kind.as_str()),
            Token::Ampersand => write!(f, "'&'"),
            Token::Minus => write!(f, "'-'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::LeftBracket => write!(f, "'['"),
            Token::RightBracket => write!(f, "']'"),
            Token::Comma => write!(f, "','"),
            Token::Unknown(c) => write!(f, "'{}'", c),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_word() {
        assert!(Token::Word("select".to_string()).is_word("select"));
        assert!(!Token::Word("Select".to_string()).is_word("select"));
        assert!(!Token::Minus.is_word("-"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Join(JoinKind::Full).to_string(), "'-join-'");
        assert_eq!(Token::Eof.to_string(), "end of input");
    }
}
