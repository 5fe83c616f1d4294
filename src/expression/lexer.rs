// Expression lexer - tokenizes relational algebra expressions

use super::ast::JoinKind;
use super::token::Token;

const JOIN_WORD: &str = "join";

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let input: Vec<char> = input.chars().collect();
        let current_char = input.first().copied();
        Lexer {
            input,
            position: 0,
            current_char,
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.current_char else {
            return Token::Eof;
        };

        match ch {
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            '[' => {
                self.advance();
                Token::LeftBracket
            }
            ']' => {
                self.advance();
                Token::RightBracket
            }
            ',' => {
                self.advance();
                Token::Comma
            }
            '&' => {
                self.advance();
                Token::Ampersand
            }
            '-' => {
                self.advance();
                // -join and -join-
                if self.at_join_word() {
                    self.advance_by(JOIN_WORD.len());
                    if self.current_char == Some('-') {
                        self.advance();
                        Token::Join(JoinKind::Full)
                    } else {
                        Token::Join(JoinKind::Left)
                    }
                } else {
                    Token::Minus
                }
            }
            '<' | '>' | '=' | '!' => self.read_comparison(),
            c if is_word_char(c) => self.read_word(),
            c => {
                self.advance();
                Token::Unknown(c)
            }
        }
    }

    /// Advance to the next character
    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Peek `offset` characters ahead without advancing
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Whether the input at the current position is the whole word `join`
    fn at_join_word(&self) -> bool {
        let matches_word = JOIN_WORD
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c));

        matches_word && !self.peek_at(JOIN_WORD.len()).is_some_and(is_word_char)
    }

    /// Skip whitespace characters
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read a word; `join` and `join-` become join operators
    fn read_word(&mut self) -> Token {
        let mut word = String::new();

        while let Some(ch) = self.current_char {
            if is_word_char(ch) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if word == JOIN_WORD {
            if self.current_char == Some('-') {
                self.advance();
                return Token::Join(JoinKind::Right);
            }
            return Token::Join(JoinKind::Inner);
        }

        Token::Word(word)
    }

    /// Read a run of comparison characters
    fn read_comparison(&mut self) -> Token {
        let mut op = String::new();

        while let Some(ch) = self.current_char {
            if matches!(ch, '<' | '>' | '=' | '!') {
                op.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Comparison(op)
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            if token == Token::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }

        tokens
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.'
}
