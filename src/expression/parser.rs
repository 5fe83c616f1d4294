// Expression parser - converts tokens to an operator tree
//
// Every compound form starts with a parenthesized operand. After its closing
// parenthesis the operator is recognised in a fixed order: select/project,
// then cartesian product, then set operations, then joins. Anything that is
// not a compound form must be a single relation name.

use super::ast::{Expression, JoinKind, Predicate, SetOperator};
use super::error::{ExpressionError, ExpressionResult};
use super::lexer::Lexer;
use super::token::Token;
use crate::relation::{CompareOp, Value};

pub struct Parser {
    input: String,
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();
        Parser {
            input: input.to_string(),
            tokens,
            position: 0,
        }
    }

    /// Parse the whole input as one expression
    pub fn parse(&mut self) -> ExpressionResult<Expression> {
        let expression = self.parse_expression()?;

        if !self.match_token(&Token::Eof) {
            return Err(self.error(format!(
                "unexpected {} after complete expression",
                self.current_token()
            )));
        }

        Ok(expression)
    }

    /// expr := leaf | "(" expr ")" operator ...
    fn parse_expression(&mut self) -> ExpressionResult<Expression> {
        match self.current_token() {
            Token::LeftParen => self.parse_compound(),
            Token::Word(name) => {
                self.advance();
                Ok(Expression::Table(name))
            }
            other => Err(self.error(format!("expected relation name or '(', found {}", other))),
        }
    }

    /// Parse a compound form whose first operand is parenthesized
    fn parse_compound(&mut self) -> ExpressionResult<Expression> {
        let left = self.parse_operand()?;

        match self.current_token() {
            // Unary
            token if token.is_word("select") => {
                self.advance();
                let predicate = self.parse_predicate()?;
                Ok(Expression::Select {
                    input: Box::new(left),
                    predicate,
                })
            }
            token if token.is_word("project") => {
                self.advance();
                let columns = self.parse_column_list()?;
                Ok(Expression::Project {
                    input: Box::new(left),
                    columns,
                })
            }

            // Cartesian product
            token if token.is_word("x") => {
                self.advance();
                let right = self.parse_operand()?;
                Ok(Expression::product(left, right))
            }

            // Set operations
            token if token.is_word("U") => {
                self.advance();
                let right = self.parse_operand()?;
                Ok(Expression::set_operation(SetOperator::Union, left, right))
            }
            Token::Minus => {
                self.advance();
                let right = self.parse_operand()?;
                Ok(Expression::set_operation(SetOperator::Difference, left, right))
            }
            Token::Ampersand => {
                self.advance();
                let right = self.parse_operand()?;
                Ok(Expression::set_operation(SetOperator::Intersection, left, right))
            }

            // Joins
            Token::Join(kind) => {
                self.advance();
                self.parse_join(kind, left)
            }

            other => Err(self.error(format!("expected operator after ')', found {}", other))),
        }
    }

    /// operand := "(" expr ")"
    fn parse_operand(&mut self) -> ExpressionResult<Expression> {
        self.expect_token(Token::LeftParen)?;
        let expression = self.parse_expression()?;
        self.expect_token(Token::RightParen)?;
        Ok(expression)
    }

    /// "[" column op ["-"] literal "]"
    fn parse_predicate(&mut self) -> ExpressionResult<Predicate> {
        self.expect_token(Token::LeftBracket)?;

        let column = self.expect_word()?;
        let op = match self.current_token() {
            Token::Comparison(op) => {
                self.advance();
                op.parse::<CompareOp>()?
            }
            other => {
                return Err(self.error(format!("expected comparison operator, found {}", other)))
            }
        };

        let negative = if self.match_token(&Token::Minus) {
            self.advance();
            true
        } else {
            false
        };
        let literal = self.expect_word()?;
        let value = if negative {
            Value::parse_literal(&format!("-{}", literal))
        } else {
            Value::parse_literal(&literal)
        };

        self.expect_token(Token::RightBracket)?;

        Ok(Predicate { column, op, value })
    }

    /// "[" column ("," column)* "]"
    fn parse_column_list(&mut self) -> ExpressionResult<Vec<String>> {
        self.expect_token(Token::LeftBracket)?;

        let mut columns = vec![self.expect_word()?];
        while self.match_token(&Token::Comma) {
            self.advance();
            columns.push(self.expect_word()?);
        }

        self.expect_token(Token::RightBracket)?;
        Ok(columns)
    }

    /// "[" left_column "=" right_column "]" "(" expr ")"
    fn parse_join(&mut self, kind: JoinKind, left: Expression) -> ExpressionResult<Expression> {
        self.expect_token(Token::LeftBracket)?;
        let left_column = self.expect_word()?;
        self.expect_token(Token::Comparison("=".to_string()))?;
        let right_column = self.expect_word()?;
        self.expect_token(Token::RightBracket)?;

        let right = self.parse_operand()?;

        Ok(Expression::Join {
            kind,
            left: Box::new(left),
            right: Box::new(right),
            left_column,
            right_column,
        })
    }

    // Helper methods

    /// Get current token
    fn current_token(&self) -> Token {
        self.tokens
            .get(self.position)
            .cloned()
            .unwrap_or(Token::Eof)
    }

    /// Advance to next token
    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    /// Check if current token matches
    fn match_token(&self, token: &Token) -> bool {
        self.current_token() == *token
    }

    /// Expect a specific token
    fn expect_token(&mut self, token: Token) -> ExpressionResult<()> {
        if self.current_token() == token {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("expected {}, found {}", token, self.current_token())))
        }
    }

    /// Expect a bare word
    fn expect_word(&mut self) -> ExpressionResult<String> {
        match self.current_token() {
            Token::Word(word) => {
                self.advance();
                Ok(word)
            }
            other => Err(self.error(format!("expected name or literal, found {}", other))),
        }
    }

    fn error(&self, reason: String) -> ExpressionError {
        ExpressionError::Malformed {
            input: self.input.clone(),
            reason,
        }
    }
}

/// Parse an expression string into an operator tree
pub fn parse(input: &str) -> ExpressionResult<Expression> {
    Parser::new(input).parse()
}
