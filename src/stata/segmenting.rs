//! Statement segmentation
//!
//!     Splits a tokenized buffer into the ordered list of statements that
//!     get dispatched one at a time. The walk mirrors the completeness
//!     check's brace accounting: a line break ends the current statement
//!     only at brace depth zero, so a `foreach { ... }` block with any
//!     number of internal line breaks stays one statement.
//!
//!     Continuation markers disappear here. Each one is replaced by a
//!     single joining space so the statement text reads as if the two
//!     physical lines had been typed as one. Statements that hold nothing
//!     but whitespace and comments are dropped rather than forwarded.
//!
//!     Segmentation cannot fail. Unbalanced input (an unmatched `{` that
//!     slipped past the completeness check) simply folds everything after
//!     the opener into one trailing statement.

use crate::stata::token::{Token, TokenKind, TokenSequence};

/// One independently dispatchable unit of source text.
///
/// Tokens keep their kinds so the dispatch layer can tag each piece with a
/// display marker for terminal echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    tokens: Vec<Token>,
}

impl Statement {
    fn from_tokens(tokens: Vec<Token>) -> Self {
        Statement { tokens }
    }

    /// A single plain-text statement, used for session bootstrap commands.
    pub fn plain(text: impl Into<String>) -> Self {
        Statement {
            tokens: vec![Token::new(TokenKind::PlainText, text)],
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The statement's executable text: all token texts concatenated.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// The ordered `(marker, text)` pairs handed to the session capability.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.tokens
            .iter()
            .map(|t| (t.kind.marker(), t.text.as_str()))
            .collect()
    }

    /// True when nothing in the statement is executable.
    fn is_blank(&self) -> bool {
        self.tokens.iter().all(|t| t.is_blank())
    }
}

/// Segment a tokenized buffer into dispatchable statements.
pub fn segment(tokens: &TokenSequence) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut depth: usize = 0;

    for token in tokens {
        match token.kind {
            TokenKind::OpenBrace => {
                depth += 1;
                current.push(token.clone());
            }
            TokenKind::CloseBrace => {
                depth = depth.saturating_sub(1);
                current.push(token.clone());
            }
            // The two physical lines joined by a continuation read as one:
            // the marker itself becomes a single separating space.
            TokenKind::ContinuationMarker => {
                current.push(Token::new(TokenKind::PlainText, " "));
            }
            TokenKind::LineBreak if depth == 0 => {
                push_statement(&mut statements, std::mem::take(&mut current));
            }
            // Inside a brace block, line breaks fold into the statement.
            _ => current.push(token.clone()),
        }
    }
    push_statement(&mut statements, current);

    statements
}

fn push_statement(statements: &mut Vec<Statement>, tokens: Vec<Token>) {
    if tokens.is_empty() {
        return;
    }
    let statement = Statement::from_tokens(tokens);
    if !statement.is_blank() {
        statements.push(statement);
    }
}
