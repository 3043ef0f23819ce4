//! Token model for tokenized Stata source.
//!
//!     Tokens here are contextual: the lexer has already resolved string,
//!     comment, and brace context, so a brace token really is a brace and
//!     never a character buried inside a string literal. Every token
//!     carries the exact source text it covers, which makes the sequence
//!     lossless: concatenating all token texts reproduces the input
//!     byte-for-byte. Segmentation and the completeness check both rely on
//!     that property.

use serde::Serialize;

/// Classification of one contextual token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// Source text outside strings and comments.
    PlainText,
    /// A line or block comment, markers included.
    Comment,
    /// A string literal, quotes included. Covers both regular `"..."`
    /// strings and compound `` `"..."' `` strings.
    Str,
    /// `{` outside string and comment context.
    OpenBrace,
    /// `}` outside string and comment context.
    CloseBrace,
    /// A `///` line continuation, including any trailing text on the
    /// physical line and the consumed line break.
    ContinuationMarker,
    /// A line break outside string and block-comment context.
    LineBreak,
}

impl TokenKind {
    /// Display marker attached to each statement token for downstream echo
    /// formatting in the front-end.
    pub fn marker(&self) -> &'static str {
        match self {
            TokenKind::PlainText => "Token.Text",
            TokenKind::Comment => "Token.Comment",
            TokenKind::Str => "Token.Literal.String",
            TokenKind::OpenBrace => "Token.MatchingBracket.Open",
            TokenKind::CloseBrace => "Token.MatchingBracket.Close",
            TokenKind::ContinuationMarker => "Token.Comment.Special",
            TokenKind::LineBreak => "Token.Text",
        }
    }

    /// True for kinds that can never make a statement executable on their
    /// own: comments, line breaks, and erased continuations.
    pub fn is_filler(&self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::LineBreak | TokenKind::ContinuationMarker
        )
    }
}

/// One contextual token: a kind paired with the exact source text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// True when the token contributes nothing executable: filler kinds and
    /// whitespace-only plain text.
    pub fn is_blank(&self) -> bool {
        self.kind.is_filler()
            || (self.kind == TokenKind::PlainText && self.text.trim().is_empty())
    }
}

/// A flat, ordered token sequence produced by one lex call.
///
/// Owned by the call that produced it and immutable after construction;
/// callers extract a verdict and a statement list, then drop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenSequence(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Token> {
        self.0.last()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
