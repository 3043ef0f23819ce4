//! Raw token definitions for the base Stata lexer.
//!
//! These are marker-level tokens produced by the logos derive macro. They
//! carry no context: a `Quote` here may open a string, close one, or sit
//! inside a comment. Context resolution is the folding pass's job, see
//! [context_folding](super::context_folding).

use logos::Logos;

/// All raw tokens the base lexer can produce.
///
/// The `Text` catch-all excludes exactly the characters that have their own
/// marker token, so the variants jointly cover every input byte.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum RawToken {
    // Comment and continuation markers. Longest match wins, so `///` beats
    // `//`, and `/*` / `*/` beat the single-character fallbacks.
    #[token("/*")]
    BlockOpen,
    #[token("*/")]
    BlockClose,
    #[token("///")]
    Continuation,
    #[token("//")]
    LineComment,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Quote characters. Compound quotes (`" ... "') are recognized by the
    // folding pass from adjacent Backtick/Quote and Quote/SingleQuote pairs.
    #[token("\"")]
    Quote,
    #[token("`")]
    Backtick,
    #[token("'")]
    SingleQuote,

    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    #[regex(r"\r\n|\r|\n")]
    Newline,

    #[regex(r"[ \t]+")]
    Whitespace,

    // Everything else, in maximal runs.
    #[regex(r#"[^ \t\r\n/*"'`{}]+"#)]
    Text,
}

impl RawToken {
    /// True for the whitespace-run token (line breaks excluded).
    pub fn is_whitespace(&self) -> bool {
        matches!(self, RawToken::Whitespace)
    }
}
