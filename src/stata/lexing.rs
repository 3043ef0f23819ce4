//! Lexer
//!
//!     This module orchestrates the tokenization pipeline for Stata source.
//!     Lexing happens in two stages, each receiving the output of the
//!     previous one:
//!
//!         1. Base tokenization using a vanilla logos lexer. See
//!            [base_tokenization]. This stage knows nothing about context:
//!            it emits marker-level raw tokens (quote characters, comment
//!            openers, braces, line breaks, runs of ordinary text) paired
//!            with their byte spans.
//!
//!         2. Context folding. See [context_folding]. A stateful pass walks
//!            the raw tokens with an explicit context stack (string, line
//!            comment, block comment) and folds them into the contextual
//!            [Token](crate::stata::token::Token) kinds. A brace inside a
//!            string stays string text; a `///` inside a comment stays
//!            comment text.
//!
//!     Splitting the work this way keeps the logos grammar trivial and
//!     isolates all context rules in one transformation, which is where the
//!     real edge cases live.
//!
//! Losslessness
//!
//!     The folded sequence preserves the source exactly: every input byte
//!     lands in exactly one token's text, in order. [detokenizer] provides
//!     the inverse operation and the round-trip tests that pin the
//!     guarantee down. Malformed input (unterminated string or comment) is
//!     tokenized best-effort to the end of the buffer under the still-open
//!     context; there is no error outcome.

pub mod base_tokenization;
pub mod context_folding;
pub mod detokenizer;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use detokenizer::detokenize;

use crate::stata::token::TokenSequence;

/// Lex Stata source into a contextual token sequence.
pub fn lex(source: &str) -> TokenSequence {
    let raw = base_tokenization::tokenize(source);
    context_folding::fold(source, raw)
}
