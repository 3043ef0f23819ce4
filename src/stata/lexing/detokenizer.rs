//! Detokenizer for contextual token sequences.
//!
//! The inverse of lexing: concatenating every token's text reproduces the
//! source buffer exactly. Segmentation re-reads statement text, so this
//! guarantee is what makes the whole pipeline trustworthy.

use crate::stata::token::TokenSequence;

/// Reassemble the exact source text from a token sequence.
pub fn detokenize(tokens: &TokenSequence) -> String {
    tokens.into_iter().map(|t| t.text.as_str()).collect()
}
