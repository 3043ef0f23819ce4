//! Base tokenization for the Stata lexer.
//!
//! This module produces the raw token stream using the logos lexer library.
//! This is the entry point where source strings become token streams; the
//! context folding transformation operates on the stream, never on the
//! string itself.

use crate::stata::lexing::tokens::RawToken;
use logos::Logos;

/// Tokenize source text into raw tokens with their byte spans.
///
/// Every input byte is covered by exactly one span, in order. Slices the
/// lexer cannot classify (stray control bytes and the like) are absorbed as
/// `Text` so that downstream folding stays lossless; tokenization has no
/// error outcome.
pub fn tokenize(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => tokens.push((RawToken::Text, lexer.span())),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("di 2");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], (RawToken::Text, 0..2));
        assert_eq!(tokens[1], (RawToken::Whitespace, 2..3));
        assert_eq!(tokens[2], (RawToken::Text, 3..4));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_spans_cover_every_byte() {
        let source = "di \"a{b\" // c\nforeach i in 1/3 {\n}\n";
        let tokens = tokenize(source);
        let mut pos = 0;
        for (_, span) in &tokens {
            assert_eq!(span.start, pos, "gap before span {:?}", span);
            pos = span.end;
        }
        assert_eq!(pos, source.len());
    }

    #[test]
    fn test_control_bytes_are_covered() {
        // Control characters fall into the Text run; nothing is dropped.
        let source = "a\u{0}b\u{7}";
        let tokens = tokenize(source);
        let total: usize = tokens.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(total, source.len());
    }
}
