//! Context folding transformation
//!
//!     This pass turns the raw marker tokens from base tokenization into
//!     contextual tokens. It is a stateful machine over an explicit context
//!     stack: an empty stack means normal code, and string / line-comment /
//!     block-comment contexts are pushed and popped as their delimiters go
//!     by. Whatever the raw lexer thought a character was, the stack has
//!     the final word: a `{` inside a string stays string text, and a `///`
//!     inside a comment stays comment text.
//!
//!     Nesting is handled by depth of the stack itself rather than by
//!     per-context counters: Stata block comments nest, and so do compound
//!     `` `"..."' `` strings, so each re-open pushes another frame.
//!
//! Folding rules
//!
//!     - `"` opens a regular string; `` ` `` immediately followed by `"`
//!       opens a compound string, closed by `"'`. Inside a compound string
//!       a bare `"` is ordinary content.
//!     - `*` opens a line comment only at the start of a line (leading
//!       whitespace allowed). `//` opens one at line start or after
//!       whitespace. Both run to the next line break, which is emitted as
//!       its own LineBreak token.
//!     - `/*` ... `*/` form block comments anywhere outside strings; their
//!       content, line breaks included, folds into one Comment token.
//!     - `///` at line start or after whitespace absorbs the rest of the
//!       physical line and the line break into a ContinuationMarker.
//!     - `{` / `}` on an empty stack become brace tokens; everything else
//!       accumulates into PlainText runs, split at line breaks.
//!
//!     There is no error outcome. An unterminated string or block comment
//!     simply folds the rest of the buffer under the open context; the
//!     completeness check is what stops such input from executing.

use crate::stata::lexing::tokens::RawToken;
use crate::stata::token::{Token, TokenKind, TokenSequence};
use logos::Span;

/// String flavors tracked on the context stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrKind {
    /// `"..."`, closed by the next `"`.
    Regular,
    /// `` `"..."' ``, closed by `"'`, nests.
    Compound,
}

/// One frame of the context stack. An empty stack means normal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Str(StrKind),
    LineComment,
    BlockComment,
}

/// Fold raw tokens into a contextual token sequence.
pub fn fold(source: &str, raw: Vec<(RawToken, Span)>) -> TokenSequence {
    Folder::new(source).run(&raw)
}

struct Folder<'src> {
    source: &'src str,
    out: Vec<Token>,
    /// Token being accumulated; flushed whenever the kind changes.
    current: Option<(TokenKind, String)>,
    contexts: Vec<Context>,
    /// True once the current logical line has seen non-whitespace content.
    /// Gates `*` comment detection; stays true across a continuation.
    line_has_content: bool,
}

impl<'src> Folder<'src> {
    fn new(source: &'src str) -> Self {
        Folder {
            source,
            out: Vec::new(),
            current: None,
            contexts: Vec::new(),
            line_has_content: false,
        }
    }

    fn run(mut self, raw: &[(RawToken, Span)]) -> TokenSequence {
        let source = self.source;
        let mut i = 0;
        while i < raw.len() {
            let (kind, span) = &raw[i];
            let text = &source[span.clone()];
            i = match self.contexts.last().copied() {
                None => self.normal(*kind, text, raw, i),
                Some(Context::Str(StrKind::Regular)) => self.in_string(*kind, text, i),
                Some(Context::Str(StrKind::Compound)) => self.in_compound(*kind, text, raw, i),
                Some(Context::LineComment) => self.in_line_comment(*kind, text, i),
                Some(Context::BlockComment) => self.in_block_comment(*kind, text, i),
            };
        }
        self.flush();
        TokenSequence::new(self.out)
    }

    fn append(&mut self, kind: TokenKind, text: &str) {
        match &mut self.current {
            Some((k, buf)) if *k == kind => buf.push_str(text),
            _ => {
                self.flush();
                self.current = Some((kind, text.to_string()));
            }
        }
    }

    fn flush(&mut self) {
        if let Some((kind, text)) = self.current.take() {
            self.out.push(Token::new(kind, text));
        }
    }

    fn emit(&mut self, kind: TokenKind, text: String) {
        self.flush();
        self.out.push(Token::new(kind, text));
    }

    /// Character immediately preceding the upcoming token, if any.
    fn last_char(&self) -> Option<char> {
        if let Some((_, buf)) = &self.current {
            buf.chars().last()
        } else {
            self.out.last().and_then(|t| t.text.chars().last())
        }
    }

    /// `//` and `///` only open at line start or after whitespace. The
    /// newline case covers the first tokens of a continued physical line.
    fn slash_comment_can_open(&self) -> bool {
        !self.line_has_content
            || matches!(self.last_char(), Some(' ') | Some('\t') | Some('\n') | Some('\r'))
    }

    fn normal(&mut self, kind: RawToken, text: &str, raw: &[(RawToken, Span)], i: usize) -> usize {
        match kind {
            RawToken::Quote => {
                self.flush();
                self.contexts.push(Context::Str(StrKind::Regular));
                self.append(TokenKind::Str, text);
                self.line_has_content = true;
                i + 1
            }
            RawToken::Backtick => {
                if matches!(raw.get(i + 1), Some((RawToken::Quote, _))) {
                    self.flush();
                    self.contexts.push(Context::Str(StrKind::Compound));
                    let opener = two_token_text(self.source, raw, i);
                    self.append(TokenKind::Str, &opener);
                    self.line_has_content = true;
                    i + 2
                } else {
                    // Bare backtick: local macro expansion, ordinary text.
                    self.append(TokenKind::PlainText, text);
                    self.line_has_content = true;
                    i + 1
                }
            }
            RawToken::Star => {
                if !self.line_has_content {
                    self.flush();
                    self.contexts.push(Context::LineComment);
                    self.append(TokenKind::Comment, text);
                } else {
                    // Mid-line star is multiplication.
                    self.append(TokenKind::PlainText, text);
                }
                i + 1
            }
            RawToken::LineComment => {
                if self.slash_comment_can_open() {
                    self.flush();
                    self.contexts.push(Context::LineComment);
                    self.append(TokenKind::Comment, text);
                } else {
                    self.append(TokenKind::PlainText, text);
                    self.line_has_content = true;
                }
                i + 1
            }
            RawToken::Continuation => {
                if self.slash_comment_can_open() {
                    self.continuation(text, raw, i)
                } else {
                    self.append(TokenKind::PlainText, text);
                    self.line_has_content = true;
                    i + 1
                }
            }
            RawToken::BlockOpen => {
                self.flush();
                self.contexts.push(Context::BlockComment);
                self.append(TokenKind::Comment, text);
                i + 1
            }
            RawToken::OpenBrace => {
                self.emit(TokenKind::OpenBrace, text.to_string());
                self.line_has_content = true;
                i + 1
            }
            RawToken::CloseBrace => {
                self.emit(TokenKind::CloseBrace, text.to_string());
                self.line_has_content = true;
                i + 1
            }
            RawToken::Newline => {
                self.emit(TokenKind::LineBreak, text.to_string());
                self.line_has_content = false;
                i + 1
            }
            RawToken::Whitespace => {
                self.append(TokenKind::PlainText, text);
                i + 1
            }
            // Slash, SingleQuote, stray BlockClose, Text.
            _ => {
                self.append(TokenKind::PlainText, text);
                self.line_has_content = true;
                i + 1
            }
        }
    }

    /// Absorb `///`, the rest of the physical line, and the line break into
    /// one ContinuationMarker. `line_has_content` is left untouched: the
    /// next physical line continues the current logical line.
    fn continuation(&mut self, marker: &str, raw: &[(RawToken, Span)], i: usize) -> usize {
        let mut text = String::from(marker);
        let mut j = i + 1;
        while j < raw.len() {
            let (kind, span) = &raw[j];
            text.push_str(&self.source[span.clone()]);
            j += 1;
            if matches!(kind, RawToken::Newline) {
                break;
            }
        }
        self.emit(TokenKind::ContinuationMarker, text);
        j
    }

    fn in_string(&mut self, kind: RawToken, text: &str, i: usize) -> usize {
        self.append(TokenKind::Str, text);
        if matches!(kind, RawToken::Quote) {
            self.contexts.pop();
            self.flush();
        }
        i + 1
    }

    fn in_compound(&mut self, kind: RawToken, text: &str, raw: &[(RawToken, Span)], i: usize) -> usize {
        match kind {
            RawToken::Backtick if matches!(raw.get(i + 1), Some((RawToken::Quote, _))) => {
                let opener = two_token_text(self.source, raw, i);
                self.append(TokenKind::Str, &opener);
                self.contexts.push(Context::Str(StrKind::Compound));
                i + 2
            }
            RawToken::Quote if matches!(raw.get(i + 1), Some((RawToken::SingleQuote, _))) => {
                let closer = two_token_text(self.source, raw, i);
                self.append(TokenKind::Str, &closer);
                self.contexts.pop();
                if self.contexts.is_empty() {
                    self.flush();
                }
                i + 2
            }
            // A bare `"` inside a compound string is ordinary content.
            _ => {
                self.append(TokenKind::Str, text);
                i + 1
            }
        }
    }

    fn in_line_comment(&mut self, kind: RawToken, text: &str, i: usize) -> usize {
        if matches!(kind, RawToken::Newline) {
            self.contexts.pop();
            self.emit(TokenKind::LineBreak, text.to_string());
            self.line_has_content = false;
        } else {
            self.append(TokenKind::Comment, text);
        }
        i + 1
    }

    fn in_block_comment(&mut self, kind: RawToken, text: &str, i: usize) -> usize {
        self.append(TokenKind::Comment, text);
        match kind {
            RawToken::BlockOpen => self.contexts.push(Context::BlockComment),
            RawToken::BlockClose => {
                self.contexts.pop();
                if self.contexts.is_empty() {
                    self.flush();
                }
            }
            _ => {}
        }
        i + 1
    }
}

/// Source text covered by the raw tokens at `i` and `i + 1` together.
fn two_token_text(source: &str, raw: &[(RawToken, Span)], i: usize) -> String {
    let mut text = String::from(&source[raw[i].1.clone()]);
    text.push_str(&source[raw[i + 1].1.clone()]);
    text
}
