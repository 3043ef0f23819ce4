//! Test support
//!
//! Factories for building expected token sequences and a scripted session
//! double for exercising dispatch without a live Stata process. Kept as a
//! normal module so integration tests can reach it.

use crate::stata::session::Session;
use crate::stata::token::{Token, TokenKind, TokenSequence};
use std::collections::VecDeque;

/// Builders for expected token data in assertions.
pub mod factories {
    use super::*;

    /// Build a token list from `(kind, text)` pairs.
    pub fn toks(pairs: &[(TokenKind, &str)]) -> Vec<Token> {
        pairs
            .iter()
            .map(|(kind, text)| Token::new(*kind, *text))
            .collect()
    }

    /// Build a full sequence from `(kind, text)` pairs.
    pub fn seq(pairs: &[(TokenKind, &str)]) -> TokenSequence {
        TokenSequence::new(toks(pairs))
    }
}

/// Session double that replays scripted `(exit_code, output)` replies and
/// records every submission it receives.
///
/// Replies are consumed in order; once the script runs dry, further
/// submissions succeed silently with `(0, "")`.
pub struct ScriptedSession {
    replies: VecDeque<(i32, String)>,
    submissions: Vec<Vec<(String, String)>>,
}

impl ScriptedSession {
    pub fn new(replies: Vec<(i32, &str)>) -> Self {
        ScriptedSession {
            replies: replies
                .into_iter()
                .map(|(code, text)| (code, text.to_string()))
                .collect(),
            submissions: Vec::new(),
        }
    }

    /// Every `(marker, text)` pair list submitted so far, in order.
    pub fn submissions(&self) -> &[Vec<(String, String)>] {
        &self.submissions
    }

    /// The flattened text of each submitted statement, in order.
    pub fn submitted_texts(&self) -> Vec<String> {
        self.submissions
            .iter()
            .map(|pairs| pairs.iter().map(|(_, text)| text.as_str()).collect())
            .collect()
    }
}

impl Session for ScriptedSession {
    fn submit(&mut self, pairs: &[(&'static str, &str)]) -> (i32, String) {
        self.submissions.push(
            pairs
                .iter()
                .map(|(marker, text)| (marker.to_string(), text.to_string()))
                .collect(),
        );
        self.replies.pop_front().unwrap_or((0, String::new()))
    }
}
