//! Cell processing API
//!
//! One [`CellProcessor`] owns one notebook cell's tokenized source and the
//! views derived from it: the completeness verdict, the statement list,
//! and the full execute round-trip against an injected session. Nothing is
//! cached between cells; every buffer gets a fresh processor, which keeps
//! the pipeline stateless exactly where the session itself is stateful.

use crate::stata::completeness::{verdict, Verdict};
use crate::stata::dispatch;
use crate::stata::lexing::lex;
use crate::stata::protocol::{ExecuteReply, IsCompleteReply, StreamContent};
use crate::stata::segmenting::{segment, Statement};
use crate::stata::session::Session;
use crate::stata::token::TokenSequence;

/// Result of executing one cell: the reply for the front-end plus an
/// optional stream notification (absent when the session produced no
/// visible output).
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutcome {
    pub reply: ExecuteReply,
    pub stream: Option<StreamContent>,
}

/// Owns one cell's token sequence and answers questions about it.
#[derive(Debug, Clone)]
pub struct CellProcessor {
    tokens: TokenSequence,
}

impl CellProcessor {
    pub fn new(source: &str) -> Self {
        CellProcessor { tokens: lex(source) }
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn verdict(&self) -> Verdict {
        verdict(&self.tokens)
    }

    pub fn statements(&self) -> Vec<Statement> {
        segment(&self.tokens)
    }

    pub fn is_complete_reply(&self) -> IsCompleteReply {
        IsCompleteReply::from_verdict(self.verdict())
    }

    /// Run the cell against a session and assemble the front-end replies.
    ///
    /// Incomplete input is answered with an error reply and never reaches
    /// the session. Otherwise statements are dispatched fail-fast and the
    /// captured output is routed to stdout or stderr by exit code.
    pub fn execute<S: Session + ?Sized>(
        &self,
        session: &mut S,
        execution_count: u64,
    ) -> ExecutionOutcome {
        if !self.verdict().is_complete() {
            return ExecutionOutcome {
                reply: ExecuteReply::error(execution_count),
                stream: None,
            };
        }

        let statements = self.statements();
        let (code, output) = dispatch::run(session, &statements);
        let reply = if code == 0 {
            ExecuteReply::ok(execution_count)
        } else {
            ExecuteReply::error(execution_count)
        };
        let stream = if output.trim().is_empty() {
            None
        } else {
            Some(StreamContent::for_exit(code, output))
        };
        ExecutionOutcome { reply, stream }
    }
}
