//! Stata source handling
//!
//!     This module hosts the whole bridge pipeline. Raw cell text flows
//!     through lexing into a flat token sequence, which feeds the two
//!     consumers: the completeness check (should the front-end keep
//!     buffering?) and the segmenter (how does this buffer split into
//!     dispatchable statements?). Statements are then pushed through the
//!     dispatch adapter into whatever session implementation the caller
//!     injects.
//!
//! Pipeline
//!
//!     source text
//!         -> lexing::lex            flat, lossless token sequence
//!         -> completeness::verdict  Complete / Incomplete
//!         -> segmenting::segment    ordered statement list
//!         -> dispatch::run          (exit code, combined output)
//!
//!     The pipeline is synchronous and stateless between calls; every
//!     invocation owns its token sequence and statement list exclusively.
//!     The only blocking point is the session round-trip inside dispatch.

pub mod completeness;
pub mod config;
pub mod dispatch;
pub mod lexing;
pub mod processor;
pub mod protocol;
pub mod segmenting;
pub mod session;
pub mod testing;
pub mod token;

pub use completeness::{verdict, Verdict};
pub use dispatch::run;
pub use lexing::lex;
pub use processor::{CellProcessor, ExecutionOutcome};
pub use segmenting::{segment, Statement};
pub use session::{ExecutionMode, Session};
pub use token::{Token, TokenKind, TokenSequence};
