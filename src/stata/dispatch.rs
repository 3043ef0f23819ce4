//! Dispatch adapter
//!
//! Feeds segmented statements into the session capability one at a time,
//! in order, and aggregates the results. Later statements may depend on
//! side effects of earlier ones, so after a non-zero exit code nothing
//! further is submitted and the failing code is returned with the output
//! captured so far.

use crate::stata::segmenting::Statement;
use crate::stata::session::Session;

/// Submit statements in order, stopping at the first non-zero exit code.
///
/// Returns the final exit code and the concatenation, in submission order,
/// of every output received (the failing statement's output included).
pub fn run<S: Session + ?Sized>(session: &mut S, statements: &[Statement]) -> (i32, String) {
    let mut output = String::new();
    for statement in statements {
        let pairs = statement.pairs();
        let (code, text) = session.submit(&pairs);
        output.push_str(&text);
        if code != 0 {
            return (code, output);
        }
    }
    (0, output)
}
