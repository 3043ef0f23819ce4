//! End-to-end pipeline tests: source text in, front-end replies out.

use stata_bridge::stata::processor::CellProcessor;
use stata_bridge::stata::protocol::{ExecutionStatus, StreamName};
use stata_bridge::stata::session::startup_statements;
use stata_bridge::stata::testing::ScriptedSession;
use std::path::PathBuf;

#[test]
fn test_complete_cell_executes_and_streams_stdout() {
    let processor = CellProcessor::new("sysuse auto\nsu price");
    let mut session = ScriptedSession::new(vec![(0, "(1978 automobile data)\n"), (0, "summary\n")]);

    let outcome = processor.execute(&mut session, 1);

    assert_eq!(outcome.reply.status, ExecutionStatus::Ok);
    assert_eq!(outcome.reply.execution_count, 1);
    let stream = outcome.stream.expect("visible output expected");
    assert_eq!(stream.name, StreamName::Stdout);
    assert_eq!(stream.text, "(1978 automobile data)\nsummary\n");
    assert_eq!(session.submitted_texts(), vec!["sysuse auto", "su price"]);
}

#[test]
fn test_incomplete_cell_never_reaches_the_session() {
    let processor = CellProcessor::new("foreach i in 1/3 {\n  di `i'");
    let mut session = ScriptedSession::new(vec![]);

    let reply = processor.is_complete_reply();
    assert_eq!(reply.status, "incomplete");
    assert_eq!(reply.indent, Some("    "));

    let outcome = processor.execute(&mut session, 2);
    assert_eq!(outcome.reply.status, ExecutionStatus::Error);
    assert!(outcome.stream.is_none());
    assert!(session.submissions().is_empty());
}

#[test]
fn test_failing_cell_streams_stderr_and_stops() {
    let processor = CellProcessor::new("di 1\nbogus\ndi 3");
    let mut session =
        ScriptedSession::new(vec![(0, "1\n"), (199, "unrecognized command\n"), (0, "3\n")]);

    let outcome = processor.execute(&mut session, 3);

    assert_eq!(outcome.reply.status, ExecutionStatus::Error);
    let stream = outcome.stream.expect("error output expected");
    assert_eq!(stream.name, StreamName::Stderr);
    assert_eq!(stream.text, "1\nunrecognized command\n");
    // Fail-fast: the statement after the failure was never submitted.
    assert_eq!(session.submitted_texts(), vec!["di 1", "bogus"]);
}

#[test]
fn test_continuation_cell_dispatches_single_joined_statement() {
    let processor = CellProcessor::new("display ///\n  2");
    let mut session = ScriptedSession::new(vec![(0, "2\n")]);

    let outcome = processor.execute(&mut session, 4);

    assert_eq!(outcome.reply.status, ExecutionStatus::Ok);
    assert_eq!(session.submissions().len(), 1);
    let submitted = &session.submitted_texts()[0];
    let words: Vec<&str> = submitted.split_whitespace().collect();
    assert_eq!(words, vec!["display", "2"]);
}

#[test]
fn test_session_bootstrap_round_trip() {
    // The statements a host sends right after launching a session go
    // through the same submission interface as cell statements.
    let mut session = ScriptedSession::new(vec![(0, ""), (0, "")]);
    let statements = startup_statements(&PathBuf::from("/home/user/notebooks"));
    let (code, output) = stata_bridge::stata::dispatch::run(&mut session, &statements);

    assert_eq!(code, 0);
    assert_eq!(output, "");
    assert_eq!(
        session.submitted_texts(),
        vec!["cd `\"/home/user/notebooks\"'", "set more off"]
    );
}
