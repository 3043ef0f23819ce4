//! Wire replies
//!
//! The reply objects the bridge hands back to the notebook front-end.
//! Shapes follow the Jupyter messaging contract: a completeness reply for
//! `is_complete` requests, an execution reply plus an out-of-band stream
//! notification for `execute` requests. Serialization goes through serde;
//! field order matters to nobody but the tests pin it anyway.

use crate::stata::completeness::Verdict;
use serde::Serialize;

/// Fixed indent hint sent with every incomplete verdict. Always four
/// spaces, never computed from nesting depth.
pub const INCOMPLETE_INDENT: &str = "    ";

/// Reply to a completeness request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsCompleteReply {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<&'static str>,
}

impl IsCompleteReply {
    pub fn from_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Complete => IsCompleteReply {
                status: "complete",
                indent: None,
            },
            Verdict::Incomplete => IsCompleteReply {
                status: "incomplete",
                indent: Some(INCOMPLETE_INDENT),
            },
        }
    }
}

/// Status carried by an execution reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Ok,
    Error,
}

/// Reply to an execute request.
///
/// The ok variant carries the (empty) payload and user-expression fields
/// the messaging contract expects; the error variant carries neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecuteReply {
    pub execution_count: u64,
    pub status: ExecutionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_expressions: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ExecuteReply {
    pub fn ok(execution_count: u64) -> Self {
        ExecuteReply {
            execution_count,
            status: ExecutionStatus::Ok,
            payload: Some(Vec::new()),
            user_expressions: Some(serde_json::Map::new()),
        }
    }

    pub fn error(execution_count: u64) -> Self {
        ExecuteReply {
            execution_count,
            status: ExecutionStatus::Error,
            payload: None,
            user_expressions: None,
        }
    }
}

/// Which stream a notification is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamName {
    Stdout,
    Stderr,
}

/// Out-of-band stream notification carrying captured session output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamContent {
    pub name: StreamName,
    pub text: String,
}

impl StreamContent {
    /// Route output by exit code: stderr iff the code was non-zero.
    pub fn for_exit(code: i32, text: String) -> Self {
        StreamContent {
            name: if code == 0 {
                StreamName::Stdout
            } else {
                StreamName::Stderr
            },
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_reply_shape() {
        let json = serde_json::to_string(&IsCompleteReply::from_verdict(Verdict::Complete)).unwrap();
        insta::assert_snapshot!(json, @r#"{"status":"complete"}"#);
    }

    #[test]
    fn test_incomplete_reply_carries_fixed_indent() {
        let json =
            serde_json::to_string(&IsCompleteReply::from_verdict(Verdict::Incomplete)).unwrap();
        insta::assert_snapshot!(json, @r#"{"status":"incomplete","indent":"    "}"#);
    }

    #[test]
    fn test_ok_execute_reply_shape() {
        let json = serde_json::to_string(&ExecuteReply::ok(5)).unwrap();
        insta::assert_snapshot!(
            json,
            @r#"{"execution_count":5,"status":"ok","payload":[],"user_expressions":{}}"#
        );
    }

    #[test]
    fn test_error_execute_reply_shape() {
        let json = serde_json::to_string(&ExecuteReply::error(6)).unwrap();
        insta::assert_snapshot!(json, @r#"{"execution_count":6,"status":"error"}"#);
    }

    #[test]
    fn test_stream_routing_by_exit_code() {
        let ok = StreamContent::for_exit(0, "done\n".to_string());
        assert_eq!(ok.name, StreamName::Stdout);
        let failed = StreamContent::for_exit(198, "invalid syntax\n".to_string());
        assert_eq!(failed.name, StreamName::Stderr);

        let json = serde_json::to_string(&failed).unwrap();
        insta::assert_snapshot!(json, @r#"{"name":"stderr","text":"invalid syntax\n"}"#);
    }
}
