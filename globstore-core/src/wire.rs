//! Wire types for the remote protocol
//!
//! Shared by the server handlers and the HTTP client so both sides agree on
//! the JSON shapes. Subscripts ride as tagged objects (`{"int":1}` vs
//! `{"str":"1"}`) so the numeric/string distinction survives the round trip.

use crate::node::ChildEntry;
use crate::subscript::Subscript;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Default page size for `children` when the request leaves `limit` unset
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Namespace header clients send with every request; the server logs it for
/// visibility but enforces nothing.
pub const NAMESPACE_HEADER: &str = "x-globstore-namespace";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetRequest {
    pub global: String,
    pub path: Vec<Subscript>,
    pub value: Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetResponse {
    pub set: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetRequest {
    pub global: String,
    pub path: Vec<Subscript>,
}

/// `defined` distinguishes "stores null-ish nothing" from a value; an
/// undefined node is `{"defined":false}` with no value field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetResponse {
    pub defined: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl GetResponse {
    pub fn from_value(value: Option<Value>) -> Self {
        GetResponse { defined: value.is_some(), value }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KillRequest {
    pub global: String,
    pub path: Vec<Subscript>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KillResponse {
    pub killed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NextRequest {
    pub global: String,
    pub prefix: Vec<Subscript>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Subscript>,
}

/// Single cursor step: `{"done":true}` when exhausted, otherwise the entry
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextResponse {
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscript: Option<Subscript>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
}

impl NextResponse {
    pub fn done() -> Self {
        NextResponse { done: true, subscript: None, value: None, has_children: None }
    }

    pub fn entry(entry: ChildEntry) -> Self {
        NextResponse {
            done: false,
            subscript: Some(entry.subscript),
            value: entry.value,
            has_children: Some(entry.has_children),
        }
    }

    /// Back to a cursor entry; `None` when the cursor is exhausted.
    pub fn into_entry(self) -> Option<ChildEntry> {
        if self.done {
            return None;
        }
        Some(ChildEntry {
            subscript: self.subscript?,
            value: self.value,
            has_children: self.has_children.unwrap_or(false),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChildrenRequest {
    pub global: String,
    pub prefix: Vec<Subscript>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Subscript>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub uptime_seconds: u64,
    pub global_count: usize,
    /// Global names in order
    pub globals: Vec<String>,
    pub sets: u64,
    pub gets: u64,
    pub kills: u64,
    pub cursor_reads: u64,
}

/// Error body shared across all endpoints
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
    #[serde(rename = "@type")]
    pub error_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_response_shapes() {
        let done = serde_json::to_string(&NextResponse::done()).unwrap();
        assert_eq!(done, r#"{"done":true}"#);

        let entry = NextResponse::entry(ChildEntry {
            subscript: Subscript::Int(1),
            value: Some(Value::Str("v".into())),
            has_children: false,
        });
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"done":false,"subscript":{"int":1},"value":"v","hasChildren":false}"#
        );
        let back: NextResponse = serde_json::from_str(&json).unwrap();
        let entry = back.into_entry().unwrap();
        assert_eq!(entry.subscript, Subscript::Int(1));
    }

    #[test]
    fn test_get_response_undefined_omits_value() {
        let json = serde_json::to_string(&GetResponse::from_value(None)).unwrap();
        assert_eq!(json, r#"{"defined":false}"#);
    }

    #[test]
    fn test_requests_accept_missing_optionals() {
        let req: NextRequest =
            serde_json::from_str(r#"{"global":"g","prefix":[]}"#).unwrap();
        assert!(req.after.is_none());
        let req: ChildrenRequest =
            serde_json::from_str(r#"{"global":"g","prefix":[{"str":"a"}]}"#).unwrap();
        assert!(req.limit.is_none());
        assert_eq!(req.prefix, vec![Subscript::Str("a".into())]);
    }

    #[test]
    fn test_error_body_type_field() {
        let body = ErrorBody {
            error: "Invalid path: empty".into(),
            status: 400,
            error_type: "err:store/InvalidPath".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""@type":"err:store/InvalidPath""#));
    }
}
