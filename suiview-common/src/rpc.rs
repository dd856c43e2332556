//! JSON-RPC wire contract for the owned-objects query
//!
//! The shapes here match what a Sui fullnode actually sends and receives
//! for `suix_getOwnedObjects`; if the client is ever swapped out, these
//! types are the contract to preserve.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SuiNetwork;

/// JSON-RPC method for listing objects owned by an address
pub const GET_OWNED_OBJECTS: &str = "suix_getOwnedObjects";

/// Identity of one owned-objects request
///
/// A resource keyed by this type refetches exactly when the owner or the
/// network changes; an unchanged key never refetches, and a changed key
/// supersedes the previous in-flight result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    pub method: &'static str,
    pub network: SuiNetwork,
    pub owner: String,
}

impl QueryKey {
    pub fn owned_objects(network: SuiNetwork, owner: impl Into<String>) -> Self {
        Self {
            method: GET_OWNED_OBJECTS,
            network,
            owner: owner.into(),
        }
    }
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: serde_json::Value,
}

impl RpcRequest {
    /// Build the owned-objects request for one address
    pub fn owned_objects(id: u64, owner: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: GET_OWNED_OBJECTS,
            params: serde_json::json!([owner]),
        }
    }
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl<T> RpcResponse<T> {
    /// Unwrap the envelope into the result or a typed error
    pub fn into_result(self) -> Result<T, RpcError> {
        if let Some(error) = self.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        self.result
            .ok_or_else(|| RpcError::Decode("response carried neither result nor error".into()))
    }
}

/// One page of objects owned by an address
///
/// Only the first page is ever fetched, but the pagination markers are
/// part of the wire shape and are used to tell the user more exist.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObjectsPage {
    #[serde(default)]
    pub data: Vec<ObjectEntry>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One entry in an owned-objects page
///
/// The node returns either `data` or a per-entry `error`; both the entry
/// payload and its identifier are optional on the wire.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ObjectEntry {
    #[serde(default)]
    pub data: Option<ObjectSummary>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    #[serde(default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub digest: Option<String>,
}

impl ObjectEntry {
    /// Identifier of the entry, if the record carries one
    pub fn object_id(&self) -> Option<&str> {
        self.data.as_ref()?.object_id.as_deref()
    }
}

/// Failure modes of the owned-objects query
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RpcError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("fullnode returned HTTP {0}")]
    Status(u16),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_objects_request_wire_shape() {
        let request = RpcRequest::owned_objects(7, "0xabc");
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["id"], 7);
        assert_eq!(wire["method"], "suix_getOwnedObjects");
        assert_eq!(wire["params"], serde_json::json!(["0xabc"]));
    }

    #[test]
    fn test_decode_owned_objects_page() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "data": [
                    {"data": {"objectId": "0x1", "version": "3", "digest": "abc"}},
                    {"data": {"objectId": "0x2"}},
                    {"error": {"code": "notExists"}}
                ],
                "nextCursor": "0x2",
                "hasNextPage": true
            }
        }"#;

        let response: RpcResponse<OwnedObjectsPage> = serde_json::from_str(raw).unwrap();
        let page = response.into_result().unwrap();

        assert_eq!(page.data.len(), 3);
        assert_eq!(page.data[0].object_id(), Some("0x1"));
        assert_eq!(page.data[1].object_id(), Some("0x2"));
        assert_eq!(page.data[2].object_id(), None);
        assert!(page.has_next_page);
        assert_eq!(page.next_cursor.as_deref(), Some("0x2"));
    }

    #[test]
    fn test_decode_rpc_error() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "Invalid params"}
        }"#;

        let response: RpcResponse<OwnedObjectsPage> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.into_result(),
            Err(RpcError::Rpc {
                code: -32602,
                message: "Invalid params".to_string()
            })
        );
    }

    #[test]
    fn test_decode_missing_result_and_error() {
        let raw = r#"{"jsonrpc": "2.0", "id": 1}"#;
        let response: RpcResponse<OwnedObjectsPage> = serde_json::from_str(raw).unwrap();
        assert!(matches!(response.into_result(), Err(RpcError::Decode(_))));
    }

    #[test]
    fn test_query_key_identity() {
        let a = QueryKey::owned_objects(SuiNetwork::Devnet, "0xaaa");

        // Unchanged key: no refetch
        assert_eq!(a, QueryKey::owned_objects(SuiNetwork::Devnet, "0xaaa"));

        // A new owner or network supersedes the previous request
        assert_ne!(a, QueryKey::owned_objects(SuiNetwork::Devnet, "0xbbb"));
        assert_ne!(a, QueryKey::owned_objects(SuiNetwork::Mainnet, "0xaaa"));
    }
}
