//! JSON-RPC client for the Sui fullnode

use std::sync::atomic::{AtomicU64, Ordering};

use suiview_common::rpc::{OwnedObjectsPage, QueryKey, RpcError, RpcRequest, RpcResponse};

static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Fetch the first page of objects owned by the key's address
pub async fn get_owned_objects(key: &QueryKey) -> Result<OwnedObjectsPage, RpcError> {
    let id = REQUEST_ID.fetch_add(1, Ordering::Relaxed);
    let request = RpcRequest::owned_objects(id, &key.owner);
    let body =
        serde_json::to_string(&request).map_err(|e| RpcError::Decode(e.to_string()))?;

    let response = reqwasm::http::Request::post(key.network.fullnode_url())
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| RpcError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(RpcError::Status(response.status()));
    }

    let envelope: RpcResponse<OwnedObjectsPage> = response
        .json()
        .await
        .map_err(|e| RpcError::Decode(e.to_string()))?;

    envelope.into_result()
}
