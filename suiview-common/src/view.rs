//! Pure view models for the account and owned-objects views
//!
//! The components in `suiview-ui` are thin wrappers over these
//! functions, which keeps the rendering decisions testable without a
//! browser: each render is a pure function of (account, query state).

use crate::rpc::OwnedObjectsPage;
use crate::Account;

/// Base URL of the external object explorer
pub const EXPLORER_BASE: &str = "https://example-explorer.com";

/// Explorer page for one object
pub fn explorer_object_url(object_id: &str) -> String {
    format!("{}/object/{}", EXPLORER_BASE, object_id)
}

/// State of the owned-objects query
///
/// Loading, failure and data are distinct branches; the view renders
/// each one differently rather than collapsing failures into "still
/// loading".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectsQuery {
    Loading,
    Failed(String),
    Ready(OwnedObjectsPage),
}

impl ObjectsQuery {
    /// List entries to render for this state
    ///
    /// Only `Ready` produces entries; entries lacking an identifier are
    /// dropped rather than rendered as empty links.
    pub fn links(&self) -> Vec<ExplorerLink> {
        match self {
            ObjectsQuery::Ready(page) => object_links(page),
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ObjectsQuery::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// One rendered list entry: a link into the external explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerLink {
    pub object_id: String,
    pub href: String,
}

/// Links for every identified object in a page, in server order
pub fn object_links(page: &OwnedObjectsPage) -> Vec<ExplorerLink> {
    page.data
        .iter()
        .filter_map(|entry| entry.object_id())
        .map(|id| ExplorerLink {
            object_id: id.to_string(),
            href: explorer_object_url(id),
        })
        .collect()
}

/// What the connected-account view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub banner: String,
    pub address: String,
}

/// Render model for the connected-account view
///
/// `None` means render nothing; the view toggles freely as the wallet
/// connects and disconnects.
pub fn account_view(account: Option<&Account>) -> Option<AccountView> {
    account.map(|account| AccountView {
        banner: format!("Connected to {}", account.address),
        address: account.address.clone(),
    })
}

/// Compact form of an address for the connect button label
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{ObjectEntry, ObjectSummary};

    fn entry(object_id: Option<&str>) -> ObjectEntry {
        ObjectEntry {
            data: Some(ObjectSummary {
                object_id: object_id.map(String::from),
                ..Default::default()
            }),
        }
    }

    fn page(ids: &[&str]) -> OwnedObjectsPage {
        OwnedObjectsPage {
            data: ids.iter().map(|id| entry(Some(id))).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_disconnected_renders_nothing() {
        assert_eq!(account_view(None), None);
    }

    #[test]
    fn test_connected_renders_banner_and_address() {
        let account = Account::new("0xa11ce");
        let view = account_view(Some(&account)).unwrap();

        assert_eq!(view.banner, "Connected to 0xa11ce");
        assert_eq!(view.address, "0xa11ce");
    }

    #[test]
    fn test_loading_has_no_entries() {
        assert!(ObjectsQuery::Loading.links().is_empty());
        assert!(ObjectsQuery::Loading.error().is_none());
    }

    #[test]
    fn test_failed_has_no_entries_but_a_reason() {
        let state = ObjectsQuery::Failed("fullnode returned HTTP 503".into());
        assert!(state.links().is_empty());
        assert_eq!(state.error(), Some("fullnode returned HTTP 503"));
    }

    #[test]
    fn test_ready_links_in_server_order() {
        let links = ObjectsQuery::Ready(page(&["id1", "id2"])).links();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].object_id, "id1");
        assert_eq!(links[0].href, "https://example-explorer.com/object/id1");
        assert_eq!(links[1].object_id, "id2");
        assert_eq!(links[1].href, "https://example-explorer.com/object/id2");
    }

    #[test]
    fn test_entries_without_id_are_filtered() {
        let page = OwnedObjectsPage {
            data: vec![
                entry(Some("id1")),
                entry(None),
                ObjectEntry { data: None },
                entry(Some("id2")),
            ],
            ..Default::default()
        };

        let links = object_links(&page);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].object_id, "id1");
        assert_eq!(links[1].object_id, "id2");
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = ObjectsQuery::Ready(page(&["id1", "id2"]));
        assert_eq!(state.links(), state.links());

        let account = Account::new("0xa11ce");
        assert_eq!(account_view(Some(&account)), account_view(Some(&account)));
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address("0xabc"), "0xabc");
        assert_eq!(
            short_address("0x123456789abcdef0123456789abcdef0"),
            "0x1234…def0"
        );
    }
}
