use leptos::*;

use crate::rpc;
use crate::NetworkContext;
use suiview_common::rpc::QueryKey;
use suiview_common::view::{object_links, ObjectsQuery};

/// Objects owned by an address, as links into the external explorer
///
/// The fetch is keyed by (method, network, owner): changing the address
/// or the network issues a new request and discards the stale result.
#[component]
pub fn OwnedObjects(address: String) -> impl IntoView {
    let network = expect_context::<NetworkContext>().network;

    let objects = create_local_resource(
        move || QueryKey::owned_objects(network.get(), address.clone()),
        |key| async move {
            match rpc::get_owned_objects(&key).await {
                Ok(page) => ObjectsQuery::Ready(page),
                Err(e) => {
                    logging::log!("Owned-objects query failed: {}", e);
                    ObjectsQuery::Failed(e.to_string())
                }
            }
        },
    );

    view! {
        {move || {
            let state = objects.get().unwrap_or(ObjectsQuery::Loading);
            match state {
                ObjectsQuery::Loading => {
                    view! { <p class="loading">"Loading owned objects..."</p> }.into_view()
                }
                ObjectsQuery::Failed(reason) => {
                    view! { <p class="error">"Failed to load owned objects: " {reason}</p> }
                        .into_view()
                }
                ObjectsQuery::Ready(page) => {
                    let links = object_links(&page);
                    view! {
                        <ul class="object-list">
                            {links
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a href=link.href>{link.object_id}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            {page.has_next_page
                                .then(|| {
                                    view! {
                                        <li class="more">"More objects exist on later pages"</li>
                                    }
                                })}
                        </ul>
                    }
                    .into_view()
                }
            }
        }}
    }
}
