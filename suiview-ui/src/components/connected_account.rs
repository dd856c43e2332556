use leptos::*;

use crate::components::OwnedObjects;
use crate::wallet::use_wallet;
use suiview_common::view::account_view;

/// Address banner plus the owned-objects list, or nothing while
/// disconnected
#[component]
pub fn ConnectedAccount() -> impl IntoView {
    let wallet = use_wallet();

    view! {
        {move || {
            let account = wallet.account.get();
            account_view(account.as_ref()).map(|model| {
                view! {
                    <div class="connected-account">
                        <p class="address">{model.banner}</p>
                        <OwnedObjects address=model.address/>
                    </div>
                }
            })
        }}
    }
}
