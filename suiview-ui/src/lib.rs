//! Suiview — a wallet-connected Sui object browser
//!
//! Client-side WASM application: connect a browser wallet, show the
//! connected address, and list the objects it owns on the selected
//! network, each linking to an external explorer.

use leptos::*;
use leptos_meta::*;

mod components;
pub mod rpc;
pub mod wallet;

use components::ConnectedAccount;
use suiview_common::SuiNetwork;
use wallet::{ConnectButton, WalletContext};

/// Currently selected network, provided to every descendant view
#[derive(Clone, Copy)]
pub struct NetworkContext {
    pub network: RwSignal<SuiNetwork>,
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(WalletContext::new());

    let network = create_rw_signal(SuiNetwork::default());
    provide_context(NetworkContext { network });

    view! {
        <Stylesheet id="leptos" href="/pkg/suiview-ui.css"/>
        <Title text="Suiview - Sui Object Browser"/>

        <header class="app-header">
            <div class="brand">
                <h1>"Suiview"</h1>
                <span class="tagline">"Browse objects owned by your wallet"</span>
            </div>
            <div class="header-actions">
                <select
                    class="network-select"
                    on:change=move |ev| {
                        if let Some(selected) = SuiNetwork::from_name(&event_target_value(&ev)) {
                            network.set(selected);
                        }
                    }
                >
                    {SuiNetwork::ALL
                        .iter()
                        .map(|&option| {
                            view! {
                                <option
                                    value=option.name()
                                    prop:selected=move || network.get() == option
                                >
                                    {option.name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <ConnectButton/>
            </div>
        </header>

        <main class="container">
            <ConnectedAccount/>
        </main>
    }
}
