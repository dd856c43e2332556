//! Wallet connection context and the injected-provider adapter
//!
//! The connection flow itself belongs to the wallet extension; this
//! module only locates the provider it injects on `window`, asks it to
//! connect, and mirrors the approved account into a context signal.

use leptos::*;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use suiview_common::view::short_address;
use suiview_common::Account;

/// Global the wallet extension injects its provider under
const PROVIDER_GLOBAL: &str = "suiWallet";

/// Currently connected account, provided to every descendant view
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub account: RwSignal<Option<Account>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            account: create_rw_signal(None),
        }
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_wallet() -> WalletContext {
    expect_context::<WalletContext>()
}

#[derive(Debug, Clone, Error)]
pub enum WalletError {
    #[error("no wallet extension found")]
    NotInstalled,
    #[error("wallet does not support `{0}`")]
    Unsupported(&'static str),
    #[error("connection rejected: {0}")]
    Rejected(String),
}

/// Adapter over the wallet provider injected on `window`
pub struct BrowserWallet {
    provider: JsValue,
}

impl BrowserWallet {
    /// Look up the injected provider
    pub fn detect() -> Result<Self, WalletError> {
        let window = web_sys::window().ok_or(WalletError::NotInstalled)?;
        let provider = js_sys::Reflect::get(&window, &JsValue::from_str(PROVIDER_GLOBAL))
            .map_err(|_| WalletError::NotInstalled)?;
        if provider.is_undefined() || provider.is_null() {
            return Err(WalletError::NotInstalled);
        }
        Ok(Self { provider })
    }

    /// Ask the provider for a connection and read back the account
    pub async fn connect(&self) -> Result<Account, WalletError> {
        let response = self.invoke("connect").await?;
        extract_address(&response)
            .map(Account::new)
            .ok_or_else(|| WalletError::Rejected("no account in wallet response".into()))
    }

    /// Best-effort disconnect on the provider side
    pub fn disconnect(&self) {
        if let Some(function) = self.method("disconnect") {
            let _ = function.call0(&self.provider);
        }
    }

    fn method(&self, name: &str) -> Option<js_sys::Function> {
        js_sys::Reflect::get(&self.provider, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }

    async fn invoke(&self, name: &'static str) -> Result<JsValue, WalletError> {
        let function = self.method(name).ok_or(WalletError::Unsupported(name))?;
        let value = function
            .call0(&self.provider)
            .map_err(|e| WalletError::Rejected(js_reason(&e)))?;
        match value.dyn_into::<js_sys::Promise>() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .map_err(|e| WalletError::Rejected(js_reason(&e))),
            Err(value) => Ok(value),
        }
    }
}

/// Read the address out of a connect response
///
/// Accepts both a bare `{ address }` and the wallet-standard
/// `{ accounts: [{ address }] }` shape.
fn extract_address(value: &JsValue) -> Option<String> {
    if let Some(address) = string_field(value, "address") {
        return Some(address);
    }
    let accounts = js_sys::Reflect::get(value, &JsValue::from_str("accounts")).ok()?;
    let first = js_sys::Array::from(&accounts).get(0);
    string_field(&first, "address")
}

fn string_field(value: &JsValue, name: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(name))
        .ok()?
        .as_string()
}

fn js_reason(value: &JsValue) -> String {
    string_field(value, "message").unwrap_or_else(|| format!("{:?}", value))
}

#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet = use_wallet();
    let (pending, set_pending) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let connect = move |_| {
        set_pending.set(true);
        spawn_local(async move {
            let connected = match BrowserWallet::detect() {
                Ok(provider) => provider.connect().await,
                Err(e) => Err(e),
            };
            match connected {
                Ok(account) => {
                    wallet.account.set(Some(account));
                    set_error.set(None);
                }
                Err(e) => {
                    logging::log!("Wallet connection failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    let disconnect = move |_| {
        if let Ok(provider) = BrowserWallet::detect() {
            provider.disconnect();
        }
        wallet.account.set(None);
    };

    view! {
        <div class="connect-control">
            {move || match wallet.account.get() {
                Some(account) => view! {
                    <button class="btn btn-secondary" on:click=disconnect>
                        {short_address(&account.address)} " · Disconnect"
                    </button>
                }
                .into_view(),
                None => view! {
                    <button
                        class="btn btn-primary"
                        disabled=move || pending.get()
                        on:click=connect
                    >
                        {move || if pending.get() { "Connecting..." } else { "Connect Wallet" }}
                    </button>
                }
                .into_view(),
            }}
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
        </div>
    }
}
