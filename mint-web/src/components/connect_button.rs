//! Wallet connect button

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::service::WalletConnector;
use shared::utils::truncate_address;

use crate::config::use_config;
use crate::services::wallet::{has_injected_wallet, InjectedWallet, WalletState};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectWallet() -> impl IntoView {
    let wallet = use_wallet_context();
    let chain_id = use_config().chain_id;

    // Pick up an account the wallet already shares with this origin
    if !wallet.wallet.with_untracked(WalletState::is_connected) {
        if let Some(address) = InjectedWallet.address() {
            log::info!("Wallet already connected: {}", address);
            wallet.set_connected(address, chain_id);
        }
    }

    let connect = move |_| {
        if !has_injected_wallet() {
            wallet.set_error("No wallet found. Install a browser wallet such as MetaMask.".to_string());
            return;
        }

        wallet.set_connecting();
        spawn_local(async move {
            match InjectedWallet.connect(chain_id).await {
                Ok(address) => wallet.set_connected(address, chain_id),
                Err(err) => {
                    log::warn!("Wallet connection failed: {}", err);
                    wallet.set_error(err.user_message());
                }
            }
        });
    };

    view! {
        <div class="connect-wallet">
            {move || match wallet.wallet.get() {
                WalletState::Connected { address, .. } => {
                    view! {
                        <div class="wallet-connected">
                            <span class="wallet-address" title=address.clone()>
                                {truncate_address(&address)}
                            </span>
                            <button class="btn btn-secondary" on:click=move |_| wallet.disconnect()>
                                "Disconnect"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                WalletState::Connecting => {
                    view! {
                        <button class="btn" disabled=true>
                            "Connecting..."
                        </button>
                    }
                        .into_any()
                }
                state => {
                    let error = match state {
                        WalletState::Error(message) => Some(message),
                        _ => None,
                    };
                    view! {
                        <div class="wallet-disconnected">
                            <button class="btn btn-primary" on:click=connect>
                                "Connect Wallet"
                            </button>
                            {error.map(|message| view! { <p class="error-text">{message}</p> })}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
