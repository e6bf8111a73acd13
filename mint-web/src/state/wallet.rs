//! Wallet state management

use leptos::prelude::*;
use lib_core::ChainId;

use crate::services::wallet::{watch_accounts, WalletState};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, chain_id: ChainId) {
        self.wallet.set(WalletState::Connected { address, chain_id });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }

    /// Apply an account change reported by the wallet itself.
    pub fn follow_account(&self, account: Option<String>) {
        let next = self
            .wallet
            .with_untracked(|state| state.after_account_change(account));
        if let Some(next) = next {
            log::info!("Wallet account changed: {:?}", next.address());
            self.wallet.set(next);
        }
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the wallet context and keep it in step with the wallet's
/// `accountsChanged` events.
pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    watch_accounts(move |account| context.follow_account(account));
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
