//! Injected Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for EIP-1193 wallets (MetaMask, Coinbase Wallet, Rabby)
//! exposed as `window.ethereum`.

use async_trait::async_trait;
use lib_core::config::ChainId;
use lib_core::service::WalletConnector;
use lib_core::{AppError, Result};
use wasm_bindgen::prelude::*;

use super::js_error_message;

// ============================================================================
// WALLET DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasInjectedWallet() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export function selectedAddress() {
    if (!window.ethereum) {
        return null;
    }
    return window.ethereum.selectedAddress || null;
}

export async function requestAccount() {
    if (!window.ethereum) {
        throw new Error('No wallet found. Install a browser wallet such as MetaMask.');
    }
    const accounts = await window.ethereum.request({ method: 'eth_requestAccounts' });
    if (!accounts || accounts.length === 0) {
        throw new Error('The wallet did not share any account');
    }
    return accounts[0];
}

export function onAccountsChanged(callback) {
    if (!window.ethereum || typeof window.ethereum.on !== 'function') {
        return false;
    }
    window.ethereum.on('accountsChanged', (accounts) => {
        callback(accounts && accounts.length > 0 ? accounts[0] : null);
    });
    return true;
}

export async function switchChain(chainIdHex) {
    const current = await window.ethereum.request({ method: 'eth_chainId' });
    if (current && current.toLowerCase() === chainIdHex.toLowerCase()) {
        return;
    }
    await window.ethereum.request({
        method: 'wallet_switchEthereumChain',
        params: [{ chainId: chainIdHex }],
    });
}
")]
extern "C" {
    #[wasm_bindgen(js_name = hasInjectedWallet)]
    pub fn has_injected_wallet() -> bool;

    #[wasm_bindgen(js_name = selectedAddress)]
    fn selected_address() -> Option<String>;

    #[wasm_bindgen(catch, js_name = requestAccount)]
    async fn request_account() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = onAccountsChanged)]
    fn on_accounts_changed(callback: &Closure<dyn FnMut(Option<String>)>) -> bool;

    #[wasm_bindgen(catch, js_name = switchChain)]
    async fn switch_chain(chain_id_hex: &str) -> std::result::Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet connection state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String, chain_id: ChainId },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    /// State after the wallet reports `account` as its active account.
    ///
    /// Only a connected page follows the wallet; a page the visitor
    /// disconnected stays disconnected until they connect again.
    pub fn after_account_change(&self, account: Option<String>) -> Option<WalletState> {
        match (self, account) {
            (WalletState::Connected { address, chain_id }, Some(account)) => {
                if address.eq_ignore_ascii_case(&account) {
                    None
                } else {
                    Some(WalletState::Connected {
                        address: account,
                        chain_id: *chain_id,
                    })
                }
            }
            (WalletState::Connected { .. }, None) => Some(WalletState::Disconnected),
            _ => None,
        }
    }
}

/// The wallet injected into the page by a browser extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedWallet;

#[async_trait(?Send)]
impl WalletConnector for InjectedWallet {
    fn address(&self) -> Option<String> {
        selected_address()
    }

    async fn connect(&self, chain: ChainId) -> Result<String> {
        let account = request_account()
            .await
            .map_err(|e| AppError::InvalidInput(js_error_message(&e)))?;
        let address = account
            .as_string()
            .ok_or_else(|| AppError::Decoding("account is not a string".to_string()))?;

        // The wallet may refuse; reads still work, claims will fail with its message
        if let Err(e) = switch_chain(&chain.to_hex()).await {
            log::warn!("Could not switch wallet to {}: {}", chain, js_error_message(&e));
        }

        log::info!("Wallet connected: {}", address);
        Ok(address)
    }
}

/// Call `handler` with the wallet's first account whenever the visitor
/// switches or disconnects accounts in the wallet. Lives as long as the page.
pub fn watch_accounts(handler: impl FnMut(Option<String>) + 'static) {
    let callback = Closure::<dyn FnMut(Option<String>)>::new(handler);
    if on_accounts_changed(&callback) {
        callback.forget();
    } else {
        log::debug!("Wallet does not emit account changes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "0x9f2c6a1b3e4d5f60718293a4b5c6d7e8f90141aa";
    const SECOND: &str = "0x1111111111111111111111111111111111111111";

    fn connected(address: &str) -> WalletState {
        WalletState::Connected {
            address: address.to_string(),
            chain_id: ChainId::GOERLI,
        }
    }

    #[test]
    fn test_connected_page_follows_account_switch() {
        assert_eq!(
            connected(FIRST).after_account_change(Some(SECOND.to_string())),
            Some(connected(SECOND))
        );
        assert_eq!(
            connected(FIRST).after_account_change(Some(FIRST.to_uppercase())),
            None
        );
    }

    #[test]
    fn test_wallet_locking_disconnects_page() {
        assert_eq!(
            connected(FIRST).after_account_change(None),
            Some(WalletState::Disconnected)
        );
    }

    #[test]
    fn test_disconnected_page_ignores_wallet() {
        assert_eq!(
            WalletState::Disconnected.after_account_change(Some(SECOND.to_string())),
            None
        );
        assert_eq!(WalletState::Connecting.after_account_change(None), None);
        assert_eq!(
            WalletState::Error("rejected".to_string()).after_account_change(Some(FIRST.to_string())),
            None
        );
    }
}
