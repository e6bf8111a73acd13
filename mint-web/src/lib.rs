//! Drop Mint - Leptos Frontend
//!
//! Browser mint page for an NFT drop. Contract reads and the claim itself go
//! through the contract SDK loaded by `index.html`; this crate renders state
//! and wires clicks to those calls.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Drop mint page starting...");

    // Refuse to render anything without a contract to mint from
    let config = match config::load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            web_sys::console::error_1(&format!("Startup aborted: {}", err).into());
            return;
        }
    };
    log::info!(
        "Minting from {} on {}",
        config.contract_address,
        config.chain_id
    );

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
