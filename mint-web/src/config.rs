//! Build-time configuration
//!
//! Values are baked in by `trunk build` from the environment of the build.

use leptos::prelude::*;
use lib_core::config::{Config, ENV_CHAIN_ID, ENV_CONTRACT_ADDRESS, ENV_IMAGE_API};
use lib_core::Result;

/// Lookup over the variables captured at compile time.
pub fn build_env(name: &'static str) -> Option<String> {
    let value = match name {
        ENV_CONTRACT_ADDRESS => option_env!("MINT_CONTRACT_ADDRESS"),
        ENV_CHAIN_ID => option_env!("MINT_CHAIN_ID"),
        ENV_IMAGE_API => option_env!("MINT_IMAGE_API"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load_config() -> Result<Config> {
    Config::from_lookup(build_env)
}

pub fn provide_config(config: Config) {
    provide_context(config);
}

pub fn use_config() -> Config {
    expect_context::<Config>()
}
