//! Mint Page - drop metadata, claim flow, gallery and share dialog

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::model::{AlertState, Severity};
use lib_core::service::{claim, load_drop, open_drop, prepare_share};
use lib_core::{Config, DropSnapshot, MintFlow, MintView, Result};
use shared::dto::OwnedToken;

use crate::components::{
    AlertSnackbar, ClaimPanel, ConnectWallet, Gallery, ShareDialog, SupplyBar, TermsPrompt,
};
use crate::config::use_config;
use crate::services::drop::SdkProvider;
use crate::services::share::ImageApi;
use crate::state::wallet::use_wallet_context;

async fn fetch_snapshot(config: &Config, owner: Option<String>) -> Result<DropSnapshot> {
    let provider = SdkProvider::new(config.chain_id, owner.clone());
    let contract = open_drop(&provider, config).await?;
    load_drop(&contract, owner.as_deref()).await
}

async fn submit_claim(config: &Config, owner: String, quantity: u32) -> AlertState {
    let provider = SdkProvider::new(config.chain_id, Some(owner));
    match open_drop(&provider, config).await {
        Ok(contract) => claim(&contract, quantity).await,
        Err(err) => {
            log::warn!("Cannot claim without a contract handle: {}", err);
            AlertState::failed(err.user_message())
        }
    }
}

#[component]
pub fn MintPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let config = StoredValue::new(use_config());

    let snapshot = RwSignal::new(None::<DropSnapshot>);
    let mint = RwSignal::new(MintView::new());

    let owner = Memo::new(move |_| wallet.address());
    let flow = Memo::new(move |_| snapshot.with(|s| mint.with(|m| m.flow(s.as_ref()))));

    // Results landing after the page is gone are dropped by `try_*`,
    // results of a superseded load by their ticket
    let reload = move |owner: Option<String>| {
        let Some(ticket) = mint.try_update_untracked(MintView::begin_load) else {
            return;
        };
        let config = config.get_value();
        spawn_local(async move {
            match fetch_snapshot(&config, owner).await {
                Ok(loaded) => {
                    let accepted = mint.try_with_untracked(|m| m.accept_load(ticket, loaded));
                    let Some(Some(loaded)) = accepted else {
                        return;
                    };
                    let limit = loaded.quantity_limit();
                    if snapshot.try_set(Some(loaded)).is_some() {
                        return;
                    }
                    let _ = mint.try_update(|m| m.clamp_quantity(limit));
                }
                Err(err) => log::error!("Failed to load drop: {}", err),
            }
        });
    };

    Effect::new(move |_| reload(owner.get()));

    let on_claim = Callback::new(move |_: ()| {
        let limit = snapshot.with_untracked(|s| s.as_ref().map(DropSnapshot::quantity_limit).unwrap_or(0));
        let signer = owner.get_untracked();
        let Some(quantity) = mint
            .try_update(|m| m.begin_claim(limit, signer.as_deref()))
            .flatten()
        else {
            return;
        };
        let Some(signer) = signer else {
            return;
        };

        let config = config.get_value();
        spawn_local(async move {
            let alert = submit_claim(&config, signer, quantity).await;
            let minted = alert.severity == Severity::Success;
            if mint.try_update(|m| m.finish_claim(alert)).is_none() {
                return;
            }
            // Refresh for whoever is connected now
            if minted {
                if let Some(current) = owner.try_get_untracked() {
                    reload(current);
                }
            }
        });
    });

    let on_select = Callback::new(move |token: OwnedToken| {
        let image_api = config.with_value(|c| c.image_api.clone()).map(ImageApi::new);
        spawn_local(async move {
            match prepare_share(image_api.as_ref(), token).await {
                Ok(selection) => {
                    let _ = mint.try_update(|m| m.select_token(selection));
                }
                Err(err) => log::warn!("Cannot share token: {}", err),
            }
        });
    });

    let owned_tokens = Signal::derive(move || {
        snapshot.with(|s| s.as_ref().map(|s| s.owned_tokens.clone()).unwrap_or_default())
    });
    let cover = move || {
        snapshot.with(|s| s.as_ref().and_then(|s| s.metadata.image.clone()).unwrap_or_default())
    };
    let name = move || snapshot.with(|s| s.as_ref().map(|s| s.metadata.name.clone()).unwrap_or_default());
    let progress = move || snapshot.with(|s| s.as_ref().and_then(DropSnapshot::supply_progress));

    view! {
        <AlertSnackbar mint/>

        <Show when=move || flow.get() != MintFlow::Loading fallback=|| {
            view! {
                <div class="stack centered loading">
                    <div class="spinner"></div>
                </div>
            }
        }>
            <div class="page mint-page">
                <ConnectWallet/>

                <div class="stack centered">
                    <img class="avatar" src=cover alt=move || format!("{} preview image", name())/>
                    <h1 class="drop-title">{name}</h1>

                    {move || match flow.get() {
                        MintFlow::Loading => ().into_any(),
                        MintFlow::TermsPending => view! { <TermsPrompt mint/> }.into_any(),
                        MintFlow::SoldOut => view! { <h3 class="flow-status">"Sold Out"</h3> }.into_any(),
                        MintFlow::NotReady => {
                            view! { <h3 class="flow-status">"Not ready to be minted yet"</h3> }.into_any()
                        }
                        MintFlow::ClaimReady => view! { <ClaimPanel snapshot mint on_claim/> }.into_any(),
                    }}

                    <Show when=move || mint.with(MintView::terms_accepted)>
                        {move || progress().map(|progress| view! { <SupplyBar progress/> })}
                    </Show>

                    <Gallery tokens=owned_tokens on_select/>
                </div>

                <ShareDialog mint/>
            </div>
        </Show>
    }
}
