//! Quantity selector and mint button

use leptos::prelude::*;
use lib_core::model::drop::mint_label;
use lib_core::{DropSnapshot, MintView};

use crate::utils::constants::PREVIEW_IMAGE;

fn limit_of(snapshot: &Option<DropSnapshot>) -> u32 {
    snapshot.as_ref().map(DropSnapshot::quantity_limit).unwrap_or(0)
}

/// Claim controls, rendered only while the active phase can be claimed.
#[component]
pub fn ClaimPanel(
    snapshot: RwSignal<Option<DropSnapshot>>,
    mint: RwSignal<MintView>,
    on_claim: Callback<()>,
) -> impl IntoView {
    let label = move || {
        let quantity = mint.with(MintView::quantity);
        snapshot.with(|s| {
            mint_label(
                s.as_ref().and_then(|s| s.claim_condition.as_ref()),
                quantity,
            )
        })
    };

    let increment_disabled = move || {
        let limit = snapshot.with(limit_of);
        !mint.with(|m| m.can_increment(limit))
    };

    let increment = move |_| {
        let limit = snapshot.with_untracked(limit_of);
        mint.update(|m| m.increment(limit));
    };

    view! {
        <div class="stack centered claim-panel">
            <img class="preview" src=PREVIEW_IMAGE alt="Preview GIF" width="345" height="345"/>

            <div class="button-group">
                <button
                    class="btn"
                    disabled=move || !mint.with(MintView::can_decrement)
                    on:click=move |_| mint.update(MintView::decrement)
                >
                    "-"
                </button>
                <span class="quantity">{move || mint.with(MintView::quantity)}</span>
                <button class="btn" disabled=increment_disabled on:click=increment>
                    "+"
                </button>
            </div>

            <button
                class="btn btn-primary mint-button"
                disabled=move || mint.with(MintView::is_claiming)
                on:click=move |_| on_claim.run(())
            >
                {move || {
                    if mint.with(MintView::is_claiming) {
                        "Minting...".to_string()
                    } else {
                        label()
                    }
                }}
            </button>
        </div>
    }
}
