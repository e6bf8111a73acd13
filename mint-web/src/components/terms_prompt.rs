//! Disclaimer acceptance gate

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::MintView;

#[component]
pub fn TermsPrompt(mint: RwSignal<MintView>) -> impl IntoView {
    let on_change = move |ev| {
        // Unchecking does not revoke acceptance
        if event_target_checked(&ev) {
            mint.update(MintView::accept_terms);
        }
    };

    view! {
        <div class="stack centered terms-prompt">
            <p>
                "Click the check box to confirm that you have read and understand this "
                <A href="/terms">"Disclaimer"</A>
                "."
            </p>
            <label class="checkbox">
                <input type="checkbox" on:change=on_change/>
                " Accept"
            </label>
        </div>
    }
}
