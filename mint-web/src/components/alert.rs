//! Claim feedback snackbar

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::MintView;

use crate::utils::constants::ALERT_AUTO_HIDE_MS;

/// Shows the current alert and hides it after a fixed delay.
#[component]
pub fn AlertSnackbar(mint: RwSignal<MintView>) -> impl IntoView {
    let alert = Memo::new(move |_| mint.with(|m| m.alert().clone()));
    let shown = Memo::new(move |_| mint.with(|m| (m.alert_seq(), m.alert().open)));

    Effect::new(move |_| {
        let (seq, open) = shown.get();
        if !open {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(ALERT_AUTO_HIDE_MS).await;
            // Only closes the alert this timer was started for
            let _ = mint.try_update(|m| m.expire_alert(seq));
        });
    });

    view! {
        <Show when=move || alert.with(|a| a.open)>
            <div
                class=move || format!("snackbar alert alert-{}", alert.with(|a| a.severity.as_str()))
                role="alert"
            >
                <span class="alert-message">{move || alert.with(|a| a.message.clone())}</span>
                <button
                    class="alert-close"
                    aria-label="Close"
                    on:click=move |_| mint.update(MintView::dismiss_alert)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
