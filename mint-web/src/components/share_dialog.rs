//! Share-to-Twitter dialog

use leptos::prelude::*;
use lib_core::model::share::tweet_intent_url;
use lib_core::MintView;

use crate::utils::constants::share_options;

/// Open exactly while a token is selected.
#[component]
pub fn ShareDialog(mint: RwSignal<MintView>) -> impl IntoView {
    let close = move |_| mint.update(MintView::close_share);

    let image = move || {
        mint.with(|m| {
            m.selected_token()
                .map(|token| token.image().to_string())
                .unwrap_or_default()
        })
    };

    let tweet_href = move || mint.with(|m| tweet_intent_url(m.share_image_url(), &share_options()));

    view! {
        <Show when=move || mint.with(MintView::share_dialog_open)>
            <div class="dialog-backdrop" on:click=close>
                <div class="dialog card" on:click=|ev| ev.stop_propagation()>
                    <h3 class="centered-text">"Share to Twitter!"</h3>
                    <img
                        src=image
                        width="256"
                        height="256"
                        alt="Twitter Share Image"
                    />
                    <a
                        class=format!("btn btn-primary share-{}", share_options().size.as_str())
                        href=tweet_href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Tweet"
                    </a>
                    <button class="btn btn-secondary" on:click=close>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
