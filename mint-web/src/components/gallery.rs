//! Owned token gallery

use leptos::prelude::*;
use shared::dto::OwnedToken;

use crate::config::use_config;

/// Cards of the visitor's tokens. Clicking a card opens the share dialog,
/// the name links to the marketplace page.
#[component]
pub fn Gallery(
    #[prop(into)] tokens: Signal<Vec<OwnedToken>>,
    on_select: Callback<OwnedToken>,
) -> impl IntoView {
    let config = StoredValue::new(use_config());

    view! {
        <Show when=move || tokens.with(|t| !t.is_empty())>
            <h2 class="section-title">"Your Mints"</h2>
            <p class="muted bold">"Click the image to share your NFT on Twitter!"</p>
        </Show>

        <div class="gallery">
            <For
                each=move || tokens.get()
                key=|token| token.id().to_string()
                children=move |token: OwnedToken| {
                    let href = config.with_value(|c| c.asset_url(token.id()));
                    let image = token.image().to_string();
                    let name = token.name().to_string();
                    view! {
                        <div class="card token-card" on:click=move |_| on_select.run(token.clone())>
                            <img src=image alt=name.clone()/>
                            <div class="card-content">
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    {name}
                                </a>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
