//! Drop Mint Web App - Leptos Frontend
//!
//! Two routes: the mint page and the disclaimer it links to.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use lib_core::Config;

use crate::config::provide_config;
use crate::pages::{MintPage, TermsPage};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_config(config);
    provide_wallet_context();

    view! {
        <Router>
            <main class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=MintPage/>
                    <Route path=path!("/terms") view=TermsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="stack centered">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Mint"</span>
                </A>
            </div>
        </div>
    }
}
