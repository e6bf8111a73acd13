//! Disclaimer Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="stack centered terms-page">
            <A href="/">"Back"</A>

            <h1>"Disclaimer"</h1>

            <p>
                "By clicking accept, I acknowledge, understand, and accept everything contained in
                this Disclaimer."
            </p>
            <p>
                "Nothing on this website, or in any communication from the team behind this drop
                (the \"Company\"), is legal, financial, investment or business advice. Nothing here
                is a recommendation to buy, sell or hold any NFT. You alone decide whether buying
                an NFT is right for you."
            </p>
            <p>
                "Collectible NFTs are not investments, security tokens or e-money tokens, and they
                are unregulated. They are not a store of value nor a generally accepted medium of
                exchange, and they can be illiquid and volatile."
            </p>
            <p>
                "There is no promise of any financial return. There is no guarantee that you can
                sell your NFT. The Company's NFTs are not investment products, securities or initial
                coin offerings. An NFT bought from the Company is bought for fun."
            </p>
            <p>
                "Mint only if you like the collectible art and want to own it. Do your own research
                and collect responsibly."
            </p>
            <p>
                "The Company makes no guarantees and promises no utility of any kind. You may not
                rely on any statement by any member of the Company other than what is published "
                <strong>"ONLY"</strong>
                " in this Disclaimer."
            </p>

            <A href="/">"Back"</A>
        </div>
    }
}
