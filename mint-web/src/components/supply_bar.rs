use leptos::prelude::*;
use lib_core::model::SupplyProgress;

#[component]
pub fn SupplyBar(progress: SupplyProgress) -> impl IntoView {
    view! {
        <div class="stack supply">
            <div class="progress">
                <div class="progress-fill" style=format!("width: {:.1}%", progress.percent())></div>
            </div>
            <p class="centered-text">{progress.label()}</p>
        </div>
    }
}
