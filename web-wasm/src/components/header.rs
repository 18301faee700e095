//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Analyse PDF avec IA"</h1>
            <p class="text-muted">"Extraction des informations page par page vers Excel"</p>
        </header>
    }
}
