//! プログレスバーコンポーネント

use leptos::prelude::*;
use pdf_ai_common::ProgressState;

#[component]
pub fn ProgressBar(progress: ReadSignal<ProgressState>) -> impl IntoView {
    view! {
        <div id="progressContainer" class="progress-container">
            <p class="fw-bold">{move || progress.get().status}</p>
            <div class="progress-bar">
                <div
                    id="progressBar"
                    class="progress-fill"
                    style=move || progress.get().width_style()
                />
            </div>
            <p id="progressText" class="progress-text">
                {move || progress.get().label()}
            </p>
        </div>
    }
}
