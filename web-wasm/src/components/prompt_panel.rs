//! プロンプト入力コンポーネント

use leptos::prelude::*;
use pdf_ai_common::prompts::{build_structured_prompt, is_structured};

#[component]
pub fn PromptPanel<FP>(prompt: ReadSignal<String>, on_prompt_changed: FP) -> impl IntoView
where
    FP: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="prompt-panel form-group">
            <label for="promptInput" class="form-label fw-bold">"Prompt d'analyse"</label>
            <textarea
                id="promptInput"
                class="form-control"
                rows="4"
                placeholder="Ex : Extrais le type de document, la date et le montant..."
                prop:value=move || prompt.get()
                on:input={
                    let on_prompt_changed = on_prompt_changed.clone();
                    move |ev| on_prompt_changed(event_target_value(&ev))
                }
            />
            <button
                class="btn btn-tertiary btn-small"
                disabled=move || is_structured(&prompt.get())
                on:click=move |_| {
                    on_prompt_changed(build_structured_prompt(&prompt.get_untracked()))
                }
            >
                "Utiliser le format JSON structuré"
            </button>
        </div>
    }
}
