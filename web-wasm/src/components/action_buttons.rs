//! 送信・ダウンロードボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ActionButtons<FS, FD>(
    busy: ReadSignal<bool>,
    has_artifact: Signal<bool>,
    on_submit: FS,
    on_download: FD,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send,
    FD: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="action-buttons">
            <button
                id="uploadBtn"
                class="btn btn-primary"
                disabled=move || busy.get()
                on:click=move |_| on_submit(())
            >
                {move || {
                    if busy.get() {
                        view! {
                            <span class="loading-spinner me-2"></span>
                            "Traitement en cours..."
                        }
                            .into_any()
                    } else {
                        view! {
                            <i class="fas fa-upload me-2"></i>
                            "Traiter les fichiers"
                        }
                            .into_any()
                    }
                }}
            </button>

            <button
                class="btn btn-secondary"
                class:btn-success=move || has_artifact.get()
                on:click=move |_| on_download(())
            >
                "Télécharger le fichier Excel"
            </button>
        </div>
    }
}
