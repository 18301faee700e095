//! 通知バナーコンポーネント

use leptos::prelude::*;
use pdf_ai_common::AlertStack;

#[component]
pub fn Alerts<FD>(alerts: ReadSignal<AlertStack>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(u64) + 'static + Clone + Send,
{
    view! {
        <div class="alerts">
            {move || {
                alerts
                    .get()
                    .alerts()
                    .iter()
                    .map(|alert| {
                        let id = alert.id;
                        let notice = alert.notice.clone();
                        let on_dismiss = on_dismiss.clone();
                        view! {
                            <div class=format!(
                                "alert {} alert-dismissible fade show",
                                notice.level.css_class(),
                            )>
                                {notice.title.map(|title| view! { <strong>{title}": "</strong> })}
                                {notice.message}
                                <button
                                    type="button"
                                    class="btn-close"
                                    on:click=move |_| on_dismiss(id)
                                />
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
