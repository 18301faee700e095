//! 解析結果カード一覧コンポーネント

use leptos::prelude::*;
use pdf_ai_common::{ExtractedField, FieldRow, ResultCard};

use crate::view::RESULTS_CONTAINER_ID;

/// 左列に出すフィールド（残りは右列）
const LEFT_COLUMN: [ExtractedField; 4] = [
    ExtractedField::DocumentType,
    ExtractedField::Date,
    ExtractedField::Amount,
    ExtractedField::Currency,
];

#[component]
pub fn ResultList(cards: ReadSignal<Vec<ResultCard>>, visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div
            id=RESULTS_CONTAINER_ID
            class="results-container"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <h3 class="fw-bold mb-3">"Résultats"</h3>
            <div id="resultsList">
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| view! { <ResultCardView card=card /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn field_line(row: FieldRow) -> impl IntoView {
    view! {
        <p class:text-muted=!row.detected>
            <strong>{row.field.label()}":"</strong>
            " "
            {row.value}
        </p>
    }
}

#[component]
fn ResultCardView(card: ResultCard) -> impl IntoView {
    let title = card.title();
    let (left, right): (Vec<FieldRow>, Vec<FieldRow>) = card
        .rows
        .into_iter()
        .partition(|row| LEFT_COLUMN.contains(&row.field));

    let missing = if card.missing_required.is_empty() {
        None
    } else {
        let labels = card
            .missing_required
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ");
        Some(view! {
            <p class="text-warning small">"Champs requis manquants : "{labels}</p>
        })
    };

    view! {
        <div class="result-card">
            <div class="row">
                <div class="col-md-3">
                    <h5 class="fw-bold">{title.clone()}</h5>
                    <img src=card.image_url class="image-preview" alt=title />
                </div>
                <div class="col-md-9">
                    <div class="d-flex justify-content-between align-items-start mb-3">
                        <h6 class="fw-bold">"Résultats de l'analyse"</h6>
                        <span class=format!("status-badge {}", card.badge.css_class())>
                            {card.badge.text()}
                        </span>
                    </div>

                    <div class="row">
                        <div class="col-md-6">
                            {left.into_iter().map(field_line).collect_view()}
                        </div>
                        <div class="col-md-6">
                            {right.into_iter().map(field_line).collect_view()}
                        </div>
                    </div>

                    {missing}

                    {card.raw_text.map(|text| view! {
                        <pre class="raw-content">{text}</pre>
                    })}

                    {card.error.map(|error| view! {
                        <div class="alert alert-danger mt-2">
                            <strong>"Erreur:"</strong>
                            " "
                            {error}
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
