//! 結果カードの表示モデル
//!
//! ページ結果をUI非依存のカードに変換する。
//! Leptos側・CLI側ともこのモデルをそのまま描画する。

use crate::endpoints::Endpoints;
use crate::types::{AiContent, PageResult};

/// 抽出フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractedField {
    DocumentType,
    Date,
    Amount,
    Currency,
    Issuer,
    Recipient,
    DocumentNumber,
}

impl ExtractedField {
    /// カードに表示する順
    pub const ALL: [ExtractedField; 7] = [
        ExtractedField::DocumentType,
        ExtractedField::Date,
        ExtractedField::Amount,
        ExtractedField::Currency,
        ExtractedField::Issuer,
        ExtractedField::Recipient,
        ExtractedField::DocumentNumber,
    ];

    /// 抽出結果として必須とみなすフィールド
    pub const REQUIRED: [ExtractedField; 3] = [
        ExtractedField::DocumentType,
        ExtractedField::Date,
        ExtractedField::Amount,
    ];

    /// AI出力JSONのキー
    pub fn key(&self) -> &'static str {
        match self {
            ExtractedField::DocumentType => "type_document",
            ExtractedField::Date => "date",
            ExtractedField::Amount => "montant",
            ExtractedField::Currency => "devise",
            ExtractedField::Issuer => "emetteur",
            ExtractedField::Recipient => "destinataire",
            ExtractedField::DocumentNumber => "numero_document",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExtractedField::DocumentType => "Type de document",
            ExtractedField::Date => "Date",
            ExtractedField::Amount => "Montant",
            ExtractedField::Currency => "Devise",
            ExtractedField::Issuer => "Émetteur",
            ExtractedField::Recipient => "Destinataire",
            ExtractedField::DocumentNumber => "Numéro document",
        }
    }

    /// 未検出時の表示（ラベルの性に合わせる）
    pub fn fallback(&self) -> &'static str {
        match self {
            ExtractedField::Date | ExtractedField::Currency => "Non détectée",
            _ => "Non détecté",
        }
    }
}

/// ステータスバッジ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    /// 成否不明
    Analyzed,
    Success,
    Error,
}

impl StatusBadge {
    pub fn from_success(success: Option<bool>) -> Self {
        match success {
            Some(true) => StatusBadge::Success,
            Some(false) => StatusBadge::Error,
            None => StatusBadge::Analyzed,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            StatusBadge::Analyzed => "Analysé",
            StatusBadge::Success => "Succès",
            StatusBadge::Error => "Erreur",
        }
    }

    /// CSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadge::Analyzed => "status-info",
            StatusBadge::Success => "status-success",
            StatusBadge::Error => "status-error",
        }
    }
}

/// カードの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub field: ExtractedField,
    pub value: String,
    pub detected: bool,
}

/// 結果カード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub page_number: u32,
    pub image_url: String,
    pub badge: StatusBadge,
    pub rows: Vec<FieldRow>,
    /// AIがJSON以外を返した場合の本文
    pub raw_text: Option<String>,
    /// ページ単位の失敗時のエラーテキスト
    pub error: Option<String>,
    /// 成功ページで欠けている必須フィールド
    pub missing_required: Vec<ExtractedField>,
}

impl ResultCard {
    pub fn from_page(page: &PageResult, endpoints: &Endpoints) -> Self {
        let ai = &page.ai_result;
        let content = ai.content.as_ref();

        let rows: Vec<FieldRow> = ExtractedField::ALL
            .iter()
            .map(|field| {
                let value = content.and_then(|c| c.field(field.key()));
                FieldRow {
                    field: *field,
                    detected: value.is_some(),
                    value: value.unwrap_or_else(|| field.fallback().to_string()),
                }
            })
            .collect();

        let error = if ai.is_failure() {
            Some(ai.error.clone().unwrap_or_default())
        } else {
            None
        };

        let missing_required = if ai.success == Some(true)
            && matches!(content, Some(AiContent::Fields(_)))
        {
            ExtractedField::REQUIRED
                .iter()
                .filter(|f| rows.iter().any(|r| r.field == **f && !r.detected))
                .copied()
                .collect()
        } else {
            Vec::new()
        };

        Self {
            page_number: page.page_number,
            image_url: endpoints.image(&page.image_path),
            badge: StatusBadge::from_success(ai.success),
            rows,
            raw_text: content.and_then(AiContent::raw_text),
            error,
            missing_required,
        }
    }

    pub fn title(&self) -> String {
        format!("Page {}", self.page_number)
    }
}

/// 結果一覧をカード列へ（順序は保持）
pub fn build_cards(pages: &[PageResult], endpoints: &Endpoints) -> Vec<ResultCard> {
    pages
        .iter()
        .map(|page| ResultCard::from_page(page, endpoints))
        .collect()
}
