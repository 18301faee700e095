//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト:
//! - DEFAULT_PROMPT: サーバー既定と同じ汎用プロンプト
//! - build_structured_prompt: 構造化JSON抽出用のテンプレート

/// 汎用プロンプト
pub const DEFAULT_PROMPT: &str = "Analysez cette image et extrayez les informations importantes";

/// 構造化抽出で要求するキー（カードに出す7項目 + その他）
pub const STRUCTURED_KEYS: &[&str] = &[
    "type_document",
    "date",
    "montant",
    "devise",
    "emetteur",
    "destinataire",
    "numero_document",
    "autres_informations",
];

/// 構造化抽出プロンプト生成
///
/// 利用者の指示の後ろに、カード表示用のキーを持つJSON形式を指定する
///
/// # Arguments
/// * `instructions` - 利用者が入力した指示（空なら汎用プロンプト）
///
/// # Returns
/// AIに送るプロンプト文字列
pub fn build_structured_prompt(instructions: &str) -> String {
    let instructions = match instructions.trim() {
        "" => DEFAULT_PROMPT,
        text => text,
    };

    format!(
        r#"{instructions}

Veuillez répondre avec un JSON structuré contenant les informations extraites.
Format attendu:
{{
    "type_document": "string",
    "date": "YYYY-MM-DD",
    "montant": "number",
    "devise": "string",
    "emetteur": "string",
    "destinataire": "string",
    "numero_document": "string",
    "autres_informations": {{}}
}}"#
    )
}

/// すでにテンプレートを含んでいるか（二重適用防止）
pub fn is_structured(prompt: &str) -> bool {
    prompt.contains("Format attendu:") && STRUCTURED_KEYS.iter().all(|k| prompt.contains(k))
}
