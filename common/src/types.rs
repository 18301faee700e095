//! サーバーとやり取りする型の定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - UploadedPaths: `/upload` が返すサーバー側の保存パス
//! - ProcessRequest: `/process` へ送るJSON
//! - PageResult / AiResult: ページごとのAI抽出結果
//! - ProcessResult: 1ジョブ分の最終結果

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `/upload` でサーバーが割り当てた保存パス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedPaths {
    #[serde(rename = "pdf_path")]
    pub document_path: String,
    #[serde(rename = "excel_path")]
    pub spreadsheet_path: String,
}

/// `/process` リクエストボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub pdf_path: String,
    pub excel_path: String,
    pub prompt: String,
}

impl ProcessRequest {
    pub fn new(paths: &UploadedPaths, prompt: &str) -> Self {
        Self {
            pdf_path: paths.document_path.clone(),
            excel_path: paths.spreadsheet_path.clone(),
            prompt: prompt.to_string(),
        }
    }
}

/// AIが返した内容
///
/// JSONとして解釈できた場合はフィールドのマップ、できなかった場合は生テキスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AiContent {
    Fields(Map<String, Value>),
    Text(String),
    Other(Value),
}

impl AiContent {
    /// フィールド値を表示用文字列で取得（空文字・null は未検出扱い）
    pub fn field(&self, key: &str) -> Option<String> {
        let AiContent::Fields(map) = self else {
            return None;
        };
        let value = map.get(key)?;
        let text = match value {
            Value::Null => return None,
            Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// フィールドマップでない場合の表示テキスト
    pub fn raw_text(&self) -> Option<String> {
        match self {
            AiContent::Fields(_) => None,
            AiContent::Text(s) => Some(s.clone()),
            AiContent::Other(v) => Some(v.to_string()),
        }
    }
}

/// ページ単位のAI解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiResult {
    /// 成否（サーバーが省略した場合は None）
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub content: Option<AiContent>,

    #[serde(default)]
    pub error: Option<String>,
}

impl AiResult {
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }
}

/// 1ページ分の抽出結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    #[serde(rename = "page")]
    pub page_number: u32,
    pub image_path: String,
    pub ai_result: AiResult,
}

/// 1ジョブ分の処理結果（成功時のみ保持される）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    #[serde(rename = "output_excel")]
    pub output_spreadsheet_path: String,
    pub results: Vec<PageResult>,
}
