//! 解析結果のファイル出力

use pdf_ai_common::ProcessResult;
use std::path::Path;

use crate::error::Result;

/// サーバーから受け取った形（`output_excel`, `results[].page`）のままJSONで保存
pub fn write_results_json(result: &ProcessResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(result)?;
    std::fs::write(path, content)?;
    Ok(())
}
