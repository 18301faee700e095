//! ファイル選択の検証
//!
//! 拡張子（大文字小文字を区別しない）とMIMEタイプだけで判定する。
//! 中身の検査は行わない。

use std::fmt;

/// 拡張子不正時のメッセージ
pub const UNSUPPORTED_FILE_MESSAGE: &str =
    "Type de fichier non supporté. Veuillez sélectionner un fichier valide.";

/// 選択されたファイルの最低限の情報
///
/// ブラウザの `web_sys::File` とCLIのローカルファイルの両方が実装する
pub trait FileHandle: Clone {
    fn name(&self) -> String;

    /// MIMEタイプ（不明な場合は空文字）
    fn mime_type(&self) -> String {
        String::new()
    }
}

/// ファイル枠
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSlot {
    /// PDF
    Document,
    /// Excel
    Spreadsheet,
}

impl FileSlot {
    /// 受け付ける拡張子（小文字、ドット付き）
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            FileSlot::Document => &[".pdf"],
            FileSlot::Spreadsheet => &[".xlsx", ".xls"],
        }
    }

    /// `<input accept=...>` 用の文字列
    pub fn accept_attribute(&self) -> &'static str {
        match self {
            FileSlot::Document => ".pdf",
            FileSlot::Spreadsheet => ".xlsx,.xls",
        }
    }

    /// multipartのフィールド名
    pub fn form_field(&self) -> &'static str {
        match self {
            FileSlot::Document => "pdf_file",
            FileSlot::Spreadsheet => "excel_file",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileSlot::Document => "Fichier PDF",
            FileSlot::Spreadsheet => "Fichier Excel",
        }
    }

    /// ファイル名が受け付け拡張子で終わるか
    pub fn accepts_name(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.accepted_extensions()
            .iter()
            .any(|ext| lower.ends_with(ext))
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ドロップされたファイルの振り分け先を判定
///
/// PDF判定を優先し、どちらにも該当しなければ None
pub fn classify_dropped(file_name: &str, mime_type: &str) -> Option<FileSlot> {
    let mime = mime_type.to_lowercase();
    if mime == "application/pdf" || FileSlot::Document.accepts_name(file_name) {
        return Some(FileSlot::Document);
    }
    if mime.contains("spreadsheet")
        || mime.contains("ms-excel")
        || FileSlot::Spreadsheet.accepts_name(file_name)
    {
        return Some(FileSlot::Spreadsheet);
    }
    None
}

/// ピッカーで選ばれたファイルを検証
pub fn validate_choice(slot: FileSlot, file_name: &str) -> Result<(), String> {
    if slot.accepts_name(file_name) {
        Ok(())
    } else {
        Err(UNSUPPORTED_FILE_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_name_case_insensitive() {
        assert!(FileSlot::Document.accepts_name("invoice.pdf"));
        assert!(FileSlot::Document.accepts_name("invoice.PDF"));
        assert!(FileSlot::Document.accepts_name("Scan.Pdf"));
        assert!(FileSlot::Spreadsheet.accepts_name("suivi.xlsx"));
        assert!(FileSlot::Spreadsheet.accepts_name("SUIVI.XLS"));
        assert!(!FileSlot::Document.accepts_name("invoice.pdf.txt"));
        assert!(!FileSlot::Spreadsheet.accepts_name("data.csv"));
        assert!(!FileSlot::Spreadsheet.accepts_name("xlsx"));
    }

    #[test]
    fn test_classify_dropped_by_extension() {
        assert_eq!(classify_dropped("invoice.PDF", ""), Some(FileSlot::Document));
        assert_eq!(classify_dropped("data.xlsx", ""), Some(FileSlot::Spreadsheet));
        assert_eq!(classify_dropped("old.XLS", ""), Some(FileSlot::Spreadsheet));
        assert_eq!(classify_dropped("data.csv", "text/csv"), None);
        assert_eq!(classify_dropped("photo.jpg", "image/jpeg"), None);
    }

    #[test]
    fn test_classify_dropped_by_mime() {
        assert_eq!(
            classify_dropped("sans-extension", "application/pdf"),
            Some(FileSlot::Document)
        );
        assert_eq!(
            classify_dropped(
                "export",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            Some(FileSlot::Spreadsheet)
        );
        assert_eq!(
            classify_dropped("legacy", "application/vnd.ms-excel"),
            Some(FileSlot::Spreadsheet)
        );
    }

    #[test]
    fn test_validate_choice() {
        assert!(validate_choice(FileSlot::Document, "a.PDF").is_ok());
        let err = validate_choice(FileSlot::Document, "a.xlsx").unwrap_err();
        assert_eq!(err, UNSUPPORTED_FILE_MESSAGE);
        assert!(validate_choice(FileSlot::Spreadsheet, "a.pdf").is_err());
    }

    #[test]
    fn test_slot_wire_names() {
        assert_eq!(FileSlot::Document.form_field(), "pdf_file");
        assert_eq!(FileSlot::Spreadsheet.form_field(), "excel_file");
        assert_eq!(FileSlot::Spreadsheet.accept_attribute(), ".xlsx,.xls");
    }
}
