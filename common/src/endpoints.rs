//! サーバーエンドポイントのURL生成

/// パスの最後の要素（`/` と `\` のどちらも区切りとみなす）
pub fn last_path_segment(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// エンドポイント群
///
/// `base_url` が空ならページと同一オリジンの相対URLになる
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn upload(&self) -> String {
        self.join("/upload")
    }

    pub fn process(&self) -> String {
        self.join("/process")
    }

    /// 出力Excelのダウンロードurl（サーバーパスのファイル名部分のみ使用）
    pub fn download(&self, output_path: &str) -> String {
        self.join(&format!("/download/{}", last_path_segment(output_path)))
    }

    /// ページ画像のURL
    pub fn image(&self, image_path: &str) -> String {
        self.join(&format!("/images/{}", last_path_segment(image_path)))
    }
}
