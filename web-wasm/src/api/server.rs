//! 解析サーバー連携（fetch）
//!
//! `/upload` は multipart、`/process` は JSON で送信し、
//! ステータスとボディ文字列をそのまま共通パーサーへ渡す

use async_trait::async_trait;
use pdf_ai_common::{Error, FileHandle, FileSlot, HttpReply, ProcessRequest, Result, Transport};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// ブラウザで選択されたファイル
#[derive(Clone)]
pub struct BrowserFile(pub web_sys::File);

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// fetchベースのトランスポート
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

/// JSの例外をエラーメッセージに変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}

/// リクエスト送信（共通処理）
async fn send(request: Request) -> Result<HttpReply> {
    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text.as_string().unwrap_or_default();

    log::debug!("{} -> HTTP {}", request.url(), resp.status());
    Ok(HttpReply::new(resp.status(), body))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    type File = BrowserFile;

    async fn upload(
        &self,
        url: &str,
        document: &BrowserFile,
        spreadsheet: &BrowserFile,
    ) -> Result<HttpReply> {
        let form_data = FormData::new().map_err(js_error)?;
        for (slot, file) in [
            (FileSlot::Document, document),
            (FileSlot::Spreadsheet, spreadsheet),
        ] {
            form_data
                .append_with_blob_and_filename(slot.form_field(), &file.0, &file.0.name())
                .map_err(js_error)?;
        }

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form_data);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        send(request).await
    }

    async fn process(&self, url: &str, request: &ProcessRequest) -> Result<HttpReply> {
        let body = serde_json::to_string(request)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
        send(request).await
    }
}
