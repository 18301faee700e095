//! pdf-ai-rust: PDF + Excel AI解析サーバーのCLIクライアント
//!
//! ブラウザ版（web-wasm）と同じ `UploadController` を端末上で動かす。

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod terminal;
pub mod transport;
