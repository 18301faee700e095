//! PDF AI Common Library
//!
//! CLIとWeb(WASM)で共有される型とコントローラ

pub mod card;
pub mod config;
pub mod controller;
pub mod endpoints;
pub mod error;
pub mod notice;
pub mod parser;
pub mod progress;
pub mod prompts;
pub mod session;
pub mod types;
pub mod validation;

pub use card::{build_cards, ExtractedField, FieldRow, ResultCard, StatusBadge};
pub use config::ControllerConfig;
pub use controller::{JobReport, Transport, UiEvents, UploadController, View};
pub use endpoints::{last_path_segment, Endpoints};
pub use error::{Error, Result};
pub use notice::{Alert, AlertLevel, AlertStack, Notice};
pub use parser::{parse_process_response, parse_upload_response, HttpReply, ProcessOutcome, UploadOutcome};
pub use progress::ProgressState;
pub use prompts::{build_structured_prompt, DEFAULT_PROMPT};
pub use session::{JobInput, JobPhase, SelectionState, Session};
pub use types::{AiContent, AiResult, PageResult, ProcessRequest, ProcessResult, UploadedPaths};
pub use validation::{classify_dropped, FileHandle, FileSlot};
