pub mod server;

pub use server::{BrowserFile, FetchTransport};
