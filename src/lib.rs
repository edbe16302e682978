pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod handler;
pub mod payload;
pub mod response;

pub use app::App;
pub use config::UploadConfig;
pub use error::UploadError;
pub use handler::{DisplayRegion, FileInput, Notifier, Transport, UploadHandler};
pub use response::{Outcome, ServerResponse};
