mod docs;
mod health;
mod home;
mod transcribe_url;

pub use docs::{docs_handler, openapi_document, openapi_handler};
pub use health::health_handler;
pub use home::home_handler;
pub use transcribe_url::{TranscribeUrlRequest, TranscribeUrlResponse, transcribe_url_handler};
