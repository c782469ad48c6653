//! Inference services behind the Alusive Africa ML API: grant-category prediction, FAQ chat,
//! and signed-document validation with e-mail notification.

pub mod chat;
pub mod config;
pub mod documents;
pub mod error;
pub mod grants;
pub mod notify;
pub mod telemetry;
