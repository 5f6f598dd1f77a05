//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod content_cmd;
mod comment_cmd;
mod contribution_cmd;

pub use content_cmd::*;
pub use comment_cmd::*;
pub use contribution_cmd::*;
