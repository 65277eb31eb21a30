// Layout core for the chat-template editor: indentation markers and
// tooltip positioning

pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod indentation;
pub mod markers;
pub mod state;
pub mod tooltip;
