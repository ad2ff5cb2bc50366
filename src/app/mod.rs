//! Application layer - everything that doesn't touch a widget.
//!
//! # Structure
//!
//! - `activity.rs` - controller: mode switch, flow orchestration, save
//! - `customize.rs` - customization (import) flow state machine
//! - `mapping.rs` - custom letter→media mapping and entry normalization
//! - `session.rs` - session metadata persistence
//! - `board.rs`, `media.rs` - host collaborator interfaces
//! - `config.rs`, `lessons.rs` - startup configuration and content paths

pub mod activity;
pub mod board;
pub mod config;
pub mod customize;
pub mod error;
pub mod lessons;
pub mod mapping;
pub mod media;
pub mod messages;
pub mod session;

// Re-exports for convenient external access
pub use activity::ActivityState;
pub use board::{Board, InputMode, Mode};
pub use config::{ActivityConfig, ToolbarStyle};
pub use error::{ActivityError, Result};
pub use lessons::LessonPaths;
pub use mapping::{CustomLetterMap, MediaPair};
pub use media::{AudioPlayer, MediaChooser, MediaKind, MediaSelection};
pub use messages::Message;
pub use session::{FileMetadataStore, MetadataStore};
