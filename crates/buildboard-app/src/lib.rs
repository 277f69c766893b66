// Rust guideline compliant 2026-10-18

//! Shared application services for buildboard.
//!
//! This crate holds the dashboard state services (auth session, builds,
//! resources, tab) over two collaborator traits, [`DocumentStore`] and
//! [`AuthProvider`], plus local implementations of both and standardized
//! response envelopes.

pub mod auth;
pub mod builds;
pub mod dashboard;
pub mod error;
pub mod file_store;
pub mod local;
pub mod memory;
pub mod resources;
pub mod response;
pub mod store;
pub mod tab;
pub mod time;

pub use auth::AuthSession;
pub use builds::BuildsState;
pub use dashboard::Dashboard;
pub use error::{AppError, AuthError, ErrorCode, Result};
pub use file_store::DataDir;
pub use local::{Collection, LocalStore};
pub use memory::{MemoryCollection, ScriptedAuth};
pub use resources::ResourcesState;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use store::{AuthProvider, DocumentStore, Listener, ListenerHub, Subscription};
pub use tab::TabState;
pub use time::{system_clock, unix_timestamp, Clock};
