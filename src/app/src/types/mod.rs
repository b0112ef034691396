//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - network: scanned networks (catalog)
//! - bridge: secondary interface (bridge discovery)
//! - intent: connection intent and field edits
//! - submission: request tickets and submission state

pub mod bridge;
pub mod intent;
pub mod network;
pub mod submission;

pub use bridge::*;
pub use intent::*;
pub use network::*;
pub use submission::*;
