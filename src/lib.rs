//! Async client for the Zadara VPSA and VPSA Object Storage REST management APIs.

pub mod api;
pub mod config;
pub mod error;
pub mod validators;
pub mod version;

// Re-export some of our dependencies for QoL
pub use async_trait;

pub mod prelude {
    pub use crate::api::vpsa::{drives, logs};
    pub use crate::api::vpsaos::accounts;
    pub use crate::api::*;

    pub use crate::config::{ConfigFile, SessionConfig};
    pub use crate::error::*;
    pub use crate::validators::InvalidArgument;
    pub use crate::version::*;
}
