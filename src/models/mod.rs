//! Data models for the Lightdash API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Identifier newtypes like `ProjectUuid`, `GroupUuid`
//! - [`project`] - Projects, access lists and spaces
//! - [`explore`] - Explores, tables and fields
//! - [`query`] - Metric queries sent to the compile endpoint
//! - [`organization`] - Organization members and groups

pub mod primitives;
pub mod project;
pub mod explore;
pub mod query;
pub mod organization;

mod secret;

// Re-export commonly used types
pub use primitives::*;
pub use project::*;
pub use explore::*;
pub use query::*;
pub use organization::*;
