//! # lightdash-rs
//!
//! A typed Rust client for the Lightdash REST API.
//!
//! Every endpoint is an [`api::Operation`]: a marker type that knows its
//! path, its parameters and the shape of its results. One generic
//! [`api::ApiCaller`] runs any operation asynchronously or blocking, checks
//! the response envelope and hands back typed records.
//!
//! ## Features
//!
//! - **Async and blocking**: `acall` on Tokio, `call` from plain threads, one
//!   request path behind both
//! - **Pagination**: lazy [`PaginatedStream`]s and all-or-nothing
//!   `acall_all` / `call_all` drains
//! - **Two error kinds that matter**: transport failures
//!   ([`Error::ApiCall`]) and malformed responses ([`Error::InvalidResponse`])
//! - **Secrets stay secret**: the API token and user e-mail addresses are
//!   held in `secrecy` types and never reach logs or `Debug` output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lightdash_rs::{ClientConfig, LightdashClient};
//! use lightdash_rs::api::{GetProject, ListOrganizationProjects};
//!
//! #[tokio::main]
//! async fn main() -> lightdash_rs::Result<()> {
//!     let client = LightdashClient::new(ClientConfig::new(
//!         "https://app.lightdash.cloud",
//!         "my-personal-access-token",
//!     )?)?;
//!
//!     let projects = client.caller::<ListOrganizationProjects>().acall(&()).await?;
//!     println!("Found {} projects", projects.len());
//!
//!     if let Some(first) = projects.first() {
//!         let project = client.caller::<GetProject>().acall(&first.project_uuid).await?;
//!         println!("dbt version: {:?}", project.dbt_version);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Blocking Example
//!
//! ```rust,no_run
//! use lightdash_rs::LightdashClient;
//! use lightdash_rs::api::ListGroupsParams;
//!
//! fn main() -> lightdash_rs::Result<()> {
//!     let client = LightdashClient::from_token("https://app.lightdash.cloud", "token")?;
//!
//!     let members = client.organization().all_members_blocking(None)?;
//!     let groups = client
//!         .organization()
//!         .all_groups_blocking(ListGroupsParams::default().search("analysts"))?;
//!
//!     println!("{} members, {} groups", members.len(), groups.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{ExploreId, GroupUuid, OrganizationUuid, ProjectUuid, SpaceUuid, UserUuid};
pub use client::{ClientConfig, LightdashClient, Page, PaginatedStream, Pagination};

/// Prelude module for convenient imports.
///
/// ```rust
/// use lightdash_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        ExploreId, GroupUuid, OrganizationUuid, ProjectUuid, SpaceUuid, UserUuid,
        // Records
        Explore, ExploreSummary, Field, Group, GroupDetails, MetricQuery, OrganizationMember,
        OrganizationProject, Project, ProjectMemberAccess, Space,
    };
    pub use crate::api::{
        ApiCaller, CompileQuery, CompileQueryParams, ExploreRef, GetExplore, GetGroup,
        GetGroupParams, GetProject, GetProjectAccessList, ListExplores, ListGroupsInOrganization,
        ListGroupsParams, ListMembersParams, ListOrganizationMembers, ListOrganizationProjects,
        ListSpacesInProject, Operation, PaginatedOperation,
    };
    pub use crate::client::{ClientConfig, LightdashClient, Page, PaginatedStream};
}
