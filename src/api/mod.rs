//! Typed operations for Lightdash endpoints.
//!
//! Each endpoint is a marker type implementing [`Operation`]; run it through
//! [`ApiCaller`], obtained from
//! [`LightdashClient::caller`](crate::LightdashClient::caller).

mod explores;
mod operation;
mod organization;
mod projects;

pub use explores::{CompileQuery, CompileQueryParams, ExploreRef, GetExplore, ListExplores};
pub use operation::{ApiCaller, Operation, PaginatedOperation};
pub use organization::{
    GetGroup, GetGroupParams, ListGroupsInOrganization, ListGroupsParams, ListMembersParams,
    ListOrganizationMembers, OrganizationService,
};
pub use projects::{GetProject, GetProjectAccessList, ListOrganizationProjects, ListSpacesInProject};
