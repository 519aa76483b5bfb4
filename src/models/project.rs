//! Project, access list and space models.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::primitives::{OrganizationUuid, ProjectUuid, SpaceUuid, UserUuid};
use super::secret;

/// Kind of project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    /// Regular project
    #[default]
    Default,
    /// Preview project created from a branch
    Preview,
    /// Unknown project type
    #[serde(other)]
    Unknown,
}

/// A project as listed in the organization's project list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationProject {
    /// Project UUID
    pub project_uuid: ProjectUuid,
    /// Project name
    pub name: String,
    /// Project type
    #[serde(rename = "type", default)]
    pub project_type: ProjectType,
    /// Owning organization
    #[serde(default)]
    pub organization_uuid: Option<OrganizationUuid>,
    /// Warehouse kind, e.g. `bigquery`
    #[serde(default)]
    pub warehouse_type: Option<String>,
    /// Upstream project of a preview
    #[serde(default)]
    pub upstream_project_uuid: Option<ProjectUuid>,
    /// User who created the project
    #[serde(default)]
    pub created_by_user_uuid: Option<UserUuid>,
}

/// Full project details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project UUID
    pub project_uuid: ProjectUuid,
    /// Owning organization
    pub organization_uuid: OrganizationUuid,
    /// Project name
    pub name: String,
    /// Project type
    #[serde(rename = "type", default)]
    pub project_type: ProjectType,
    /// User who created the project
    #[serde(default)]
    pub created_by_user_uuid: Option<UserUuid>,
    /// Timezone used by scheduled deliveries
    #[serde(default)]
    pub scheduler_timezone: Option<String>,
    /// dbt version, e.g. `v1.7`
    #[serde(default)]
    pub dbt_version: Option<String>,
    /// Upstream project of a preview
    #[serde(default)]
    pub upstream_project_uuid: Option<ProjectUuid>,
    /// Pinned list shown on the home page
    #[serde(default)]
    pub pinned_list_uuid: Option<String>,
}

/// A user's access to a project.
///
/// The e-mail address is held as a secret and redacted from `Debug` output.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberAccess {
    /// User UUID
    pub user_uuid: UserUuid,
    /// Project UUID
    pub project_uuid: ProjectUuid,
    /// Project role, e.g. `viewer`, `editor`, `admin`
    pub role: String,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// E-mail address
    #[serde(deserialize_with = "secret::deserialize")]
    pub email: SecretString,
}

/// A space (folder of charts and dashboards) inside a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    /// Space UUID
    pub uuid: SpaceUuid,
    /// Space name
    pub name: String,
    /// Owning project
    pub project_uuid: ProjectUuid,
    /// Owning organization
    pub organization_uuid: OrganizationUuid,
    /// Whether only invited users can see the space
    pub is_private: bool,
    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,
    /// Pinned list the space belongs to
    #[serde(default)]
    pub pinned_list_uuid: Option<String>,
    /// Position in the pinned list
    #[serde(default)]
    pub pinned_list_order: Option<i64>,
    /// Number of dashboards
    #[serde(default)]
    pub dashboard_count: Option<u64>,
    /// Number of charts
    #[serde(default)]
    pub chart_count: Option<u64>,
    /// UUIDs of users with explicit access
    #[serde(default)]
    pub access: Vec<String>,
    /// The requesting user's access to this space
    #[serde(default)]
    pub user_access: Option<SpaceUserAccess>,
}

/// A user's access to a space.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceUserAccess {
    /// User UUID
    #[serde(default)]
    pub user_uuid: Option<UserUuid>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// E-mail address
    #[serde(default, deserialize_with = "secret::deserialize_opt")]
    pub email: Option<SecretString>,
    /// Effective role in the space
    pub role: String,
    /// Whether access was granted directly rather than inherited
    #[serde(default)]
    pub has_direct_access: Option<bool>,
    /// Role inherited from the organization or project
    #[serde(default)]
    pub inherited_role: Option<String>,
    /// Where the inherited role comes from
    #[serde(default)]
    pub inherited_from: Option<String>,
    /// Role on the project
    #[serde(default)]
    pub project_role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_deserialize_organization_project() {
        let json = r#"{
            "projectUuid": "p1",
            "name": "P1",
            "type": "DEFAULT",
            "organizationUuid": "o1"
        }"#;

        let project: OrganizationProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_uuid, "p1");
        assert_eq!(project.project_type, ProjectType::Default);
        assert_eq!(project.organization_uuid.unwrap(), "o1");
        assert!(project.warehouse_type.is_none());
    }

    #[test]
    fn test_unknown_project_type() {
        let json = r#"{"projectUuid": "p1", "name": "P1", "type": "SOMETHING_NEW"}"#;
        let project: OrganizationProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_type, ProjectType::Unknown);
    }

    #[test]
    fn test_project_requires_organization() {
        let json = r#"{"projectUuid": "p1", "name": "P1"}"#;
        assert!(serde_json::from_str::<Project>(json).is_err());
    }

    #[test]
    fn test_access_email_is_redacted() {
        let json = r#"{
            "userUuid": "u1",
            "projectUuid": "p1",
            "role": "viewer",
            "email": "jane@example.com"
        }"#;

        let access: ProjectMemberAccess = serde_json::from_str(json).unwrap();
        assert_eq!(access.email.expose_secret(), "jane@example.com");
        assert!(!format!("{:?}", access).contains("jane@example.com"));
    }

    #[test]
    fn test_deserialize_space() {
        let json = r#"{
            "uuid": "s1",
            "name": "Shared",
            "projectUuid": "p1",
            "organizationUuid": "o1",
            "isPrivate": false,
            "slug": "shared",
            "pinnedListUuid": null,
            "dashboardCount": 2,
            "chartCount": 7,
            "access": [],
            "userAccess": {"role": "admin", "email": "a@b.c", "hasDirectAccess": true}
        }"#;

        let space: Space = serde_json::from_str(json).unwrap();
        assert_eq!(space.chart_count, Some(7));
        let access = space.user_access.unwrap();
        assert_eq!(access.role, "admin");
        assert!(access.email.is_some());
    }
}
