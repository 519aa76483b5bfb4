//! Organization member and group models.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::primitives::{GroupUuid, OrganizationUuid, UserUuid};
use super::secret;

/// Role of a user in the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationRole {
    /// Member without project access
    Member,
    /// Viewer
    Viewer,
    /// Interactive viewer
    InteractiveViewer,
    /// Editor
    Editor,
    /// Developer
    Developer,
    /// Administrator
    Admin,
    /// Unknown role
    #[serde(other)]
    Unknown,
}

/// A member of the organization.
///
/// The e-mail address is held as a secret and redacted from `Debug` output.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMember {
    /// User UUID
    pub user_uuid: UserUuid,
    /// When the user was created
    pub user_created_at: DateTime<Utc>,
    /// When the user was last updated
    pub user_updated_at: DateTime<Utc>,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Organization UUID
    pub organization_uuid: OrganizationUuid,
    /// Role in the organization
    pub role: OrganizationRole,
    /// Whether the user is active
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the invitation is still pending; `Some(true)` when the
    /// server omits it, `None` only for an explicit `null`
    #[serde(default = "some_true")]
    pub is_pending: Option<bool>,
    /// Whether the invitation has expired; same defaulting as `is_pending`
    #[serde(default = "some_true")]
    pub is_invite_expired: Option<bool>,
    /// E-mail address
    #[serde(deserialize_with = "secret::deserialize")]
    pub email: SecretString,
}

fn default_true() -> bool {
    true
}

fn some_true() -> Option<bool> {
    Some(true)
}

impl OrganizationMember {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A user group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group UUID
    pub uuid: GroupUuid,
    /// Group name
    pub name: String,
    /// Organization UUID
    pub organization_uuid: OrganizationUuid,
    /// When the group was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// User who created the group
    #[serde(default)]
    pub created_by_user_uuid: Option<UserUuid>,
    /// When the group was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// User who last updated the group
    #[serde(default)]
    pub updated_by_user_uuid: Option<UserUuid>,
}

/// A group with its members.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetails {
    /// The group itself
    #[serde(flatten)]
    pub group: Group,
    /// UUIDs of all members
    #[serde(default)]
    pub member_uuids: Vec<UserUuid>,
    /// Member details, present when requested
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// A member of a group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// User UUID
    pub user_uuid: UserUuid,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// E-mail address
    #[serde(default, deserialize_with = "secret::deserialize_opt")]
    pub email: Option<SecretString>,
    /// Role in the group
    #[serde(default)]
    pub role: Option<String>,
    /// Whether the user is active
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_deserialize_member() {
        let json = r#"{
            "userUuid": "u1",
            "userCreatedAt": "2024-01-02T03:04:05.000Z",
            "userUpdatedAt": "2024-01-02T03:04:05.000Z",
            "firstName": "Jane",
            "lastName": "Doe",
            "organizationUuid": "o1",
            "role": "interactive_viewer",
            "isPending": false,
            "email": "jane@example.com"
        }"#;

        let member: OrganizationMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.role, OrganizationRole::InteractiveViewer);
        assert!(member.is_active);
        assert_eq!(member.is_pending, Some(false));
        assert_eq!(member.is_invite_expired, Some(true));
        assert_eq!(member.full_name(), "Jane Doe");
        assert_eq!(member.email.expose_secret(), "jane@example.com");

        let debug = format!("{:?}", member);
        assert!(!debug.contains("jane@example.com"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_invite_flags_default_to_true() {
        let json = r#"{
            "userUuid": "u2",
            "userCreatedAt": "2024-01-02T03:04:05Z",
            "userUpdatedAt": "2024-01-02T03:04:05Z",
            "firstName": "Sam",
            "lastName": "Lee",
            "organizationUuid": "o1",
            "role": "viewer",
            "isInviteExpired": null,
            "email": "sam@example.com"
        }"#;

        let member: OrganizationMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.is_pending, Some(true));
        assert_eq!(member.is_invite_expired, None);
    }

    #[test]
    fn test_unknown_role() {
        let role: OrganizationRole = serde_json::from_str("\"owner\"").unwrap();
        assert_eq!(role, OrganizationRole::Unknown);
    }

    #[test]
    fn test_deserialize_group_details() {
        let json = r#"{
            "uuid": "g1",
            "name": "Analysts",
            "organizationUuid": "o1",
            "createdAt": "2024-05-01T00:00:00Z",
            "memberUuids": ["u1", "u2"],
            "members": [{"userUuid": "u1", "firstName": "A", "lastName": "B", "email": "a@b.c"}]
        }"#;

        let details: GroupDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.group.uuid, "g1");
        assert!(details.group.created_at.is_some());
        assert_eq!(details.member_uuids.len(), 2);
        assert!(details.members[0].email.is_some());
    }

    #[test]
    fn test_group_without_members() {
        let json = r#"{"uuid": "g1", "name": "Analysts", "organizationUuid": "o1"}"#;
        let details: GroupDetails = serde_json::from_str(json).unwrap();
        assert!(details.members.is_empty());
        assert!(details.member_uuids.is_empty());
    }
}
