//! Organization member and group operations.

use std::sync::Arc;

use crate::client::{path_segment, ApiRequest, ClientInner, Page, RequestMethod, DEFAULT_PAGE_SIZE};
use crate::models::{Group, GroupDetails, GroupUuid, OrganizationMember, ProjectUuid};
use crate::Result;

use super::{ApiCaller, Operation, PaginatedOperation};

/// Query parameters for listing organization members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMembersParams {
    /// Page to fetch (1-based); `None` asks for an unpaginated answer
    pub page: Option<u32>,
    /// Members per page, [`DEFAULT_PAGE_SIZE`] when unset
    pub page_size: Option<u32>,
    /// Filter by name or e-mail
    pub search_query: Option<String>,
    /// Only members with access to this project
    pub project_uuid: Option<ProjectUuid>,
    /// Include up to this many groups per member
    pub include_groups: Option<u32>,
}

impl ListMembersParams {
    /// Set the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the search query.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Restrict to one project.
    pub fn project(mut self, project_uuid: impl Into<ProjectUuid>) -> Self {
        self.project_uuid = Some(project_uuid.into());
        self
    }
}

/// List the members of the organization, one page at a time.
pub struct ListOrganizationMembers;

impl Operation for ListOrganizationMembers {
    type Params = ListMembersParams;
    type Results = Page<OrganizationMember>;
    const NAME: &'static str = "ListOrganizationMembers";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(_: &ListMembersParams) -> Result<String> {
        Ok("/api/v1/org/users".to_string())
    }

    fn build(request: ApiRequest, params: &ListMembersParams) -> Result<ApiRequest> {
        Ok(request
            .query_opt("page", params.page)
            .query("pageSize", params.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
            .query_opt("searchQuery", params.search_query.as_deref())
            .query_opt("projectUuid", params.project_uuid.as_ref().map(|p| p.as_str()))
            .query_opt("includeGroups", params.include_groups))
    }
}

impl PaginatedOperation for ListOrganizationMembers {
    type Item = OrganizationMember;

    fn with_page(params: &ListMembersParams, page: u32) -> ListMembersParams {
        ListMembersParams {
            page: Some(page),
            ..params.clone()
        }
    }

    fn into_page(results: Page<OrganizationMember>) -> Page<OrganizationMember> {
        results
    }
}

/// Query parameters for listing groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGroupsParams {
    /// Page to fetch (1-based); `None` asks for an unpaginated answer
    pub page: Option<u32>,
    /// Groups per page, [`DEFAULT_PAGE_SIZE`] when unset
    pub page_size: Option<u32>,
    /// Filter by group name
    pub search_query: Option<String>,
    /// Include up to this many members per group
    pub include_members: Option<u32>,
}

impl ListGroupsParams {
    /// Set the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the search query.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Include up to `count` members per group.
    pub fn include_members(mut self, count: u32) -> Self {
        self.include_members = Some(count);
        self
    }
}

/// List the groups of the organization, one page at a time.
pub struct ListGroupsInOrganization;

impl Operation for ListGroupsInOrganization {
    type Params = ListGroupsParams;
    type Results = Page<Group>;
    const NAME: &'static str = "ListGroupsInOrganization";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(_: &ListGroupsParams) -> Result<String> {
        Ok("/api/v1/org/groups".to_string())
    }

    fn build(request: ApiRequest, params: &ListGroupsParams) -> Result<ApiRequest> {
        Ok(request
            .query_opt("page", params.page)
            .query("pageSize", params.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
            .query_opt("searchQuery", params.search_query.as_deref())
            .query_opt("includeMembers", params.include_members))
    }
}

impl PaginatedOperation for ListGroupsInOrganization {
    type Item = Group;

    fn with_page(params: &ListGroupsParams, page: u32) -> ListGroupsParams {
        ListGroupsParams {
            page: Some(page),
            ..params.clone()
        }
    }

    fn into_page(results: Page<Group>) -> Page<Group> {
        results
    }
}

/// Parameters of [`GetGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetGroupParams {
    /// Group UUID
    pub group_uuid: GroupUuid,
    /// Include up to this many members
    pub include_members: Option<u32>,
    /// Offset into the member list
    pub offset: Option<u32>,
}

impl GetGroupParams {
    /// Fetch the group without member details.
    pub fn new(group_uuid: impl Into<GroupUuid>) -> Self {
        Self {
            group_uuid: group_uuid.into(),
            include_members: None,
            offset: None,
        }
    }

    /// Include up to `count` members, starting at `offset`.
    pub fn with_members(mut self, count: u32, offset: u32) -> Self {
        self.include_members = Some(count);
        self.offset = Some(offset);
        self
    }
}

/// Get one group, optionally with its members.
pub struct GetGroup;

impl Operation for GetGroup {
    type Params = GetGroupParams;
    type Results = GroupDetails;
    const NAME: &'static str = "GetGroup";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(params: &GetGroupParams) -> Result<String> {
        Ok(format!("/api/v1/groups/{}", path_segment(params.group_uuid.as_str())?))
    }

    fn build(request: ApiRequest, params: &GetGroupParams) -> Result<ApiRequest> {
        Ok(request
            .query_opt("includeMembers", params.include_members)
            .query_opt("offset", params.offset))
    }
}

/// Service for whole-listing organization queries.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: lightdash_rs::LightdashClient) -> lightdash_rs::Result<()> {
/// let members = client.organization().all_members(None).await?;
/// for member in members {
///     println!("{} ({:?})", member.full_name(), member.role);
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrganizationService {
    inner: Arc<ClientInner>,
}

impl OrganizationService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn members(&self) -> ApiCaller<ListOrganizationMembers> {
        ApiCaller::new(self.inner.clone())
    }

    fn groups(&self) -> ApiCaller<ListGroupsInOrganization> {
        ApiCaller::new(self.inner.clone())
    }

    /// Every member of the organization.
    ///
    /// # Arguments
    ///
    /// * `page_size` - Members per request, [`DEFAULT_PAGE_SIZE`] when `None`
    pub async fn all_members(&self, page_size: Option<u32>) -> Result<Vec<OrganizationMember>> {
        self.members().acall_all(members_params(page_size)).await
    }

    /// Blocking version of [`all_members`](Self::all_members).
    pub fn all_members_blocking(&self, page_size: Option<u32>) -> Result<Vec<OrganizationMember>> {
        self.members().call_all(members_params(page_size))
    }

    /// Every group of the organization matching `params`.
    ///
    /// `params.page` is ignored; listing always starts at page 1.
    pub async fn all_groups(&self, params: ListGroupsParams) -> Result<Vec<Group>> {
        self.groups().acall_all(params).await
    }

    /// Blocking version of [`all_groups`](Self::all_groups).
    pub fn all_groups_blocking(&self, params: ListGroupsParams) -> Result<Vec<Group>> {
        self.groups().call_all(params)
    }
}

fn members_params(page_size: Option<u32>) -> ListMembersParams {
    ListMembersParams {
        page_size,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::QueryValue;

    fn query_value<'a>(request: &'a ApiRequest, key: &str) -> Option<&'a QueryValue> {
        request
            .query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn test_members_default_page_size() {
        let request = ListOrganizationMembers::request(&ListMembersParams::default()).unwrap();
        assert_eq!(request.path, "/api/v1/org/users");
        assert_eq!(request.query, vec![("pageSize".to_string(), QueryValue::Int(100))]);
    }

    #[test]
    fn test_members_query_keys_are_camel_case() {
        let params = ListOrganizationMembers::with_page(
            &ListMembersParams::default()
                .page_size(25)
                .search("jane")
                .project("p1"),
            3,
        );
        let request = ListOrganizationMembers::request(&params).unwrap();

        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["page", "pageSize", "searchQuery", "projectUuid"]);
        assert_eq!(query_value(&request, "page"), Some(&QueryValue::Int(3)));
        assert_eq!(query_value(&request, "pageSize"), Some(&QueryValue::Int(25)));
        assert_eq!(
            query_value(&request, "searchQuery"),
            Some(&QueryValue::Text("jane".to_string()))
        );
    }

    #[test]
    fn test_groups_request() {
        let params = ListGroupsInOrganization::with_page(
            &ListGroupsParams::default().include_members(5),
            1,
        );
        let request = ListGroupsInOrganization::request(&params).unwrap();
        assert_eq!(request.path, "/api/v1/org/groups");
        assert_eq!(query_value(&request, "includeMembers"), Some(&QueryValue::Int(5)));
        assert_eq!(query_value(&request, "pageSize"), Some(&QueryValue::Int(100)));
    }

    #[test]
    fn test_with_page_keeps_filters() {
        let base = ListGroupsParams::default().search("data").page_size(10);
        let paged = ListGroupsInOrganization::with_page(&base, 4);
        assert_eq!(paged.page, Some(4));
        assert_eq!(paged.page_size, Some(10));
        assert_eq!(paged.search_query.as_deref(), Some("data"));
    }

    #[test]
    fn test_get_group_request() {
        let request =
            GetGroup::request(&GetGroupParams::new("g1").with_members(10, 20)).unwrap();
        assert_eq!(request.path, "/api/v1/groups/g1");
        assert_eq!(query_value(&request, "includeMembers"), Some(&QueryValue::Int(10)));
        assert_eq!(query_value(&request, "offset"), Some(&QueryValue::Int(20)));

        let bare = GetGroup::request(&GetGroupParams::new("g1")).unwrap();
        assert!(bare.query.is_empty());

        let escaped = GetGroup::request(&GetGroupParams::new("g1#members")).unwrap();
        assert_eq!(escaped.path, "/api/v1/groups/g1%23members");
    }
}
