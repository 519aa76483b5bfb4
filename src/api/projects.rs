//! Project operations.

use crate::client::{path_segment, RequestMethod};
use crate::models::{OrganizationProject, Project, ProjectMemberAccess, ProjectUuid, Space};
use crate::Result;

use super::Operation;

/// List all projects of the caller's organization.
///
/// # Example
///
/// ```no_run
/// # fn example(client: lightdash_rs::LightdashClient) -> lightdash_rs::Result<()> {
/// use lightdash_rs::api::ListOrganizationProjects;
///
/// for project in client.caller::<ListOrganizationProjects>().call(&())? {
///     println!("{}", project.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ListOrganizationProjects;

impl Operation for ListOrganizationProjects {
    type Params = ();
    type Results = Vec<OrganizationProject>;
    const NAME: &'static str = "ListOrganizationProjects";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(_: &()) -> Result<String> {
        Ok("/api/v1/org/projects".to_string())
    }
}

/// Get one project.
pub struct GetProject;

impl Operation for GetProject {
    type Params = ProjectUuid;
    type Results = Project;
    const NAME: &'static str = "GetProject";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(project: &ProjectUuid) -> Result<String> {
        project_path(project)
    }
}

/// List the users with access to a project and their roles.
pub struct GetProjectAccessList;

impl Operation for GetProjectAccessList {
    type Params = ProjectUuid;
    type Results = Vec<ProjectMemberAccess>;
    const NAME: &'static str = "GetProjectAccessList";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(project: &ProjectUuid) -> Result<String> {
        Ok(format!("{}/access", project_path(project)?))
    }
}

/// List the spaces of a project visible to the caller.
pub struct ListSpacesInProject;

impl Operation for ListSpacesInProject {
    type Params = ProjectUuid;
    type Results = Vec<Space>;
    const NAME: &'static str = "ListSpacesInProject";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(project: &ProjectUuid) -> Result<String> {
        Ok(format!("{}/spaces", project_path(project)?))
    }
}

/// `/api/v1/projects/{projectUuid}` with the UUID escaped.
pub(crate) fn project_path(project: &ProjectUuid) -> Result<String> {
    Ok(format!("/api/v1/projects/{}", path_segment(project.as_str())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths() {
        let project = ProjectUuid::new("p1");
        assert_eq!(
            ListOrganizationProjects::request(&()).unwrap().path,
            "/api/v1/org/projects"
        );
        assert_eq!(GetProject::request(&project).unwrap().path, "/api/v1/projects/p1");
        assert_eq!(
            GetProjectAccessList::request(&project).unwrap().path,
            "/api/v1/projects/p1/access"
        );
        assert_eq!(
            ListSpacesInProject::request(&project).unwrap().path,
            "/api/v1/projects/p1/spaces"
        );
    }

    #[test]
    fn test_project_uuid_is_escaped() {
        let request = GetProject::request(&ProjectUuid::new("a/b")).unwrap();
        assert_eq!(request.path, "/api/v1/projects/a%2Fb");

        let request = GetProjectAccessList::request(&ProjectUuid::new("a?x=1#frag")).unwrap();
        assert_eq!(request.path, "/api/v1/projects/a%3Fx%3D1%23frag/access");
    }

    #[test]
    fn test_dot_segment_is_rejected() {
        let result = ListSpacesInProject::request(&ProjectUuid::new(".."));
        assert!(matches!(result, Err(crate::Error::InvalidInput(_))));
    }

    #[test]
    fn test_project_requests_are_bare_gets() {
        let request = GetProject::request(&ProjectUuid::new("p1")).unwrap();
        assert_eq!(request.method, RequestMethod::Get);
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }
}
