//! Explore and query compilation operations.

use crate::client::{path_segment, ApiRequest, RequestMethod};
use crate::models::{Explore, ExploreId, ExploreSummary, MetricQuery, ProjectUuid};
use crate::{Error, Result};

use super::projects::project_path;
use super::Operation;

/// List the explores of a project.
pub struct ListExplores;

impl Operation for ListExplores {
    type Params = ProjectUuid;
    type Results = Vec<ExploreSummary>;
    const NAME: &'static str = "ListExplores";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(project: &ProjectUuid) -> Result<String> {
        Ok(format!("{}/explores", project_path(project)?))
    }
}

/// Identifies one explore inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExploreRef {
    /// Project UUID
    pub project_uuid: ProjectUuid,
    /// Explore id
    pub explore_id: ExploreId,
}

impl ExploreRef {
    /// Create a reference.
    pub fn new(project_uuid: impl Into<ProjectUuid>, explore_id: impl Into<ExploreId>) -> Self {
        Self {
            project_uuid: project_uuid.into(),
            explore_id: explore_id.into(),
        }
    }
}

/// Get the full definition of one explore, including every field.
pub struct GetExplore;

impl Operation for GetExplore {
    type Params = ExploreRef;
    type Results = Explore;
    const NAME: &'static str = "GetExplore";
    const METHOD: RequestMethod = RequestMethod::Get;

    fn path(explore: &ExploreRef) -> Result<String> {
        Ok(format!(
            "{}/explores/{}",
            project_path(&explore.project_uuid)?,
            path_segment(explore.explore_id.as_str())?
        ))
    }
}

/// Parameters of [`CompileQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompileQueryParams {
    /// Explore to compile against
    pub explore: ExploreRef,
    /// The metric query
    pub query: MetricQuery,
}

impl CompileQueryParams {
    /// Compile `query` against its own explore in `project_uuid`.
    pub fn new(project_uuid: impl Into<ProjectUuid>, query: MetricQuery) -> Self {
        let explore_id = ExploreId::new(query.explore_name.clone());
        Self {
            explore: ExploreRef::new(project_uuid, explore_id),
            query,
        }
    }
}

/// Compile a metric query to the SQL the warehouse would run.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: lightdash_rs::LightdashClient) -> lightdash_rs::Result<()> {
/// use lightdash_rs::api::{CompileQuery, CompileQueryParams};
/// use lightdash_rs::models::MetricQuery;
///
/// let query = MetricQuery::new("orders")
///     .dimension("orders_status")
///     .metric("orders_total_amount");
/// let params = CompileQueryParams::new("3675b69e-8324-4110-bdca-059031aa8da3", query);
///
/// let sql = client.caller::<CompileQuery>().acall(&params).await?;
/// println!("{sql}");
/// # Ok(())
/// # }
/// ```
pub struct CompileQuery;

impl Operation for CompileQuery {
    type Params = CompileQueryParams;
    type Results = String;
    const NAME: &'static str = "CompileQuery";
    const METHOD: RequestMethod = RequestMethod::Post;

    fn path(params: &CompileQueryParams) -> Result<String> {
        Ok(format!("{}/compileQuery", GetExplore::path(&params.explore)?))
    }

    fn build(request: ApiRequest, params: &CompileQueryParams) -> Result<ApiRequest> {
        if params.query.explore_name.is_empty() {
            return Err(Error::InvalidInput(
                "metric query has no explore name".to_string(),
            ));
        }
        request.json(&params.query)
    }
}
