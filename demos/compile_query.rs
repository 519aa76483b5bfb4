//! Compile query example.
//!
//! This example loads an explore, builds a metric query from its first
//! dimension and metric, and prints the SQL Lightdash would run.
//!
//! Run with: cargo run --example compile_query -- <project-uuid> <explore>

use lightdash_rs::api::{CompileQuery, CompileQueryParams, ExploreRef, GetExplore};
use lightdash_rs::models::MetricQuery;
use lightdash_rs::LightdashClient;

#[tokio::main]
async fn main() -> lightdash_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let url = std::env::var("LIGHTDASH_URL").expect("LIGHTDASH_URL environment variable required");
    let token =
        std::env::var("LIGHTDASH_TOKEN").expect("LIGHTDASH_TOKEN environment variable required");

    let mut args = std::env::args().skip(1);
    let project = args.next().expect("usage: compile_query <project-uuid> <explore>");
    let explore_name = args.next().expect("usage: compile_query <project-uuid> <explore>");

    let client = LightdashClient::from_token(url, token)?;

    let explore = client
        .caller::<GetExplore>()
        .acall(&ExploreRef::new(project.as_str(), explore_name.as_str()))
        .await?;

    let mut query = MetricQuery::new(&explore.name).limit(100);
    if let Some(dimension) = explore.dimensions().find(|f| !f.hidden) {
        query = query.dimension(dimension.field_id());
    }
    if let Some(metric) = explore.metrics().find(|f| !f.hidden) {
        query = query.metric(metric.field_id()).sort(metric.field_id(), true);
    }

    println!(
        "Compiling {} dimension(s), {} metric(s) against {}",
        query.dimensions.len(),
        query.metrics.len(),
        explore.name
    );

    let sql = client
        .caller::<CompileQuery>()
        .acall(&CompileQueryParams::new(project.as_str(), query))
        .await?;
    println!("\n{sql}");

    Ok(())
}
