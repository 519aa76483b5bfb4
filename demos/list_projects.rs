//! List projects example.
//!
//! This example lists every project of the organization, then the spaces
//! and explores of each one.
//!
//! Run with: cargo run --example list_projects

use lightdash_rs::api::{ListExplores, ListOrganizationProjects, ListSpacesInProject};
use lightdash_rs::LightdashClient;

#[tokio::main]
async fn main() -> lightdash_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get the instance and token from environment variables
    let url = std::env::var("LIGHTDASH_URL").expect("LIGHTDASH_URL environment variable required");
    let token =
        std::env::var("LIGHTDASH_TOKEN").expect("LIGHTDASH_TOKEN environment variable required");

    let client = LightdashClient::from_token(url, token)?;

    let projects = client.caller::<ListOrganizationProjects>().acall(&()).await?;
    println!("Found {} project(s):", projects.len());

    for project in &projects {
        println!("  - {} ({:?}) {}", project.name, project.project_type, project.project_uuid);

        let spaces = client
            .caller::<ListSpacesInProject>()
            .acall(&project.project_uuid)
            .await?;
        for space in &spaces {
            println!(
                "      space {} ({} charts, {} dashboards)",
                space.name,
                space.chart_count.unwrap_or(0),
                space.dashboard_count.unwrap_or(0)
            );
        }

        let explores = client
            .caller::<ListExplores>()
            .acall(&project.project_uuid)
            .await?;
        for explore in &explores {
            println!(
                "      explore {} {}",
                explore.name,
                explore.label.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}
