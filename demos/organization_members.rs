//! Organization members example.
//!
//! This example uses the blocking API from a plain `main` to list every
//! member and group of the organization, page by page.
//!
//! Run with: cargo run --example organization_members

use lightdash_rs::api::ListGroupsParams;
use lightdash_rs::LightdashClient;

fn main() -> lightdash_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::var("LIGHTDASH_URL").expect("LIGHTDASH_URL environment variable required");
    let token =
        std::env::var("LIGHTDASH_TOKEN").expect("LIGHTDASH_TOKEN environment variable required");

    let client = LightdashClient::from_token(url, token)?;
    let organization = client.organization();

    let members = organization.all_members_blocking(Some(50))?;
    println!("Found {} member(s):", members.len());
    for member in &members {
        // E-mail addresses print as [REDACTED]
        println!("  - {} {:?} {:?}", member.full_name(), member.role, member.email);
    }

    let groups = organization.all_groups_blocking(ListGroupsParams::default())?;
    println!("\nFound {} group(s):", groups.len());
    for group in &groups {
        println!("  - {} ({})", group.name, group.uuid);
    }

    Ok(())
}
