//! folio-sync entry point
//!
//! Run with:
//! ```bash
//! PORTFOLIO_API_URL=http://localhost:3001 cargo run -p folio-cli
//! ```
//!
//! Loads the profile, projects and skills through the stores and prints what
//! the portfolio site would render.

use std::sync::Arc;

use anyhow::Context;
use folio_client::ApiClient;
use folio_common::{try_init_tracing_with_config, ClientConfig, TracingConfig};
use folio_core::level_label;
use folio_store::{Portfolio, ToastKind, ToastService};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Sync failed");
        std::process::exit(1);
    }
}

async fn run(config: ClientConfig) -> anyhow::Result<()> {
    info!(env = ?config.app.env, base_url = %config.api.base_url, "Configuration loaded");

    let client = ApiClient::new(config.api).context("building API client")?;
    client
        .health()
        .await
        .with_context(|| format!("API at {} is not healthy", client.base_url()))?;

    let portfolio = Portfolio::new(Arc::new(client), ToastService::new());
    let complete = portfolio.load_all().await;

    print_summary(&portfolio);

    for toast in portfolio.toasts().snapshot() {
        if toast.kind == ToastKind::Error {
            warn!(title = %toast.title, message = ?toast.message, "Load reported an error");
        }
    }

    if complete {
        Ok(())
    } else {
        anyhow::bail!("some collections failed to load")
    }
}

fn print_summary(portfolio: &Portfolio) {
    if let Some(profile) = portfolio.profile.profile() {
        println!("{} - {}", profile.display_name(), profile.title);
        println!("  {}", profile.location);
        for (platform, url) in profile.social_links() {
            println!("  {platform}: {url}");
        }
        println!();
    }

    let projects = portfolio.projects.snapshot().projects;
    let featured = portfolio.projects.featured().current();
    println!("Projects ({}, {} featured)", projects.len(), featured.len());
    for category in portfolio.projects.categories().current() {
        let in_category = portfolio.projects.by_category(category.as_str()).current();
        println!("  {category}");
        for project in in_category {
            let star = if project.featured { "*" } else { " " };
            println!("   {star} {} [{}]", project.title, project.technologies_label());
        }
    }
    println!();

    let groups = portfolio.skills.grouped_by_category().current();
    println!("Skills ({} categories)", groups.len());
    for (category, skills) in groups {
        println!("  {category}");
        for skill in skills {
            println!("    {:<20} {}", skill.name, level_label(skill.level));
        }
    }
}
