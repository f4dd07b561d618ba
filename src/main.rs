//! problemset - stored problem checker
//!
//! Re-validates problems already in the database and prints a JSON report of
//! the invalid ones. With no arguments every problem is checked; otherwise
//! only the named ones.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use problemset::{
    FieldErrors, Problem,
    config::CONFIG,
    db::{self, create_pool},
    services::ProblemService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.logging.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Connecting to database...");
    let pool = create_pool(&CONFIG.database).await?;

    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;

    let names: Vec<String> = std::env::args().skip(1).collect();
    let invalid: Vec<(Problem, FieldErrors)> = if names.is_empty() {
        ProblemService::revalidate_all(&pool).await?
    } else {
        let mut invalid = Vec::new();
        for name in &names {
            let (problem, errors) = ProblemService::revalidate(&pool, name).await?;
            if !errors.is_empty() {
                invalid.push((problem, errors));
            }
        }
        invalid
    };

    let report: Vec<serde_json::Value> = invalid
        .iter()
        .map(|(problem, errors)| {
            let dir = problem.attachment_dir(&CONFIG.storage.root_path);
            serde_json::json!({
                "problem": problem.name,
                "attachmentDir": dir.display().to_string(),
                "attachmentDirExists": dir.is_dir(),
                "errors": errors,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.is_empty() {
        anyhow::bail!("{} problem(s) failed validation", report.len());
    }

    tracing::info!("All checked problems are valid");
    Ok(())
}
