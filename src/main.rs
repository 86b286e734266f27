//! Inspect a documentation module on disk.
//!
//! Usage:
//!   docs-entity <module> <path>[=<version>]... [--title <title>]
//!
//! Prints the entity summary (versions, languages) as JSON.
//!
//! Optional environment variables:
//! - DOCS_IGNORED_FILES (comma separated, defaults to the built-in list)
//! - DOCS_DEFAULT_VERSION (label for paths given without `=<version>`)
//! - RUST_LOG

use anyhow::{bail, Context, Result};
use docs_entity::{Config, DocumentationEntity};
use tracing::info;

#[derive(Debug)]
struct Args {
    module: String,
    title: Option<String>,
    /// (path, version label)
    paths: Vec<(String, Option<String>)>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut module = None;
    let mut title = None;
    let mut paths = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--title" {
            title = Some(args.next().context("--title requires a value")?);
        } else if module.is_none() {
            module = Some(arg);
        } else {
            match arg.split_once('=') {
                Some((path, version)) => paths.push((path.to_string(), Some(version.to_string()))),
                None => paths.push((arg, None)),
            }
        }
    }

    let Some(module) = module else {
        bail!("Usage: docs-entity <module> <path>[=<version>]... [--title <title>]");
    };
    if paths.is_empty() {
        bail!("At least one documentation path is required");
    }

    Ok(Args {
        module,
        title,
        paths,
    })
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docs_entity=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let args = parse_args(std::env::args().skip(1))?;

    let mut paths = args.paths.into_iter();
    let (first_path, first_version) = paths
        .next()
        .context("At least one documentation path is required")?;
    let first_version = first_version.unwrap_or_else(|| config.default_version.clone());

    let mut entity = DocumentationEntity::new(
        &args.module,
        &first_version,
        &first_path,
        args.title.as_deref(),
        config.ignored_files.clone(),
    )
    .with_context(|| format!("Failed to load {} from {}", args.module, first_path))?;

    for (path, version) in paths {
        let version = version.unwrap_or_else(|| config.default_version.clone());
        entity
            .add_version(&version, &path)
            .with_context(|| format!("Failed to add version '{}' from {}", version, path))?;
    }

    info!(
        "Loaded {} with {} version(s) and {} language(s)",
        entity.module_folder(),
        entity.versions().len(),
        entity.languages().len()
    );

    println!("{}", serde_json::to_string_pretty(&entity.summary())?);
    Ok(())
}
