//! Terminal views over the tip catalog.
//!
//! `list` renders the overview, `show` renders one tip addressed by slug,
//! and `check` runs the authoring contract plus the integrity report over a
//! content document. Rendered data goes to stdout; logs and diagnostics go
//! to stderr. A missing slug is a rendered not-found state with exit code 1,
//! not an error.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tipdeck::{
    BUNDLED_CONTENT, CatalogBuild, Route, Tip, View, build_catalog, list_all,
    load_document_from_path, log_report, navigate, parse_document, shared_build,
    validate_document,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tipdeck", version)]
#[command(about = "Browse a slug-addressed catalog of bite-size JavaScript tips")]
struct Cli {
    /// Load tips from this JSON document instead of the bundled catalog.
    #[arg(long, global = true, value_name = "PATH")]
    content: Option<PathBuf>,
    /// Log debug detail to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print every tip in catalog order.
    List {
        /// Emit one JSON object per tip instead of columns.
        #[arg(long)]
        json: bool,
    },
    /// Show one tip addressed by its slug.
    Show {
        /// Slug of the tip to render, matched exactly.
        slug: String,
        /// Emit the tip as a JSON object instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Validate a content document: contract shape, integrity, slug style.
    Check,
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        CliCommand::List { json } => {
            let loaded = load_build(cli.content.as_deref())?;
            render_view(navigate(&loaded.get().catalog, &Route::Overview), json)
        }
        CliCommand::Show { slug, json } => {
            let loaded = load_build(cli.content.as_deref())?;
            render_view(navigate(&loaded.get().catalog, &Route::Detail(slug)), json)
        }
        CliCommand::Check => run_check(cli.content.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tipdeck=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Catalog build for this invocation: the process-wide bundled build, or a
/// one-off build of the `--content` document.
enum LoadedBuild {
    Shared(&'static CatalogBuild),
    Owned(CatalogBuild),
}

impl LoadedBuild {
    fn get(&self) -> &CatalogBuild {
        match self {
            LoadedBuild::Shared(build) => build,
            LoadedBuild::Owned(build) => build,
        }
    }
}

fn load_build(content: Option<&Path>) -> Result<LoadedBuild> {
    let loaded = match content {
        None => LoadedBuild::Shared(shared_build()?),
        Some(path) => {
            let document = load_document_from_path(path)?;
            let build = build_catalog(document.tips);
            log_report(&build.report);
            LoadedBuild::Owned(build)
        }
    };
    let build = loaded.get();
    debug!(
        tips = build.catalog.len(),
        issues = build.report.issues().len(),
        "catalog ready"
    );
    Ok(loaded)
}

fn render_view(view: View<'_>, json: bool) -> Result<bool> {
    match view {
        View::Listing(catalog) => {
            for tip in list_all(catalog) {
                if json {
                    println!("{}", serde_json::to_string(tip)?);
                } else {
                    println!("{:<20} {} - {}", tip.slug, tip.title, tip.summary);
                }
            }
            Ok(true)
        }
        View::Detail(tip) => {
            if json {
                println!("{}", serde_json::to_string(tip)?);
            } else {
                print_tip(tip);
            }
            Ok(true)
        }
        View::NotFound { slug } => {
            println!("tip not found: {slug}");
            eprintln!("run 'tipdeck list' to see the available slugs");
            Ok(false)
        }
    }
}

fn print_tip(tip: &Tip) {
    println!("{}", tip.title);
    println!("slug: {}", tip.slug);
    println!();
    println!("{}", tip.summary);
    println!();
    println!("{}", tip.description);
    println!();
    println!("{}", tip.code_snippet);
}

fn run_check(content: Option<&Path>) -> Result<bool> {
    let raw = match content {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading tip catalog {}", path.display()))?,
        None => BUNDLED_CONTENT.to_string(),
    };
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("parsing content document as JSON")?;

    let mut failures = validate_document(&value)?;

    // The contract covers shape; the builder report covers integrity.
    match parse_document(&raw) {
        Ok(document) => {
            let build = build_catalog(document.tips);
            failures.extend(build.report.issues().iter().map(ToString::to_string));
            for slug in build.catalog.slugs().filter(|slug| !slug.is_well_formed()) {
                eprintln!("check: warning: slug `{slug}` is not lowercase-hyphenated");
            }
        }
        Err(err) => failures.push(format!("{err:#}")),
    }

    if failures.is_empty() {
        println!("check: PASS");
        return Ok(true);
    }

    eprintln!("check: FAIL");
    for failure in &failures {
        eprintln!("  - {failure}");
    }
    bail!("content document failed validation");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_takes_a_slug_and_global_flags() {
        let cli =
            Cli::try_parse_from(["tipdeck", "--verbose", "show", "hoisting", "--json"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            CliCommand::Show { slug, json } => {
                assert_eq!(slug, "hoisting");
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn content_override_parses_after_the_subcommand() {
        let cli = Cli::try_parse_from(["tipdeck", "check", "--content", "fixtures/tips.json"])
            .unwrap();
        assert_eq!(cli.content.as_deref(), Some(Path::new("fixtures/tips.json")));
        assert!(matches!(cli.command, CliCommand::Check));
    }
}
