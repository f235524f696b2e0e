//! Evaluate paths against a trailing-slash configuration without a server.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use trailing_slash::config::{load_config, AppConfig};
use trailing_slash::slash::{ExceptionPolicyBuilder, Redirect, RequestTarget, TrailingSlash};

#[derive(Parser)]
#[command(name = "slash-check")]
#[command(about = "Show which request paths would be redirected to a trailing slash", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP method to evaluate with.
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// Redirect even exempt paths, as `append_anyway` does.
    #[arg(long)]
    anyway: bool,

    /// Request paths, optionally with a query (`/users?page=2`).
    #[arg(required = true)]
    paths: Vec<String>,
}

#[derive(Serialize)]
struct RedirectReport {
    status: u16,
    reason: &'static str,
    location: String,
}

impl From<Redirect> for RedirectReport {
    fn from(redirect: Redirect) -> Self {
        Self {
            status: redirect.status().as_u16(),
            reason: redirect.status_reason(),
            location: redirect.location().to_string(),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    path: &'a str,
    query: &'a str,
    method: &'a str,
    needs_trailing_slash: bool,
    redirect: Option<RedirectReport>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    let appender = TrailingSlash::new(ExceptionPolicyBuilder::from_config(&config.trailing_slash).build());

    for raw in &cli.paths {
        let (path, query) = match raw.find('?') {
            Some(idx) => raw.split_at(idx),
            None => (raw.as_str(), ""),
        };
        let target = RequestTarget::new(path, query, &cli.method);

        let needs = appender.policy().needs_trailing_slash(path.trim());
        let redirect = if cli.anyway {
            Some(appender.append_anyway(target))
        } else {
            appender.append(target)
        };

        let report = Report {
            path,
            query,
            method: &cli.method,
            needs_trailing_slash: needs,
            redirect: redirect.map(RedirectReport::from),
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}
