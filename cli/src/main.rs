use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use smoke_core::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use smoke_core::report::write_report;
use smoke_core::{HarnessConfig, HttpMethod, ResponseOutcome, SmokeClient, Verdict};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "smoke")]
#[command(about = "Send one HTTP request and check that the response body is JSON")]
struct Cli {
    /// Base URL of the service under test
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP method: GET, POST, PUT or DELETE
    method: HttpMethod,

    /// Path appended to the base URL
    path: String,

    /// Request parameter as key=value; repeatable
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Do not print the response body
    #[arg(short, long)]
    quiet: bool,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {s:?}"))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in {s:?}"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn render<W: Write>(out: &mut W, outcome: &ResponseOutcome, quiet: bool) -> io::Result<Verdict> {
    writeln!(out, "returned status code: {}", outcome.status)?;
    if !quiet {
        writeln!(out, "{}", outcome.body)?;
    }
    let verdict = outcome.verdict();
    write_report(out, &verdict)?;
    Ok(verdict)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HarnessConfig::new(&cli.base_url).context("invalid base URL")?;
    let client = SmokeClient::new(config);

    let endpoint = client
        .endpoint(cli.method, &cli.path)
        .with_params(cli.params);
    info!(url = %endpoint.url(), method = %endpoint.method(), "sending request");

    let outcome = client
        .send(&endpoint)
        .with_context(|| format!("{} {} failed", endpoint.method(), endpoint.url()))?;

    render(&mut io::stdout().lock(), &outcome, cli.quiet)?;
    Ok(())
}
