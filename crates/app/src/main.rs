//! Probe - backend API smoke-test runner
//!
//! Runs the built-in plan against the backend named in the frontend env
//! file and turns the result into the process exit code.

mod args;

use std::process::ExitCode;
use std::sync::Arc;

use args::Args;
use clap::Parser;
use probe_application::{ApplicationResult, BaseUrlSource, ExecuteCase, RunSuite};
use probe_domain::{ResultSet, TestPlan};
use probe_infrastructure::{ConsoleReporter, EnvFileBaseUrl, FixedBaseUrl, ReqwestHttpClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the report, logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(args).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!(error = %e, "run aborted");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(args: Args) -> anyhow::Result<u8> {
    let client = Arc::new(ReqwestHttpClient::new()?);
    let plan = TestPlan::backend_with_timeouts(args.read_timeout(), args.chat_timeout());

    let results = if let Some(url) = args.base_url {
        tracing::info!(base_url = %url, "using base URL from the command line");
        run_plan(client, FixedBaseUrl::new(url), &plan).await?
    } else {
        tracing::info!(
            path = %args.env_file.display(),
            key = %args.key,
            "reading base URL from env file"
        );
        run_plan(client, EnvFileBaseUrl::new(args.env_file, args.key), &plan).await?
    };

    Ok(results.exit_code())
}

async fn run_plan<S: BaseUrlSource>(
    client: Arc<ReqwestHttpClient>,
    base_url: S,
    plan: &TestPlan,
) -> ApplicationResult<ResultSet> {
    let suite = RunSuite::new(
        ExecuteCase::new(client, Arc::new(base_url)),
        ConsoleReporter::stdout(),
    );
    suite.run(plan).await
}
