use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use iss_tracker::constants::ISS_OEM_URL;
use iss_tracker::server::create_router;
use iss_tracker::tracker::IssTracker;

const HELP: &str = "\
iss_tracker — REST service over the NASA ISS OEM ephemeris feed

USAGE:
  iss_tracker [--bind ADDR] [--source DESCRIPTOR]

OPTIONS:
  --bind ADDR          Listen address (default: 0.0.0.0:5000)
  --source DESCRIPTOR  Ephemeris source, url:… or file:… (default: the NASA OEM URL)
  -h, --help           Print this help
";

struct CliArgs {
    bind: String,
    source: String,
}

fn parse_args() -> Result<CliArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = CliArgs {
        bind: pargs
            .opt_value_from_str("--bind")?
            .unwrap_or_else(|| "0.0.0.0:5000".to_string()),
        source: pargs
            .opt_value_from_str("--source")?
            .unwrap_or_else(|| format!("url:{ISS_OEM_URL}")),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = parse_args()?;

    let tracker = Arc::new(IssTracker::new(&args.source)?);
    match tracker.refresh() {
        Ok(records) => info!(records, "initial ephemeris load complete"),
        Err(e) => warn!(error = %e, "initial ephemeris load failed, serving empty dataset"),
    }

    let app = create_router(tracker);
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!(bind = %args.bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
