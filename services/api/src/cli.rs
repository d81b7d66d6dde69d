use crate::commands::{run_demo, run_list, run_score, DemoArgs, ListArgs, ScoreArgs};
use crate::server;
use cardio_risk::config::AppConfig;
use cardio_risk::error::AppError;
use cardio_risk::telemetry;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Cardio Risk",
    about = "Evaluate CHA2DS2-VASc, HAS-BLED, TIMI and HEART risk scores from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the bundled scores and their fields
    List(ListArgs),
    /// Evaluate one score from FIELD=VALUE pairs
    Score(ScoreArgs),
    /// Evaluate a set of sample patients against every score
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Fall back to field defaults instead of rejecting malformed values
    #[arg(long)]
    pub(crate) lenient: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::List(args) => {
            cli_config()?;
            run_list(args)
        }
        Command::Score(args) => run_score(args, &cli_config()?),
        Command::Demo(args) => run_demo(args, &cli_config()?),
    }
}

/// Loads configuration and routes tracing to stderr for one-shot commands.
fn cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_cli(&config.telemetry)?;
    Ok(config)
}
