use crate::demo::{run_appraisal, run_demo, run_locate, AppraiseArgs, LocateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use salon_valuation::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Salon Valuation Service",
    about = "Value salons for sale from the command line or over HTTP",
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
    /// Value a single salon from command-line figures
    Appraise(AppraiseArgs),
    /// Show the market tier for a ZIP code or city
    Locate(LocateArgs),
    /// Print a sample valuation for a Manhattan salon
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Appraise(args) => run_appraisal(args),
        Command::Locate(args) => {
            run_locate(args);
            Ok(())
        }
        Command::Demo => run_demo(),
    }
}
