use crate::report::{run_vendor_report, VendorReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Insights",
    about = "Serve and report vendor performance analytics from the command line",
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
    /// Print the vendor table and its summary for one reporting window
    Report(VendorReportArgs),
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
        Command::Report(args) => run_vendor_report(args),
    }
}
