use crate::commands::{
    run_chat_ask, run_grant_batch, run_grant_predict, AskArgs, BatchArgs, PredictArgs,
};
use crate::server;
use alusive_ml::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Alusive Africa ML",
    about = "Serve and exercise the Alusive Africa grant, FAQ, and document models",
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
    /// Score grant applications with the configured model
    Grant {
        #[command(subcommand)]
        command: GrantCommand,
    },
    /// Query the FAQ assistant
    Chat {
        #[command(subcommand)]
        command: ChatCommand,
    },
}

#[derive(Subcommand, Debug)]
enum GrantCommand {
    /// Predict the grant category for one JSON applicant record
    Predict(PredictArgs),
    /// Predict every row of an applicant CSV export
    Batch(BatchArgs),
}

#[derive(Subcommand, Debug)]
enum ChatCommand {
    /// Answer a single question
    Ask(AskArgs),
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
        Command::Grant {
            command: GrantCommand::Predict(args),
        } => run_grant_predict(args),
        Command::Grant {
            command: GrantCommand::Batch(args),
        } => run_grant_batch(args),
        Command::Chat {
            command: ChatCommand::Ask(args),
        } => run_chat_ask(args),
    }
}
