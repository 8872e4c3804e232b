use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dunes::commands::{contact::ContactCommand, serve::serve};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = dunes_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Serve => serve(config).await?,
        Command::Contact { command } => command.invoke().await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server to receive contact form submissions
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Inspect the contact form schema and check submissions
    #[command(aliases(["c"]))]
    Contact {
        #[command(subcommand)]
        command: ContactCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
