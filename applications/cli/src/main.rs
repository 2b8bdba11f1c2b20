/// Cast - terminal podcast player
use cast_cli::{format::format_duration, session, CliConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cast")]
#[command(about = "Play a podcast episode catalog", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./cast.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive playback session
    Play {
        /// Episode catalog (JSON)
        catalog: PathBuf,

        /// Episode to start from
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
    /// Print the episodes of a catalog
    List {
        /// Episode catalog (JSON)
        catalog: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cast_cli=info,cast_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { catalog, index } => {
            let config = CliConfig::load(cli.config.as_deref())?;
            config.validate()?;

            let episodes = cast_core::catalog::load_episodes(&catalog)?;
            tracing::info!(
                "Loaded {} episodes from {}",
                episodes.len(),
                catalog.display()
            );

            session::run(config, episodes, index).await?;
        }
        Commands::List { catalog } => {
            let episodes = cast_core::catalog::load_episodes(&catalog)?;
            let total: u64 = episodes.iter().map(|episode| episode.duration).sum();

            for line in session::catalog_lines(&episodes) {
                println!("{line}");
            }
            println!("{} episodes, {} total", episodes.len(), format_duration(total));
        }
    }

    Ok(())
}
