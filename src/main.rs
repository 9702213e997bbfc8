use anyhow::{Context, Result};
use clap::Parser;
use moviestore::shell::{Session, load_seed_file};
use moviestore::{IdStrategy, MovieStore, StoreConfig, UpdatePlacement};
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moviestore")]
#[command(about = "In-memory movie store with an interactive shell")]
struct Cli {
    /// How new records get their id
    #[arg(long, value_enum, env = "MOVIESTORE_ID_STRATEGY")]
    id_strategy: Option<IdStrategy>,

    /// Where an updated record ends up
    #[arg(long, value_enum, env = "MOVIESTORE_UPDATE_PLACEMENT")]
    update_placement: Option<UpdatePlacement>,

    /// Length-based ids and move-to-end updates, unless overridden above
    #[arg(long)]
    legacy: bool,

    /// JSON array of movies to load before the shell starts
    #[arg(long, env = "MOVIESTORE_SEED")]
    seed: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Exit with an error on the first failing command of the script
    #[arg(long, requires = "script")]
    fail_fast: bool,
}

impl Cli {
    fn store_config(&self) -> StoreConfig {
        let mut config = if self.legacy {
            StoreConfig::legacy()
        } else {
            StoreConfig::new()
        };
        if let Some(strategy) = self.id_strategy {
            config = config.id_strategy(strategy);
        }
        if let Some(placement) = self.update_placement {
            config = config.update_placement(placement);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.store_config();
    info!(
        id_strategy = %config.id_strategy,
        update_placement = %config.update_placement,
        "movie store starting"
    );

    let mut session = Session::new(MovieStore::with_config(config));

    if let Some(path) = &cli.seed {
        let entries = load_seed_file(path)
            .await
            .context("failed to load seed file")?;
        session.seed(entries);
    }

    let mut stdout = tokio::io::stdout();
    let summary = match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open script '{}'", path.display()))?;
            session = session.fail_fast(cli.fail_fast);
            session
                .run(BufReader::new(file), &mut stdout)
                .await
                .with_context(|| format!("script '{}' failed", path.display()))?
        }
        None => {
            if std::io::stdin().is_terminal() {
                session = session.prompt("movies> ");
            }
            session
                .run(BufReader::new(tokio::io::stdin()), &mut stdout)
                .await
                .context("shell failed")?
        }
    };

    info!(
        executed = summary.executed,
        failed = summary.failed,
        "movie store stopped"
    );
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moviestore=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
