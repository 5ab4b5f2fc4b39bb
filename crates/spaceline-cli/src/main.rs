use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use spaceline_cli::output::{write_table, OutputFormat};
use spaceline_lib::{generate_table, SeededSource, TicketTable, DEFAULT_ROW_COUNT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Randomized Earth to Mars ticket price table")]
struct Cli {
    /// Number of ticket rows to generate.
    #[arg(long, default_value_t = DEFAULT_ROW_COUNT, allow_negative_numbers = true)]
    rows: i64,

    /// Seed for a reproducible table. Uses OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let mut rng = match cli.seed {
        Some(seed) => {
            info!(seed, "using seeded random source");
            SeededSource::from_seed_u64(seed)
        }
        None => SeededSource::from_entropy(),
    };

    let rows = generate_table(cli.rows, &mut rng).context("failed to generate ticket table")?;
    let table = TicketTable::new(rows);

    let stdout = io::stdout();
    write_table(cli.format, &table, &mut stdout.lock()).context("failed to write ticket table")?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
