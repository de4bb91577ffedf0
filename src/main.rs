use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use daily_muse::config::SiteConfig;
use daily_muse::publish::publish;
use daily_muse::server;

/// Daily Inspiration — static page generator and local admin.
#[derive(Parser)]
#[command(name = "daily-muse")]
#[command(version, about = "Daily quotes-and-poems page generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the static page (what the daily scheduled trigger runs).
    Generate {
        /// Day to generate for, `YYYY-MM-DD`. Defaults to today (UTC).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Skip the NASA APOD fetch.
        #[arg(long)]
        no_apod: bool,
    },
    /// Run the local admin server.
    Serve {
        /// Port to bind on (loopback only).
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut config = SiteConfig::from_env();

    match cli.command {
        Commands::Generate { date, no_apod } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            publish(&config, date, !no_apod).await?;
        }
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            eprintln!("Daily Inspiration admin");
            eprintln!("   Store:  {}", config.data_path.display());
            eprintln!("   Output: {}", config.output_path.display());
            eprintln!("   Open http://127.0.0.1:{} in your browser\n", config.port);
            server::serve(config).await?;
        }
    }

    Ok(())
}
