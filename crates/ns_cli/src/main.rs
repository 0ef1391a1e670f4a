use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use ns_core::{DbConfig, NewsApiConfig, Result};
use ns_fetcher::NewsApiClient;
use ns_pipeline::{ExtractStage, LoadStage, Response};
use ns_sentiment::create_analyzer;
use ns_storage::{FsStore, PgArticleTable};
use ns_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "News sentiment pipeline", long_about = None)]
struct Cli {
    /// Directory backing the intermediate object store.
    #[arg(long, default_value = "news_sentiment_store")]
    storage: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch headlines, score sentiment and write one batch file
    Extract,
    /// Drain pending batch files into the news_articles table
    Load,
    /// Serve the dashboard
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 8765)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let store = Arc::new(FsStore::new(&cli.storage)?);

    match cli.command {
        Commands::Extract => {
            let config = NewsApiConfig::from_env()?;
            let source = Arc::new(NewsApiClient::new(config)?);
            let stage = ExtractStage::new(source, create_analyzer(), store);
            print_envelope(ns_pipeline::run_extract(&stage).await)
        }
        Commands::Load => {
            let config = DbConfig::from_env()?;
            let table = Arc::new(PgArticleTable::connect(&config).await?);
            let stage = LoadStage::new(store, table);
            print_envelope(ns_pipeline::run_load(&stage).await)
        }
        Commands::Serve { host, port } => {
            let config = DbConfig::from_env()?;
            let table = Arc::new(PgArticleTable::connect(&config).await?);
            ns_web::serve(AppState::new(table), &host, port).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_envelope(response: Response) -> Result<ExitCode> {
    println!(
        "{}",
        serde_json::json!({
            "statusCode": response.status_code,
            "body": response.body,
        })
    );
    Ok(if response.status_code == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
