use clap::Parser;
use comporta_api::cli::Cli;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = comporta_api::cli::run(cli).await {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
