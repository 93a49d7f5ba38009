use std::process;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use privat_rates::{Config, Fetcher, config, formatter};

#[derive(Parser, Debug)]
#[command(name = "privat_rates")]
#[command(about = "PrivatBank exchange rates for the last few days", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of days before today to fetch (1-10)
    #[arg(allow_negative_numbers = true)]
    days: i64,

    /// Currency codes to keep, repeatable or comma separated
    #[arg(short, long = "currency", value_delimiter = ',', default_values = ["EUR", "USD"])]
    currencies: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = config::load_dotenv();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    });

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    let fetcher = Fetcher::new(cli.days)?.with_api_url(config.api_url);
    let currencies = formatter::currency_set(&cli.currencies);
    info!("Keeping currencies: {:?}", currencies);

    let raw_data = fetcher.get_rates_for_last_days().await?;
    let formatted = formatter::format_data(&raw_data, &currencies)?;
    println!("{}", formatter::to_json(&formatted, cli.pretty)?);

    Ok(())
}
