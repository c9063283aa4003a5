use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "airdrop-cli")]
#[command(about = "Command-line client for the airdrop relay", long_about = None)]
struct Cli {
    #[arg(short, long, env = "AIRDROP_RELAY_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the relay is running
    Status,
    /// Request an airdrop
    Airdrop {
        /// Target network (devnet or testnet)
        #[arg(short, long, default_value = "devnet")]
        network: String,
        /// Amount of SOL, between 0 and 10 (exclusive)
        #[arg(short, long)]
        amount: f64,
        /// Recipient address (base58)
        #[arg(long)]
        address: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Airdrop {
            network,
            amount,
            address,
        } => {
            let res = client
                .post(format!("{}/airdrop", base))
                .json(&json!({
                    "network": network,
                    "amount": amount,
                    "address": address,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    let body = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", body);
    } else {
        eprintln!("Error: relay returned status {}", status);
        eprintln!("{}", body);
        std::process::exit(1);
    }
    Ok(())
}
