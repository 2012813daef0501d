use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "vault-cli")]
#[command(about = "Command line client for the inheritance vault backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the wallet session
    Session,
    /// Ask the wallet to connect
    Connect,
    /// Drop the session and the transaction log
    Disconnect,
    /// List transactions submitted this session, newest first
    Transactions,
    /// Show the last error message
    LastError,
    /// List vaults
    Vaults,
    /// Show one vault
    Vault { id: u64 },
    /// Portfolio summary
    Dashboard,
    /// Create a vault
    Create {
        /// Bitcoin address holding the inheritance
        #[arg(long)]
        btc: String,
        /// Amount in STX, e.g. 2.5
        #[arg(long)]
        amount: String,
        /// Beneficiary as ADDRESS:PERCENT; repeat for each beneficiary
        #[arg(long = "beneficiary", required = true)]
        beneficiaries: Vec<String>,
        /// Time delay in blocks
        #[arg(long)]
        time_delay: Option<u64>,
        /// Proof-of-life interval in blocks
        #[arg(long)]
        proof_of_life: Option<u64>,
        /// Emergency contact address; repeatable
        #[arg(long = "emergency-contact")]
        emergency_contacts: Vec<String>,
    },
    /// Claim an inheritance
    Claim { id: u64 },
    /// Simulate a burst of owner activity (testing)
    Activity { id: u64 },
    /// Simulate owner death (testing)
    Death { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let req = match cli.command {
        Commands::Session => client.get(format!("{}/api/session", base)),
        Commands::Connect => client.post(format!("{}/api/wallet/connect", base)),
        Commands::Disconnect => client.post(format!("{}/api/wallet/disconnect", base)),
        Commands::Transactions => client.get(format!("{}/api/transactions", base)),
        Commands::LastError => client.get(format!("{}/api/error", base)),
        Commands::Vaults => client.get(format!("{}/api/vaults", base)),
        Commands::Vault { id } => client.get(format!("{}/api/vaults/{}", base, id)),
        Commands::Dashboard => client.get(format!("{}/api/dashboard", base)),
        Commands::Create {
            btc,
            amount,
            beneficiaries,
            time_delay,
            proof_of_life,
            emergency_contacts,
        } => {
            let shares = beneficiaries
                .iter()
                .map(|b| parse_share(b))
                .collect::<Result<Vec<_>, _>>()?;
            let body = json!({
                "bitcoin_address": btc,
                "amount_stx": amount,
                "beneficiaries": shares,
                "time_delay": time_delay,
                "proof_of_life_interval": proof_of_life,
                "emergency_contacts": emergency_contacts,
            });
            client.post(format!("{}/api/vaults", base)).json(&body)
        }
        Commands::Claim { id } => client.post(format!("{}/api/vaults/{}/claim", base, id)),
        Commands::Activity { id } => client.post(format!("{}/api/vaults/{}/activity", base, id)),
        Commands::Death { id } => client.post(format!("{}/api/vaults/{}/death", base, id)),
    };

    print_response(req.send().await?).await
}

/// `ST2ABC:60` → `{"address": "ST2ABC", "percentage": 60}`.
fn parse_share(raw: &str) -> Result<Value, String> {
    let (address, pct) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("beneficiary '{}' must be ADDRESS:PERCENT", raw))?;
    let percentage: u32 = pct
        .trim()
        .parse()
        .map_err(|_| format!("beneficiary '{}' has an invalid percentage", raw))?;
    Ok(json!({"address": address.trim(), "percentage": percentage}))
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let body = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or(text);

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", body);
        std::process::exit(1);
    }

    println!("{}", body);
    Ok(())
}
