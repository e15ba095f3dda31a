use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Send a request through a running relay proxy", long_about = None)]
struct Cli {
    /// Address of the relay endpoint.
    #[arg(long, default_value = "http://localhost:8080")]
    relay: String,

    /// HTTP method for the downstream call.
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// Downstream protocol (http or https).
    #[arg(short, long, default_value = "https")]
    protocol: String,

    /// Signing key shared with the downstream verifier.
    #[arg(short, long)]
    key: String,

    /// Downstream host (and optional port), e.g. api.example.com.
    #[arg(short, long)]
    uri: String,

    /// Downstream controller segment.
    #[arg(short, long)]
    controller: String,

    /// Downstream action segment.
    #[arg(short, long)]
    action: String,

    /// Request body; must already be JSON if structured.
    #[arg(short, long)]
    body: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut payload = json!({
        "method": cli.method,
        "protocol": cli.protocol,
        "key": cli.key,
        "uri": cli.uri,
        "controller": cli.controller,
        "action": cli.action,
    });
    if let Some(body) = cli.body {
        payload["body"] = Value::String(body);
    }

    let res = client.post(&cli.relay).json(&payload).send().await?;
    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
