use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Developer CLI for the prompt gateway", long_about = None)]
struct Cli {
    /// Gateway base URL.
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a generation request
    Generate {
        /// Task description
        task: String,

        /// Operating mode: fast, general, builder, thinking
        #[arg(short, long, default_value = "fast")]
        mode: String,

        /// Clarification answers as question=answer pairs (repeatable)
        #[arg(short, long = "answer")]
        answers: Vec<String>,
    },
    /// Check gateway liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Generate {
            task,
            mode,
            answers,
        } => {
            let mut payload = json!({ "task": task, "mode": mode });
            if !answers.is_empty() {
                let mut previous = Map::new();
                for pair in &answers {
                    let (question, answer) = pair
                        .split_once('=')
                        .ok_or_else(|| format!("--answer expects question=answer, got '{pair}'"))?;
                    previous.insert(question.to_string(), Value::String(answer.to_string()));
                }
                payload["context_answers"] = json!({ "previous_answers": previous });
            }

            let res = client
                .post(format!("{}/api/generate", cli.url))
                .json(&payload)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/healthz", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

/// The gateway deliberately relays non-2xx JSON bodies, so the body is
/// printed whatever the status says.
async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(body) => println!("{}\n{}", status, serde_json::to_string_pretty(&body)?),
        Err(_) => println!("{}\n{}", status, text),
    }
    Ok(())
}
