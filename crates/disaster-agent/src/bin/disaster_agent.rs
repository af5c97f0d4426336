use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use agent_core::ToolRequest;
use disaster_agent::DisasterAgent;

#[derive(Debug, Parser)]
#[command(name = "disaster_agent")]
#[command(about = "Inspect the disaster information agent and call its tools")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the agent registration as JSON
    Manifest,

    /// List tool names and descriptions
    Tools,

    /// Invoke one tool and print its result
    Call {
        /// Tool name, e.g. get_recent_earthquakes
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("disaster_tools=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let agent = DisasterAgent::from_env()?;

    match args.command {
        Command::Manifest => {
            println!("{}", serde_json::to_string_pretty(&agent.manifest()?)?);
        }
        Command::Tools => {
            for (name, description) in agent.executor().registry().get_descriptions() {
                println!("{:<28} {}", name, description);
            }
        }
        Command::Call { tool, args } => {
            let request = ToolRequest::from_call("cli".to_string(), tool, &args)
                .map_err(|e| format!("Invalid --args JSON: {}", e))?;
            let result = agent.handle(request).await;

            match serde_json::from_str::<Value>(&result.content) {
                Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
                Err(_) => println!("{}", result.content),
            }

            if !result.success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
