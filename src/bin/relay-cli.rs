use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Management CLI for the Asana dashboard relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay liveness
    Health,
    /// Show the authenticated upstream user
    Me,
    /// List workspaces
    Workspaces,
    /// List projects in a workspace
    Projects {
        #[arg(short, long)]
        workspace: String,
    },
    /// List tasks in a project
    Tasks {
        #[arg(short, long)]
        project: String,
    },
    /// Mark a task completed
    CompleteTask { task_gid: String },
    /// Show the relay activity log
    Activity,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let response = match cli.command {
        Commands::Health => client.get(format!("{}/api/health", cli.url)).send().await?,
        Commands::Me => {
            client
                .get(format!("{}/api/users/me", cli.url))
                .send()
                .await?
        }
        Commands::Workspaces => {
            client
                .get(format!("{}/api/workspaces", cli.url))
                .send()
                .await?
        }
        Commands::Projects { workspace } => {
            client
                .get(format!("{}/api/projects", cli.url))
                .query(&[("workspace", workspace)])
                .send()
                .await?
        }
        Commands::Tasks { project } => {
            client
                .get(format!("{}/api/tasks", cli.url))
                .query(&[("project", project)])
                .send()
                .await?
        }
        Commands::CompleteTask { task_gid } => {
            client
                .put(format!("{}/api/tasks/{}", cli.url, task_gid))
                .json(&serde_json::json!({ "completed": true }))
                .send()
                .await?
        }
        Commands::Activity => {
            client
                .get(format!("{}/api/activity", cli.url))
                .send()
                .await?
        }
    };

    print_response(response).await
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
