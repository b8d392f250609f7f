mod client;
mod commands;
mod config;
mod error;
mod output;
mod responses;
mod types;

use std::error::Error;

use client::JiraClient;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("Caused by: {cause}");
            source = cause.source();
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config_path = Config::default_path()?;

    let config = match Config::load(&config_path)? {
        Some(config) => config,
        None => {
            println!("Configuration not found. Please set up your Jira credentials.");
            commands::setup::run(&config_path)?
        }
    };

    let client = JiraClient::new(&config);

    println!("Welcome to the Jira CLI tool!");
    println!("1. Fetch an issue");
    println!("2. Create a new issue");

    let choice = commands::prompt("Choose an option (1 or 2): ")?;

    match MenuChoice::parse(&choice) {
        Some(MenuChoice::Fetch) => commands::fetch::run(&client).await?,
        Some(MenuChoice::Create) => commands::create::run(&client).await?,
        // Not an error: the session just ends.
        None => println!("Invalid choice. Please choose 1 or 2."),
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Fetch,
    Create,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Fetch),
            "2" => Some(Self::Create),
            _ => None,
        }
    }
}
