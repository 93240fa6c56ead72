// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lumen - a self-hosted concept-explainer proxy.
//!
//! This is the binary entry point for the Lumen server.

use clap::{Parser, Subcommand};

mod serve;

/// Lumen - a self-hosted concept-explainer proxy.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the explainer proxy server.
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match lumen_config::load_and_validate() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("lumen: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run(config).await {
                eprintln!("lumen: {e}");
                std::process::exit(1);
            }
        }
        None => {
            println!("lumen: use --help for available commands");
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config = lumen_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
