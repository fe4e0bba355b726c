use clap::Parser;
use lodging_web::{config::Config, server};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Server-rendered lodging pages backed by the travel API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the Web Application
    Serve {
        /// Base URL of the backend API (default: "http://localhost:8000")
        #[arg(short = 'e', long, env = "PUBLIC_SERVER_URL", required = false)]
        endpoint: Option<String>,

        /// Port for the Web App
        #[arg(short = 'p', long, default_value_t = 8080, required = false)]
        port: u16,

        /// Host for the Web App
        #[arg(short = 's', long, default_value_t = String::from("0.0.0.0"), required = false)]
        host: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let command = Command::parse();

    match command {
        Command::Serve {
            endpoint,
            port,
            host,
        } => {
            let config = match Config::resolve(endpoint.as_deref()) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("{e}");
                    return ExitCode::FAILURE;
                }
            };

            if let Err(e) = server::serve(config, &host, port) {
                tracing::error!("Unable to serve application. Error: {e:#}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
