// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! wharf server binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wharf_server::{create_app_state, create_router, AppState};
use wharf_server_cfn::CloudFormationBackend;
use wharf_server_lifecycle::{CancellationToken, LifecycleRequest};

/// wharf-server - on-demand SFTP server lifecycle service.
#[derive(Parser, Debug)]
#[command(
	name = "wharf-server",
	about = "On-demand SFTP server lifecycle service",
	version
)]
struct Args {
	/// Path to the TOML config file (defaults to /etc/wharf/server.toml)
	#[arg(long, env = "WHARF_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run a single lifecycle action to completion and exit
	Lifecycle {
		/// One of: start, stop, test
		#[arg(long)]
		action: String,
	},
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Parse CLI arguments
	let args = Args::parse();

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration
	let config = match &args.config {
		Some(path) => wharf_server_config::load_config_with_file(path)?,
		None => wharf_server_config::load_config()?,
	};

	// Setup tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	// Create the provisioning backend client
	let backend = Arc::new(CloudFormationBackend::from_env(config.stack.region.clone()).await);
	let state = create_app_state(config, backend);

	// One-shot mode: run the action and exit with a meaningful code
	if let Some(Command::Lifecycle { action }) = args.command {
		return run_lifecycle_once(&state, &action).await;
	}

	let addr = state.config.socket_addr();
	tracing::info!(
		addr = %addr,
		stack = %state.config.stack.stack_name(),
		"starting wharf-server"
	);

	let listener = tokio::net::TcpListener::bind(&addr).await?;
	axum::serve(listener, create_router(state)).await?;
	Ok(())
}

async fn run_lifecycle_once(
	state: &AppState,
	action: &str,
) -> Result<(), Box<dyn std::error::Error>> {
	let request = match LifecycleRequest::parse(action) {
		Ok(request) => request,
		Err(err) => {
			eprintln!("{err}");
			std::process::exit(2);
		}
	};

	let cancel = CancellationToken::new();
	match state.controller.handle(request, &cancel).await {
		Ok(summary) => {
			println!("{}", serde_json::to_string_pretty(&summary)?);
			Ok(())
		}
		Err(err) => {
			eprintln!("{err}");
			std::process::exit(1);
		}
	}
}
