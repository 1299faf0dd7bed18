//! Command implementations for the `str-ebs` binary

use crate::cli::{Cli, Commands};
use crate::client::{EbsClient, User};
use crate::config::{ApiConfig, AuthConfig, Config};
use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Execute the requested command
///
/// # Errors
///
/// Returns the first config, I/O or request error encountered.
pub fn execute(cli: Cli) -> Result<()> {
    let path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    let mut config = Config::load_or_default(&path)?;
    config.apply_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    config.verbose |= cli.verbose;
    config.validate()?;
    debug!(config = %path.display(), api_url = %config.api_url, "loaded config");

    match cli.command {
        Commands::Login { code } => handle_login(config, &path, &code),
        Commands::Logout => handle_logout(&path),
        Commands::Broadcast { message } => handle_broadcast(config, &message),
        Commands::GameState { file } => handle_game_state(config, file.as_deref()),
        Commands::ShowConfig => {
            handle_show_config(&config, &path);
            Ok(())
        }
    }
}

/// Handle login command
fn handle_login(config: Config, path: &Path, code: &str) -> Result<()> {
    let client = EbsClient::new(Arc::new(config))?;
    let user = client.verify_credentials(code)?;

    // Persist only what the server returned, not env or flag overrides
    let mut stored = Config::load_or_default(path)?;
    store_login(&mut stored.auth, &user);
    stored.save_to(path)?;

    println!(
        "{} Logged in as {} ({})",
        style("✓").green(),
        style(&user.name).bold(),
        user.id
    );
    if !stored.are_credentials_valid() {
        println!(
            "  {} no OAuth token stored yet; requests stay unauthenticated",
            style("!").yellow()
        );
    }
    println!("  Credentials saved to: {}", path.display());
    Ok(())
}

/// Handle logout command
fn handle_logout(path: &Path) -> Result<()> {
    let mut stored = Config::load_or_default(path)?;
    stored.auth.clear();
    stored.save_to(path)?;

    println!("{} Logged out", style("✓").green());
    Ok(())
}

/// Handle broadcast command
fn handle_broadcast(config: Config, message: &str) -> Result<()> {
    let client = EbsClient::new(Arc::new(config))?;
    client.broadcast_message(message)?;
    report_success(&client);

    println!("{} Message broadcast", style("✓").green());
    Ok(())
}

/// Handle game-state command
fn handle_game_state(config: Config, file: Option<&Path>) -> Result<()> {
    let state = read_state(file)?;
    let _: serde_json::Value =
        serde_json::from_str(&state).context("game state is not valid JSON")?;

    let client = EbsClient::new(Arc::new(config))?;
    client.post_game_state(&state)?;
    report_success(&client);

    println!("{} Game state posted ({} bytes)", style("✓").green(), state.len());
    Ok(())
}

/// Handle show-config command
fn handle_show_config(config: &Config, path: &Path) {
    println!("{}", style("=== str-ebs configuration ===").bold().cyan());
    println!("  Config file: {}", path.display());
    println!("  API URL:     {}", config.api_url);
    println!("  User:        {}", config.auth.user);
    println!("  Token:       {}", config.auth.masked_token());
    let status = if config.are_credentials_valid() {
        style("valid").green()
    } else {
        style("missing").yellow()
    };
    println!("  Credentials: {status}");
}

/// Record a verified user, never pairing an old token with a different user
fn store_login(auth: &mut AuthConfig, user: &User) {
    if let Some(token) = &user.token {
        auth.oauth_token.clone_from(token);
    } else if auth.user != user.id {
        auth.oauth_token.clear();
    }
    auth.user.clone_from(&user.id);
}

fn read_state(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut state = String::new();
            io::stdin()
                .read_to_string(&mut state)
                .context("failed to read game state from stdin")?;
            Ok(state)
        }
    }
}

fn report_success<C: ApiConfig>(client: &EbsClient<C>) {
    if let Some(at) = client.last_success().as_datetime() {
        debug!(at = %at.to_rfc3339(), "last successful request");
    }
}
