//! # One Bucket
//!
//! Headless entry point: restores the stored session once and reports which
//! screen the app would open on.

use std::sync::Arc;

use anyhow::Context;
use one_bucket::app::{App, Appearance};
use one_bucket::core::ClientConfig;
use one_bucket::services::{ApiClient, FileTokenStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _log_guard = one_bucket::debug::init().context("failed to initialize logging")?;

    let config = ClientConfig::from_env().context("failed to load configuration")?;
    config.validate()?;
    tracing::info!(
        api = %config.api_base_url,
        storage = %config.storage_base_url,
        timeout_secs = config.request_timeout.as_secs(),
        token_file = %config.token_file.display(),
        "Configuration loaded"
    );

    let tokens = Arc::new(FileTokenStore::new(&config.token_file));
    let api = Arc::new(ApiClient::new(&config, tokens.clone()));

    let mut app = App::new(api, tokens);
    app.initialize_theme(appearance_from_env());
    app.mount()?;
    app.run_until_bootstrapped().await?;

    let session = app.session();
    let route = app.current_route().clone();
    tracing::info!(
        logged_in = session.is_logged_in,
        member_id = session.member_info.as_ref().map(|m| m.id),
        route = %route,
        boards = app.store().board_list().len(),
        "Startup complete"
    );

    match &session.member_info {
        Some(member) => println!("Logged in as {} (#{})", member.nickname, member.id),
        None => println!("Not logged in"),
    }
    println!("Start screen: {}", route);

    app.unmount();
    Ok(())
}

/// `ONE_BUCKET_APPEARANCE=dark|light` stands in for the platform signal.
fn appearance_from_env() -> Appearance {
    match std::env::var("ONE_BUCKET_APPEARANCE").as_deref() {
        Ok("dark") => Appearance::Dark,
        Ok("light") => Appearance::Light,
        _ => Appearance::Unspecified,
    }
}
