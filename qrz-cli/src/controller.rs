//! Wires the credential store, the lookup client and the renderers together.

use std::collections::BTreeSet;
use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{Context, Result};
use qrz_core::{LookupAction, SessionToken};
use qrz_fetch::{
    BatchFetcher, BatchOutcome, ClientConfig, CredentialSource, LookupClient, QrzClient,
    normalize_terms,
};
use qrz_store::{CredentialStore, default_config_path};
use tracing::{debug, info, warn};

use crate::credentials::StoreCredentials;
use crate::output::{self, ConsoleFormatter};
use crate::progress::ProgressBar;
use crate::{Cli, ExitCode, prompt};

/// Prints the path of the config file.
pub fn print_config_path() -> Result<ExitCode> {
    let path = default_config_path().context("Could not determine the config directory")?;
    println!("{}", path.display());
    Ok(ExitCode::Success)
}

/// Runs one batch of lookups.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let terms = normalize_terms(cli.action, &cli.terms);
    if terms.is_empty() {
        warn!("Nothing to look up");
        return Ok(ExitCode::Success);
    }

    let mut store = CredentialStore::open_default()
        .await
        .context("Failed to load the config file")?;
    debug!(path = %store.path().display(), "Using config file");

    if cli.reset {
        reset_credentials(&mut store).await?;
    }

    if !store.has_callsign() {
        let callsign = prompt::prompt_callsign()?;
        store.set_callsign(&callsign);
        store.save().await.context("Failed to save the config file")?;
    }

    let mut config = ClientConfig::builder();
    if let Some(secs) = cli.timeout {
        config = config.timeout(Duration::from_secs(secs));
    }

    let username = store.callsign().unwrap_or_default().to_string();
    let password = store.password().unwrap_or_default();
    let mut client = QrzClient::new(config.build(), username, password)
        .context("Failed to create the QRZ client")?
        .with_session(store.session());

    let mut progress = ProgressBar::new(!cli.no_progress && !cli.quiet);
    let outcome = fetch_all(&mut client, &mut store, cli.action, &terms, &mut progress).await?;
    drop(progress);

    report(cli, &outcome)?;
    persist_session(&mut store, client.session()).await;

    Ok(exit_code(&outcome))
}

/// Forgets the stored password and session, keeping the callsign.
async fn reset_credentials(store: &mut CredentialStore) -> Result<()> {
    info!("Clearing stored password and session");
    store.clear_credentials();
    store.save().await.context("Failed to save the config file")
}

/// Logs in if needed, then resolves every term.
async fn fetch_all<C: LookupClient>(
    client: &mut C,
    store: &mut CredentialStore,
    action: LookupAction,
    terms: &BTreeSet<String>,
    progress: &mut ProgressBar,
) -> Result<BatchOutcome> {
    let mut credentials = StoreCredentials::new(store);

    if !client.token_is_valid() {
        login(client, &mut credentials).await?;
    }

    Ok(BatchFetcher::new(client, &mut credentials)
        .with_progress(progress)
        .run(action, terms)
        .await)
}

/// Obtains a session before the batch starts.
///
/// A rejected login is not fatal: the batch retries and prompts again.
async fn login(
    client: &mut impl LookupClient,
    credentials: &mut impl CredentialSource,
) -> Result<()> {
    let password = credentials.password().await?;
    client.set_password(password);

    match client.fetch_token().await {
        Ok(()) if client.token_is_valid() => {
            info!("Logged in");
            if let Err(e) = credentials.session_refreshed(client.session()).await {
                warn!(error = %e, "Could not save the session");
            }
        }
        Ok(()) => {}
        Err(e) => {
            warn!(error = %e, "Login failed");
            credentials.login_failed(&e).await;
        }
    }
    Ok(())
}

async fn persist_session(store: &mut CredentialStore, session: &SessionToken) {
    store.set_session(session);
    if let Err(e) = store.save().await {
        warn!(error = %e, "Could not save the session");
    }
}

/// Exit code 1 only when every term failed.
fn exit_code(outcome: &BatchOutcome) -> ExitCode {
    if outcome.all_failed() {
        ExitCode::Error
    } else {
        ExitCode::Success
    }
}

fn report(cli: &Cli, outcome: &BatchOutcome) -> Result<()> {
    if !outcome.records.is_empty() {
        let use_colors = !cli.no_color && std::io::stdout().is_terminal();
        let rendered = output::render(cli.format, cli.action, &outcome.records, use_colors)?;
        println!("{rendered}");
    }

    let formatter = ConsoleFormatter::new(!cli.no_color && std::io::stderr().is_terminal());
    for error in &outcome.errors {
        eprintln!("{}", formatter.format_error(&error.term, &error.message));
    }
    Ok(())
}
