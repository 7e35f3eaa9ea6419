//! Non-interactive login.
//!
//! Drives the same dialog the TUI uses: the password and the CAPTCHA
//! response are read from stdin, one line each, after the challenge is
//! printed.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use edugate_core::api::HttpAuthClient;
use edugate_core::config::Config;
use edugate_core::dialog::{Category, LoginDialog, LoginSuccess};
use edugate_core::events::{EventBus, EventSubscriber};
use edugate_core::storage::FileStore;

pub async fn run(config: &Config, category: Category, identifier: &str) -> Result<()> {
    let client = HttpAuthClient::from_config(config)?;
    let store = FileStore::new(config.effective_storage_path());
    let events = EventBus::new();
    let mut subscriber = events.subscribe();

    let mut dialog = LoginDialog::new(store, events);
    dialog.open();
    dialog.select_category(category);
    dialog.set_identifier(identifier);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    prompt("Password: ")?;
    let password = read_line(&mut input).context("read password")?;
    dialog.set_password(password);

    println!("CAPTCHA: {}", dialog.captcha());
    prompt("Enter CAPTCHA: ")?;
    let response = read_line(&mut input).context("read CAPTCHA")?;
    dialog.set_captcha_response(response);
    drop(input);

    tracing::info!(url = client.login_url(), ?category, "cli login");
    let success = dialog.submit(&client).await?;

    match success {
        LoginSuccess::Student(session) => {
            println!("Logged in as {} (student)", session.display_name());
            println!(
                "Session saved to {}",
                dialog.store().path().display()
            );
        }
        LoginSuccess::FacultyPortal { user } => {
            println!(
                "Logged in as {} (teacher)",
                user.name().unwrap_or_else(|| identifier.to_string())
            );
        }
        LoginSuccess::Welcome { message, .. } => println!("{message}"),
    }
    print_events(&mut subscriber);

    Ok(())
}

/// Writes a prompt to stderr so stdout carries only results.
fn prompt(text: &str) -> Result<()> {
    let mut err = io::stderr();
    write!(err, "{text}")?;
    err.flush()?;
    Ok(())
}

/// Reads one line without its line terminator. EOF yields an empty string.
fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

fn print_events(subscriber: &mut EventSubscriber) {
    while let Ok(event) = subscriber.try_recv() {
        println!("Event: {}", event.name());
    }
}
