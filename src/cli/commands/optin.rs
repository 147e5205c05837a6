//! Opt-in command implementation.

use crate::config::EventConfig;
use crate::error::Result;
use crate::model::OptIn;
use crate::repo::OptInRepository;
use crate::validate;
use serde::Serialize;
use std::path::PathBuf;

/// Output for optin.
#[derive(Serialize)]
struct OptinOutput {
    email: String,
    event: String,
    consent: bool,
}

/// Execute the optin command.
///
/// Running the command IS the explicit consent action; the address is
/// syntax-checked before anything is stored.
pub fn execute(
    email: &str,
    db_path: Option<&PathBuf>,
    config: &EventConfig,
    json: bool,
) -> Result<()> {
    let store = super::open_store(db_path)?;

    let email = validate::check_email(email)?;
    let optin = OptIn::new(email, config.event.clone());

    OptInRepository::new(&store).add(&optin)?;

    if crate::is_silent() {
        println!("{}", optin.email);
        return Ok(());
    }

    if json {
        let output = OptinOutput {
            email: optin.email,
            event: optin.event,
            consent: optin.consent,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Saved — thank you!");
    }

    Ok(())
}
