//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `contactbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use contactbook_core::{ContactBookConfig, ContactBookSession};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("contactbook_core ping={}", contactbook_core::ping());
    println!("contactbook_core version={}", contactbook_core::core_version());

    // Optional first argument: JSON config, e.g. '{"groups":["Family","Work"]}'.
    let config = match std::env::args().nth(1) {
        Some(json) => match ContactBookConfig::from_json_str(&json) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("contactbook config error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => ContactBookConfig::default(),
    };

    match ContactBookSession::from_config(&config) {
        Ok(session) => {
            println!("contactbook groups={}", session.groups().join(","));
            println!("contactbook contacts={}", session.visible_contacts().len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("contactbook session error: {err}");
            ExitCode::FAILURE
        }
    }
}
