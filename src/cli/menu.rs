// src/cli/menu.rs
use inquire::{InquireError, MultiSelect, Select, Text};
use std::sync::Arc;

use crate::animation::TerminalSink;
use crate::cli::handlers::reveal_on_terminal;
use crate::core::config::Config;
use crate::core::session::PasswordSession;
use crate::generators::analyze_password_strength;
use crate::models::{CharacterClass, CharacterClassSet, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

const REGENERATE: &str = "🔄  Regenerate password";
const CHANGE_LENGTH: &str = "📏  Change length";
const CHANGE_CLASSES: &str = "🔤  Choose character types";
const SHOW_STRENGTH: &str = "📊  Show strength";
const EXIT: &str = "🚪  Exit";

pub async fn run_cli_menu(config: &Config) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSREVEAL GENERATOR       ║");
    println!("╚══════════════════════════════════════╝");

    let sink = Arc::new(TerminalSink::stdout());
    let mut session = PasswordSession::new(
        sink.clone(),
        config.generation_options(),
        config.reveal_options(),
    )?;

    // First password on start
    reveal_on_terminal(&mut session, &sink).await?;

    loop {
        let options = vec![REGENERATE, CHANGE_LENGTH, CHANGE_CLASSES, SHOW_STRENGTH, EXIT];

        let selection = match Select::new("What would you like to do?", options).prompt() {
            Ok(selection) => selection,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match selection {
            REGENERATE => {
                reveal_on_terminal(&mut session, &sink).await?;
            }
            CHANGE_LENGTH => {
                let current = session.options().length.to_string();
                let help = format!("Between {} and {}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
                let input = Text::new("Password length:")
                    .with_default(&current)
                    .with_help_message(&help)
                    .prompt()?;

                match input.trim().parse::<usize>() {
                    Ok(length) => match session.set_length(length) {
                        Ok(()) => {
                            println!("✅ Length set to {}", length);
                            reveal_on_terminal(&mut session, &sink).await?;
                        }
                        Err(e) => println!("❌ {}", e),
                    },
                    Err(_) => println!("❌ Invalid number: {}", input.trim()),
                }
            }
            CHANGE_CLASSES => {
                let current = session.options().classes;
                let labels: Vec<&str> = CharacterClass::ALL.iter().map(|c| c.label()).collect();
                let defaults: Vec<usize> = CharacterClass::ALL
                    .iter()
                    .enumerate()
                    .filter(|(_, class)| current.contains(**class))
                    .map(|(i, _)| i)
                    .collect();

                let selected = MultiSelect::new("Character types:", labels)
                    .with_default(&defaults)
                    .prompt()?;

                let classes = CharacterClassSet::from_classes(
                    CharacterClass::ALL
                        .into_iter()
                        .filter(|class| selected.contains(&class.label())),
                );
                session.set_classes(classes);

                if classes.is_empty() {
                    println!("⚠️ No character types selected. Pick at least one to generate passwords.");
                }
                reveal_on_terminal(&mut session, &sink).await?;
            }
            SHOW_STRENGTH => match session.current_password() {
                Some(password) => {
                    println!("Strength: {}/100", analyze_password_strength(password));
                }
                None => println!("❗ No password generated yet."),
            },
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
