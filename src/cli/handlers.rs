// src/cli/handlers.rs
use std::sync::Arc;

use crate::animation::TerminalSink;
use crate::core::config::Config;
use crate::core::session::{PasswordSession, SessionError};
use crate::generators::{analyze_password_strength, PasswordGenerator};

// Handlers for CLI commands
pub fn handle_generate(config: &Config, count: usize) -> Result<Vec<String>, SessionError> {
    let options = config.generation_options();
    options.validate()?;

    let mut generator = PasswordGenerator::new();
    (0..count)
        .map(|_| {
            generator
                .generate_password(&options)
                .ok_or(SessionError::EmptyAlphabet)
        })
        .collect()
}

pub async fn handle_reveal(config: &Config) -> Result<(), SessionError> {
    let sink = Arc::new(TerminalSink::stdout());
    let mut session = PasswordSession::new(
        sink.clone(),
        config.generation_options(),
        config.reveal_options(),
    )?;

    if let Some(password) = reveal_on_terminal(&mut session, &sink).await? {
        println!("Strength: {}/100", analyze_password_strength(&password));
    }

    Ok(())
}

/// Run one reveal on the terminal line, keeping the cursor hidden meanwhile.
///
/// An empty selection is not an error here: the session already put the
/// message on screen, so `None` is returned.
pub async fn reveal_on_terminal(
    session: &mut PasswordSession,
    sink: &TerminalSink,
) -> Result<Option<String>, SessionError> {
    sink.begin()?;
    let result = session.generate_and_reveal().await;
    sink.finish()?;

    match result {
        Ok(password) => Ok(Some(password)),
        Err(SessionError::EmptyAlphabet) => {
            log::info!("Reveal skipped, no character types selected");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterClass, CharacterClassSet, DIGITS};

    #[test]
    fn test_generate_prints_requested_count() {
        let config = Config {
            default_password_length: 20,
            default_classes: CharacterClassSet::from_classes([CharacterClass::Digits]),
            ..Config::default()
        };

        let passwords = handle_generate(&config, 3).unwrap();
        assert_eq!(passwords.len(), 3);
        for password in passwords {
            assert_eq!(password.len(), 20);
            assert!(password.chars().all(|c| DIGITS.contains(c)));
        }
    }

    #[test]
    fn test_generate_without_classes_fails() {
        let config = Config {
            default_classes: CharacterClassSet::none(),
            ..Config::default()
        };
        assert!(matches!(
            handle_generate(&config, 1),
            Err(SessionError::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_generate_zero_count() {
        assert!(handle_generate(&Config::default(), 0).unwrap().is_empty());
    }
}
