// src/core/session.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::sync::Arc;
use thiserror::Error;

use crate::animation::{DisplaySink, RevealAnimator};
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClassSet, OptionsError, PasswordGenerationOptions, RevealOptions};

/// Shown on the display when no character class is selected.
pub const EMPTY_SELECTION_MESSAGE: &str = "Error: select at least one character type";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No character types selected")]
    EmptyAlphabet,

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("Display error: {0}")]
    Display(#[from] io::Error),
}

/// Holds `is_animating` up until dropped, so a reveal future that is
/// cancelled mid-run still lowers it.
struct AnimatingFlag<'a>(&'a mut bool);

impl<'a> AnimatingFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for AnimatingFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Ties the generator, the animator and one display together and keeps
/// track of the last generated password.
pub struct PasswordSession<R = StdRng> {
    generator: PasswordGenerator<R>,
    animator: RevealAnimator<R>,
    sink: Arc<dyn DisplaySink>,
    options: PasswordGenerationOptions,
    reveal_options: RevealOptions,
    current_password: Option<String>,
    is_animating: bool,
}

impl PasswordSession<StdRng> {
    pub fn new(
        sink: Arc<dyn DisplaySink>,
        options: PasswordGenerationOptions,
        reveal_options: RevealOptions,
    ) -> Result<Self, SessionError> {
        Self::with_parts(
            PasswordGenerator::new(),
            RevealAnimator::new(),
            sink,
            options,
            reveal_options,
        )
    }
}

impl<R> PasswordSession<R>
where
    R: Rng + SeedableRng + Send + 'static,
{
    pub fn with_parts(
        generator: PasswordGenerator<R>,
        animator: RevealAnimator<R>,
        sink: Arc<dyn DisplaySink>,
        options: PasswordGenerationOptions,
        reveal_options: RevealOptions,
    ) -> Result<Self, SessionError> {
        options.validate()?;
        reveal_options.validate()?;

        Ok(Self {
            generator,
            animator,
            sink,
            options,
            reveal_options,
            current_password: None,
            is_animating: false,
        })
    }

    pub fn options(&self) -> &PasswordGenerationOptions {
        &self.options
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), SessionError> {
        let options = PasswordGenerationOptions {
            length,
            ..self.options.clone()
        };
        options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn set_classes(&mut self, classes: CharacterClassSet) {
        self.options.classes = classes;
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// The last password, once its reveal has finished.
    pub fn current_password(&self) -> Option<&str> {
        if self.is_animating {
            return None;
        }
        self.current_password.as_deref()
    }

    /// Generate a password with the current options and reveal it.
    ///
    /// Animation failures are not fatal: the password is written to the
    /// display as is and still returned. Dropping the returned future
    /// stops the reveal where it is; the password stays available through
    /// [`PasswordSession::current_password`].
    pub async fn generate_and_reveal(&mut self) -> Result<String, SessionError> {
        let Some(password) = self.generator.generate_password(&self.options) else {
            self.current_password = None;
            self.sink.set_text(EMPTY_SELECTION_MESSAGE)?;
            return Err(SessionError::EmptyAlphabet);
        };

        let alphabet = self.options.classes.animation_alphabet();
        self.current_password = Some(password.clone());

        let outcome = {
            let _animating = AnimatingFlag::raise(&mut self.is_animating);
            match self.animator.reveal(
                &password,
                Arc::clone(&self.sink),
                &alphabet,
                self.reveal_options,
            ) {
                Ok(handle) => handle.wait().await,
                Err(e) => Err(e),
            }
        };

        if let Err(e) = outcome {
            log::error!("Error during password animation: {}", e);
            if let Err(e) = self.sink.set_text(&password) {
                log::error!("Failed to display generated password: {}", e);
            }
        }

        Ok(password)
    }
}
