// src/animation/animator.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};

use super::sink::DisplaySink;
use super::state::RevealState;
use crate::models::{OptionsError, RevealOptions};

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("Display error: {0}")]
    Display(#[from] io::Error),

    #[error("Invalid reveal options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("Reveal was superseded by a newer one")]
    Superseded,

    #[error("Animation task failed: {0}")]
    Fault(String),
}

/// Completion signal of one reveal run.
///
/// Dropping the handle, or the future of [`RevealHandle::wait`], stops the
/// run: it writes nothing more to its sink.
#[derive(Debug)]
pub struct RevealHandle {
    task: JoinHandle<Result<(), RevealError>>,
    current_run: Arc<Mutex<u64>>,
    run: u64,
}

impl RevealHandle {
    /// Resolves once the sink shows the final password.
    pub async fn wait(mut self) -> Result<(), RevealError> {
        match (&mut self.task).await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(RevealError::Superseded),
            Err(e) => Err(RevealError::Fault(e.to_string())),
        }
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        // Retire the run under the sink lock so a write already in flight
        // on another worker is the last one.
        let mut current = self
            .current_run
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *current == self.run && !self.task.is_finished() {
            *current += 1;
            log::debug!("Reveal run {} dropped before finishing", self.run);
        }
        self.task.abort();
    }
}

/// Writes to the sink only while its run is the current one.
struct RunWriter {
    sink: Arc<dyn DisplaySink>,
    current_run: Arc<Mutex<u64>>,
    run: u64,
}

impl RunWriter {
    fn write(&self, text: &str) -> Result<(), RevealError> {
        let current = self
            .current_run
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *current != self.run {
            return Err(RevealError::Superseded);
        }
        self.sink.set_text(text)?;
        Ok(())
    }
}

/// Drives reveals into a display sink, one timer chain at a time.
///
/// Every run gets its own random source split off the animator's, so a
/// seeded animator replays the same frames.
pub struct RevealAnimator<R = StdRng> {
    rng: R,
    current_run: Arc<Mutex<u64>>,
    active: Option<AbortHandle>,
}

impl RevealAnimator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for RevealAnimator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RevealAnimator<R>
where
    R: Rng + SeedableRng + Send + 'static,
{
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            current_run: Arc::new(Mutex::new(0)),
            active: None,
        }
    }

    /// True while a reveal run is still writing to its sink.
    pub fn is_animating(&self) -> bool {
        self.active
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Start revealing `final_password` into `sink`.
    ///
    /// Must be called from within a tokio runtime. Any run still in progress
    /// is cancelled first and its handle resolves to [`RevealError::Superseded`].
    pub fn reveal(
        &mut self,
        final_password: &str,
        sink: Arc<dyn DisplaySink>,
        animation_alphabet: &str,
        options: RevealOptions,
    ) -> Result<RevealHandle, RevealError> {
        options.validate()?;

        let run = {
            let mut current = self
                .current_run
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *current += 1;
            *current
        };

        if let Some(previous) = self.active.take() {
            if !previous.is_finished() {
                log::debug!("Cancelling reveal in progress before starting run {}", run);
            }
            previous.abort();
        }

        let rng = R::from_rng(&mut self.rng).map_err(|e| RevealError::Fault(e.to_string()))?;
        let writer = RunWriter {
            sink,
            current_run: Arc::clone(&self.current_run),
            run,
        };

        let task = tokio::spawn(run_reveal(
            final_password.to_string(),
            animation_alphabet.chars().collect(),
            options,
            writer,
            rng,
        ));
        self.active = Some(task.abort_handle());

        Ok(RevealHandle {
            task,
            current_run: Arc::clone(&self.current_run),
            run,
        })
    }
}

async fn run_reveal<R: Rng>(
    password: String,
    alphabet: Vec<char>,
    options: RevealOptions,
    writer: RunWriter,
    mut rng: R,
) -> Result<(), RevealError> {
    let mut state = RevealState::new(&password, Instant::now());

    if !state.is_solved() {
        state.scramble(&alphabet, &mut rng);
        writer.write(&state.display())?;

        let period = options.update_interval;
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !state.is_solved() {
            ticker.tick().await;

            let now = Instant::now();
            let due = state.tick(now, options.reveal_time_per_char, &alphabet, &mut rng);
            writer.write(&state.display())?;

            if due {
                state.lock_current(now);
                writer.write(&state.display())?;
                ticker.reset();
            }
        }
    }

    writer.write(&password)?;
    log::debug!("Revealed {} characters", state.len());
    Ok(())
}
