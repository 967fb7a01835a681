// src/animation/state.rs
use rand::Rng;
use std::time::Duration;
use tokio::time::Instant;

/// Drawn in place of a character when the alphabet is empty.
pub const PLACEHOLDER: char = '?';

pub fn random_char<R: Rng>(alphabet: &[char], rng: &mut R) -> char {
    if alphabet.is_empty() {
        return PLACEHOLDER;
    }
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Per-run animation state: the target, how many positions are locked,
/// the working display buffer and when the current position began shuffling.
#[derive(Debug, Clone)]
pub struct RevealState {
    target: Vec<char>,
    buffer: Vec<char>,
    solved: usize,
    started: Instant,
}

impl RevealState {
    pub fn new(password: &str, started: Instant) -> Self {
        let target: Vec<char> = password.chars().collect();
        let buffer = vec![PLACEHOLDER; target.len()];

        Self {
            target,
            buffer,
            solved: 0,
            started,
        }
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn solved_index(&self) -> usize {
        self.solved
    }

    pub fn is_solved(&self) -> bool {
        self.solved >= self.target.len()
    }

    pub fn display(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Fill every position with noise. Used for the first frame.
    pub fn scramble<R: Rng>(&mut self, alphabet: &[char], rng: &mut R) {
        for slot in self.buffer.iter_mut() {
            *slot = random_char(alphabet, rng);
        }
    }

    /// Recompute the whole buffer for one timer tick.
    ///
    /// Returns `true` once the current position has shuffled for at least
    /// `reveal_time`, in which case it already shows its final character.
    pub fn tick<R: Rng>(
        &mut self,
        now: Instant,
        reveal_time: Duration,
        alphabet: &[char],
        rng: &mut R,
    ) -> bool {
        let due = now.saturating_duration_since(self.started) >= reveal_time;

        for i in 0..self.buffer.len() {
            self.buffer[i] = if i < self.solved || (i == self.solved && due) {
                self.target[i]
            } else {
                random_char(alphabet, rng)
            };
        }

        due
    }

    /// Lock the current position and start the clock for the next one.
    pub fn lock_current(&mut self, now: Instant) {
        if self.is_solved() {
            return;
        }
        self.buffer[self.solved] = self.target[self.solved];
        self.solved += 1;
        self.started = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const NOISE: [char; 3] = ['x', 'y', 'z'];

    #[test]
    fn test_random_char_from_empty_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(random_char(&[], &mut rng), PLACEHOLDER);
    }

    #[test]
    fn test_random_char_stays_in_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(NOISE.contains(&random_char(&NOISE, &mut rng)));
        }
    }

    #[test]
    fn test_scramble_fills_every_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = RevealState::new("ABCD", Instant::now());
        assert_eq!(state.display(), "????");

        state.scramble(&NOISE, &mut rng);
        assert_eq!(state.display().chars().count(), 4);
        assert!(state.display().chars().all(|c| NOISE.contains(&c)));
    }

    #[test]
    fn test_tick_keeps_locked_prefix_and_shuffles_the_rest() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let start = Instant::now();
        let reveal_time = Duration::from_millis(100);
        let mut state = RevealState::new("ABCD", start);

        // Not yet due: nothing is final.
        assert!(!state.tick(start + Duration::from_millis(40), reveal_time, &NOISE, &mut rng));
        assert!(state.display().chars().all(|c| NOISE.contains(&c)));

        // Due exactly at the reveal time.
        let now = start + reveal_time;
        assert!(state.tick(now, reveal_time, &NOISE, &mut rng));
        let frame: Vec<char> = state.display().chars().collect();
        assert_eq!(frame[0], 'A');
        assert!(frame[1..].iter().all(|c| NOISE.contains(c)));

        state.lock_current(now);
        assert_eq!(state.solved_index(), 1);

        // The next position restarts its clock at the lock instant.
        assert!(!state.tick(now + Duration::from_millis(40), reveal_time, &NOISE, &mut rng));
        let frame: Vec<char> = state.display().chars().collect();
        assert_eq!(frame[0], 'A');
        assert!(frame[1..].iter().all(|c| NOISE.contains(c)));
    }

    #[test]
    fn test_lock_until_solved() {
        let now = Instant::now();
        let mut state = RevealState::new("hey", now);

        for expected in 1..=3 {
            state.lock_current(now);
            assert_eq!(state.solved_index(), expected);
        }
        assert!(state.is_solved());
        assert_eq!(state.display(), "hey");

        // Locking past the end is a no-op.
        state.lock_current(now);
        assert_eq!(state.solved_index(), 3);
    }

    #[test]
    fn test_empty_password_is_solved_from_the_start() {
        let state = RevealState::new("", Instant::now());
        assert!(state.is_solved());
        assert_eq!(state.len(), 0);
        assert_eq!(state.display(), "");
    }
}
