// src/models.rs
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+";

/// Alphabet used for the shuffle effect when no class is selected.
pub const DEFAULT_ANIMATION_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

// Bounds enforced on user input (flags, prompts, env). The generator itself takes any length.
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Unknown character class: {0}")]
    UnknownClass(String),

    #[error("Password length must be between 4 and 100, got {0}")]
    LengthOutOfRange(usize),

    #[error("Update interval must be greater than zero")]
    ZeroUpdateInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Classes in the order their alphabets are concatenated.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase letters (A-Z)",
            CharacterClass::Lowercase => "Lowercase letters (a-z)",
            CharacterClass::Digits => "Numbers (0-9)",
            CharacterClass::Symbols => "Symbols (!@#$...)",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "upper"),
            CharacterClass::Lowercase => write!(f, "lower"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

impl FromStr for CharacterClass {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "digits" | "numbers" => Ok(CharacterClass::Digits),
            "symbols" | "signs" => Ok(CharacterClass::Symbols),
            other => Err(OptionsError::UnknownClass(other.to_string())),
        }
    }
}

/// A selection of zero or more character classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClassSet {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClassSet {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_classes<I: IntoIterator<Item = CharacterClass>>(classes: I) -> Self {
        let mut set = Self::none();
        for class in classes {
            set.insert(class);
        }
        set
    }

    pub fn insert(&mut self, class: CharacterClass) {
        *self.flag_mut(class) = true;
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn is_empty(&self) -> bool {
        !CharacterClass::ALL.iter().any(|c| self.contains(*c))
    }

    pub fn classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Concatenated alphabet of the enabled classes, in fixed class order.
    pub fn alphabet(&self) -> String {
        self.classes().into_iter().map(CharacterClass::alphabet).collect()
    }

    /// Alphabet for the shuffle effect. Never empty.
    pub fn animation_alphabet(&self) -> String {
        if self.is_empty() {
            DEFAULT_ANIMATION_ALPHABET.to_string()
        } else {
            self.alphabet()
        }
    }

    fn flag_mut(&mut self, class: CharacterClass) -> &mut bool {
        match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Digits => &mut self.digits,
            CharacterClass::Symbols => &mut self.symbols,
        }
    }
}

impl fmt::Display for CharacterClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.classes().iter().map(ToString::to_string).collect();
        write!(f, "{}", names.join(","))
    }
}

impl FromStr for CharacterClassSet {
    type Err = OptionsError;

    /// Parses a comma separated list such as `upper,lower,digits`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let classes = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<CharacterClass>, _>>()?;
        Ok(Self::from_classes(classes))
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub classes: CharacterClassSet,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            classes: CharacterClassSet::all(),
        }
    }
}

impl PasswordGenerationOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        validate_length(self.length)
    }
}

pub fn validate_length(length: usize) -> Result<(), OptionsError> {
    if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(OptionsError::LengthOutOfRange(length))
    }
}

/// Timing of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOptions {
    /// How long each position shuffles before it locks.
    pub reveal_time_per_char: Duration,
    /// Period of the shuffle timer.
    pub update_interval: Duration,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            reveal_time_per_char: Duration::from_millis(100),
            update_interval: Duration::from_millis(40),
        }
    }
}

impl RevealOptions {
    pub fn from_millis(reveal_time_per_char: u64, update_interval: u64) -> Self {
        Self {
            reveal_time_per_char: Duration::from_millis(reveal_time_per_char),
            update_interval: Duration::from_millis(update_interval),
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.update_interval.is_zero() {
            return Err(OptionsError::ZeroUpdateInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_follows_fixed_class_order() {
        let set = CharacterClassSet::from_classes([CharacterClass::Symbols, CharacterClass::Uppercase]);
        assert_eq!(set.alphabet(), format!("{}{}", UPPERCASE, SYMBOLS));

        let all = CharacterClassSet::all().alphabet();
        assert_eq!(all, format!("{}{}{}{}", UPPERCASE, LOWERCASE, DIGITS, SYMBOLS));
    }

    #[test]
    fn test_empty_set_has_empty_alphabet_but_animates() {
        let set = CharacterClassSet::none();
        assert!(set.is_empty());
        assert_eq!(set.alphabet(), "");
        assert_eq!(set.animation_alphabet(), DEFAULT_ANIMATION_ALPHABET);
    }

    #[test]
    fn test_parse_class_list() {
        let set: CharacterClassSet = "Upper, digits,signs".parse().unwrap();
        assert!(set.uppercase);
        assert!(!set.lowercase);
        assert!(set.digits);
        assert!(set.symbols);
        assert_eq!(set.to_string(), "upper,digits,symbols");

        let empty: CharacterClassSet = "".parse().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_unknown_class_is_rejected() {
        let err = "lower,emoji".parse::<CharacterClassSet>().unwrap_err();
        assert_eq!(err, OptionsError::UnknownClass("emoji".to_string()));
    }

    #[test]
    fn test_length_bounds() {
        assert!(validate_length(MIN_PASSWORD_LENGTH).is_ok());
        assert!(validate_length(MAX_PASSWORD_LENGTH).is_ok());
        assert_eq!(validate_length(3), Err(OptionsError::LengthOutOfRange(3)));
        assert_eq!(validate_length(101), Err(OptionsError::LengthOutOfRange(101)));
    }

    #[test]
    fn test_reveal_options() {
        let defaults = RevealOptions::default();
        assert_eq!(defaults.reveal_time_per_char, Duration::from_millis(100));
        assert_eq!(defaults.update_interval, Duration::from_millis(40));
        assert!(RevealOptions::from_millis(0, 1).validate().is_ok());
        assert_eq!(
            RevealOptions::from_millis(100, 0).validate(),
            Err(OptionsError::ZeroUpdateInterval)
        );
    }
}
