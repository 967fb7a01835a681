// src/generators/mod.rs
mod password;
mod strength;

pub use password::PasswordGenerator;
pub use strength::analyze_password_strength;
