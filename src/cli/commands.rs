// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print passwords without the reveal animation
    Generate {
        /// Number of passwords to print
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Generate one password and reveal it with the shuffle animation
    Reveal,

    /// Interactive menu
    Menu,
}
