//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rollcall",
    bin_name = "rollcall",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2713} Registration desk in your terminal",
    long_about = "Rollcall validates event sign-ups — name, email, phone, \
                  birth date, terms — and keeps an append-only roster of \
                  every accepted registration.",
    after_help = "EXAMPLES:\n\
        \x20 rollcall submit --name 'Anna Virtanen' --email anna@example.com \\\n\
        \x20     --phone +358401234567 --birthdate 1990-05-01 --accept-terms\n\
        \x20 rollcall check --email anna@example.com\n\
        \x20 rollcall session\n\
        \x20 rollcall completions bash > /usr/share/bash-completion/completions/rollcall",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate one registration and, if it passes, print the roster row.
    #[command(
        visible_alias = "s",
        about = "Submit a registration",
        after_help = "EXAMPLES:\n\
            \x20 rollcall submit --name 'Anna Virtanen' --email anna@example.com \\\n\
            \x20     --phone +358401234567 --birthdate 1990-05-01 --accept-terms"
    )]
    Submit(SubmitArgs),

    /// Validate individual fields without recording anything.
    #[command(
        visible_alias = "c",
        about = "Check fields without submitting",
        after_help = "EXAMPLES:\n\
            \x20 rollcall check --email anna@example.com\n\
            \x20 rollcall check --phone 12345 --birthdate 2020-01-01"
    )]
    Check(CheckArgs),

    /// Interactive session: prompt for registrations, build up a roster.
    #[command(
        about = "Run an interactive registration session",
        after_help = "Prompts for each field in turn. Submit an empty name \
                      to end the session and print the roster."
    )]
    Session,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rollcall completions bash > ~/.local/share/bash-completion/completions/rollcall\n\
            \x20 rollcall completions zsh  > ~/.zfunc/_rollcall\n\
            \x20 rollcall completions fish > ~/.config/fish/completions/rollcall.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Rollcall configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 rollcall config get session.timestamp_format\n\
            \x20 rollcall config set output.no_color true\n\
            \x20 rollcall config list"
    )]
    Config(ConfigCommands),
}

// ── submit ────────────────────────────────────────────────────────────────────

/// Arguments for `rollcall submit`.
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Full name: at least two parts, two letters each.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Full name")]
    pub name: String,

    /// Email address.
    #[arg(short = 'e', long = "email", value_name = "EMAIL", help = "Email address")]
    pub email: String,

    /// Phone number: 7-15 digits, optional leading +.
    #[arg(short = 'p', long = "phone", value_name = "PHONE", help = "Phone number")]
    pub phone: String,

    /// Birth date in YYYY-MM-DD form.
    #[arg(
        short = 'b',
        long = "birthdate",
        value_name = "DATE",
        help = "Birth date (YYYY-MM-DD)"
    )]
    pub birthdate: String,

    /// Accept the terms and conditions.
    #[arg(long = "accept-terms", help = "Accept the terms and conditions")]
    pub accept_terms: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `rollcall check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Full name to check.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Full name")]
    pub name: Option<String>,

    /// Email address to check.
    #[arg(short = 'e', long = "email", value_name = "EMAIL", help = "Email address")]
    pub email: Option<String>,

    /// Phone number to check.
    #[arg(short = 'p', long = "phone", value_name = "PHONE", help = "Phone number")]
    pub phone: Option<String>,

    /// Birth date to check.
    #[arg(
        short = 'b',
        long = "birthdate",
        value_name = "DATE",
        help = "Birth date (YYYY-MM-DD)"
    )]
    pub birthdate: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rollcall completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `rollcall config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `session.timestamp_format`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_submit_command() {
        let cli = Cli::parse_from([
            "rollcall",
            "submit",
            "--name",
            "Anna Virtanen",
            "--email",
            "anna@example.com",
            "--phone",
            "+358401234567",
            "--birthdate",
            "1990-05-01",
            "--accept-terms",
        ]);
        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.name, "Anna Virtanen");
                assert!(args.accept_terms);
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn submit_terms_default_to_unaccepted() {
        let cli = Cli::parse_from([
            "rollcall", "submit", "-n", "Anna Virtanen", "-e", "a@b.com", "-p", "1234567", "-b",
            "1990-05-01",
        ]);
        match cli.command {
            Commands::Submit(args) => assert!(!args.accept_terms),
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn check_accepts_any_subset_of_fields() {
        let cli = Cli::parse_from(["rollcall", "check", "--email", "a@b.com"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.email.as_deref(), Some("a@b.com"));
                assert!(args.name.is_none());
            }
            other => panic!("expected Check, got {other:?}"),
        }
    }

    #[test]
    fn submit_alias() {
        let cli = Cli::parse_from([
            "rollcall", "s", "-n", "Anna Virtanen", "-e", "a@b.com", "-p", "1234567", "-b",
            "1990-05-01",
        ]);
        assert!(matches!(cli.command, Commands::Submit(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["rollcall", "--quiet", "--verbose", "session"]);
        assert!(result.is_err());
    }
}
