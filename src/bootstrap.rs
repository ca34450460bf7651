//! Command-line front end for the `wadscale` binary.
//!
//! ```text
//! wadscale parse <decimal>...                 # coin decimals -> wei
//! wadscale parse-non-negative <decimal>...
//! wadscale parse-positive <decimal>...
//! wadscale format <wei>...                    # wei -> "1.5 Coin"
//! ```
//!
//! All arguments of one invocation are validated together and every invalid
//! one is reported.

use anyhow::{bail, Context};
use dotenvy::dotenv;
use tracing::info;

use crate::config::{DisplayConfig, DisplayConfigBuilder};
use crate::types::amount::FixedPointAmount;
use crate::wad::{format_with, BatchValidator, SignPolicy};

/// Environment variable overriding [`DisplayConfig::max_fraction_digits`]
pub const FRACTION_DIGITS_VAR: &str = "WADSCALE_FRACTION_DIGITS";

/// Subcommands understood by [`run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Parse coin decimals into wei under a sign policy
    Parse(SignPolicy),
    /// Format wei integers for display
    Format,
}

impl Command {
    /// Look up a subcommand by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "parse" => Some(Command::Parse(SignPolicy::Unconstrained)),
            "parse-non-negative" => Some(Command::Parse(SignPolicy::NonNegative)),
            "parse-positive" => Some(Command::Parse(SignPolicy::StrictlyPositive)),
            "format" => Some(Command::Format),
            _ => None,
        }
    }
}

/// Main entry point for the application.
///
/// Returns the lines to print, one per input argument.
pub fn run(args: impl IntoIterator<Item = String>) -> anyhow::Result<Vec<String>> {
    // Load environment variables
    dotenv().ok();
    let config = display_config_from_env()?;

    let mut args = args.into_iter();
    let Some(name) = args.next() else {
        bail!("missing command: expected parse, parse-non-negative, parse-positive or format");
    };
    let command = Command::from_name(&name).with_context(|| format!("unknown command {name:?}"))?;
    let inputs: Vec<String> = args.collect();
    if inputs.is_empty() {
        bail!("{name}: no amounts given");
    }

    info!(command = %name, count = inputs.len(), "Converting amounts");
    execute(command, &inputs, &config)
}

/// Run one command over its inputs with an explicit display configuration.
pub fn execute(
    command: Command,
    inputs: &[String],
    config: &DisplayConfig,
) -> anyhow::Result<Vec<String>> {
    let mut batch = BatchValidator::new();
    let lines: Vec<Option<String>> = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let field = format!("argument {} ({input:?})", i + 1);
            match command {
                Command::Parse(policy) => batch
                    .parse(field, input, policy)
                    .map(|amount| amount.as_bigint().to_string()),
                Command::Format => batch
                    .check(field, FixedPointAmount::from_wei_str(input))
                    .map(|amount| format_with(&amount, config)),
            }
        })
        .collect();
    batch.finish()?;

    Ok(lines.into_iter().flatten().collect())
}

fn display_config_from_env() -> anyhow::Result<DisplayConfig> {
    display_config_from(|key| dotenvy::var(key).ok())
}

/// Build the display configuration from a variable lookup.
///
/// Unset variables keep their defaults; a set but unparsable value is an error.
pub fn display_config_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<DisplayConfig> {
    let mut builder = DisplayConfigBuilder::new();
    if let Some(raw) = lookup(FRACTION_DIGITS_VAR) {
        let digits = raw.trim().parse::<u32>().with_context(|| {
            format!("{FRACTION_DIGITS_VAR} must be a non-negative integer, got {raw:?}")
        })?;
        builder = builder.max_fraction_digits(digits);
    }
    Ok(builder.build())
}
