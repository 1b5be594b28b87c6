//! CLI runtime configuration.
//!
//! Read from the environment (and `.env`) after arguments are parsed, and only for values the
//! command-line flags leave open. Flags take precedence over these values.

use anyhow::{bail, Context};
use zid::{CaseMode, ZidResult};

pub const DEFAULT_BITS_VAR: &str = "ZID_DEFAULT_BITS";
pub const CASE_MODE_VAR: &str = "ZID_CASE_MODE";

/// CLI configuration read from the environment.
#[derive(Clone, Debug)]
pub struct CliConfig {
    default_bits: usize,
    case_mode: CaseMode,
}

impl CliConfig {
    /// Create a new `CliConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`zid::ZidError::InvalidLength`] if `default_bits` is not a positive multiple of 8.
    pub fn new(default_bits: usize, case_mode: CaseMode) -> ZidResult<Self> {
        zid::check_bit_length(default_bits)?;

        Ok(Self {
            default_bits,
            case_mode,
        })
    }

    /// Build from raw environment values. `None` means the variable was unset.
    pub fn from_raw(bits: Option<String>, case_mode: Option<String>) -> anyhow::Result<Self> {
        let default_bits = match bits {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{DEFAULT_BITS_VAR} must be a number, got '{raw}'"))?,
            None => zid::DEFAULT_BITS,
        };

        let case_mode = match case_mode.as_deref().map(str::trim) {
            None | Some("strict") => CaseMode::Strict,
            Some("relaxed") => CaseMode::Relaxed,
            Some(other) => bail!("{CASE_MODE_VAR} must be 'strict' or 'relaxed', got '{other}'"),
        };

        Self::new(default_bits, case_mode)
            .with_context(|| format!("invalid {DEFAULT_BITS_VAR}"))
    }

    /// Build from `ZID_DEFAULT_BITS` and `ZID_CASE_MODE`. Call once, after `.env` is loaded.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_raw(
            std::env::var(DEFAULT_BITS_VAR).ok(),
            std::env::var(CASE_MODE_VAR).ok(),
        )
    }

    /// Bit length for `zid new` when `--bits` is not given.
    pub fn default_bits(&self) -> usize {
        self.default_bits
    }

    /// Case handling for `zid check` when `--relaxed` is not given.
    pub fn case_mode(&self) -> CaseMode {
        self.case_mode
    }
}
