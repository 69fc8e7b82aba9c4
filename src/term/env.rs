//! Environment overrides for styled output
//!
//! | Variable | Effect when set (and not `0`/`false`/`no`) |
//! |----------|--------------------------------------------|
//! | `UTILKIT_SGR` | Defaults to on; when off, style codes are not emitted on a terminal |
//! | `UTILKIT_FORCE_SGR` | Emit style codes even when not writing to a terminal |
//! | `UTILKIT_FORCE_PREFIX` | Emit prefix/suffix even when not writing to a terminal |
//! | `UTILKIT_IS_ERROR` | Send styled strings to stderr by default |
//!
//! Values are compared case-insensitively; an empty value counts as unset.

/// Gate for style codes on interactive terminals
pub const SGR_ENV: &str = "UTILKIT_SGR";
/// Forces style codes off-terminal
pub const FORCE_SGR_ENV: &str = "UTILKIT_FORCE_SGR";
/// Forces prefix and suffix off-terminal
pub const FORCE_PREFIX_ENV: &str = "UTILKIT_FORCE_PREFIX";
/// Routes output to stderr
pub const IS_ERROR_ENV: &str = "UTILKIT_IS_ERROR";

const DISABLED_VALUES: [&str; 3] = ["0", "false", "no"];

/// Flag defaults read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Whether style codes are emitted on interactive terminals
    pub sgr_enabled: bool,
    /// Default for `force_sgr`
    pub force_sgr: bool,
    /// Default for `force_prefix`
    pub force_prefix: bool,
    /// Default for `is_error`
    pub is_error: bool,
}

impl Default for EnvOverrides {
    fn default() -> Self {
        Self {
            sgr_enabled: true,
            force_sgr: false,
            force_prefix: false,
            is_error: false,
        }
    }
}

impl EnvOverrides {
    /// Read the overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the overrides through an arbitrary lookup function
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            sgr_enabled: flag(SGR_ENV).map_or(true, |value| !is_disabled(&value)),
            force_sgr: flag(FORCE_SGR_ENV).is_some_and(|value| !is_disabled(&value)),
            force_prefix: flag(FORCE_PREFIX_ENV).is_some_and(|value| !is_disabled(&value)),
            is_error: flag(IS_ERROR_ENV).is_some_and(|value| !is_disabled(&value)),
        }
    }
}

/// Whether `value` is one of `0`, `false`, `no` (any case)
pub fn is_disabled(value: &str) -> bool {
    let value = value.trim();
    DISABLED_VALUES
        .iter()
        .any(|disabled| disabled.eq_ignore_ascii_case(value))
}
