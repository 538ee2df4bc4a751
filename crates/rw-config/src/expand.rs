//! Environment expansion for `rw.toml` path values.

use std::borrow::Cow;
use std::env;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` in the value of TOML key `field`.
///
/// Values without `${` are returned as-is, so a lone `$` in a path survives.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Name of a variable that is not set.
struct Unset(String);

fn lookup(var: &str) -> Result<Option<String>, Unset> {
    env::var(var).map(Some).map_err(|_| Unset(var.to_owned()))
}
