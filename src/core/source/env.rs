//! Process environment source.

use std::env::VarError;

use super::SecretSource;
use crate::core::domain::SecretValue;
use crate::error::SecretError;

/// Reads secrets from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SecretSource for ProcessEnv {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, name: &str) -> std::result::Result<Option<SecretValue>, SecretError> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(SecretValue::new(value))),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(SecretError::SourceIo {
                source_name: self.name().to_string(),
                reason: format!("{} is not valid unicode", name),
            }),
        }
    }
}
