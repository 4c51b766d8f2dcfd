//! # Value Objects
//!
//! Per-instance reducer configuration.
//!
//! ```json
//! { "addressType": "stake", "table": "balance_by_stake_address", "onDecodeError": "abort" }
//! ```
//!
//! The backend follows from the options: a `table` selects the relational
//! backend, otherwise commands are CRDT counters namespaced by `prefix`.

use serde::{Deserialize, Serialize};
use std::fmt;
use ur_01_address_codec::{AddressMode, DecodePolicy};

use super::errors::ConfigError;

/// PostgreSQL truncates identifiers past this length.
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Configuration of one reducer instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReducerConfig {
    #[serde(default)]
    pub address_type: AddressMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default)]
    pub on_decode_error: DecodePolicy,
}

impl ReducerConfig {
    pub fn payment() -> Self {
        Self {
            address_type: AddressMode::Payment,
            ..Default::default()
        }
    }

    pub fn stake() -> Self {
        Self {
            address_type: AddressMode::Stake,
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.on_decode_error = policy;
        self
    }

    /// Validate the options and resolve the backend they select.
    pub fn backend(&self) -> Result<Backend, ConfigError> {
        match (&self.prefix, &self.table) {
            (Some(_), Some(_)) => Err(ConfigError::PrefixAndTable),
            (_, Some(table)) => Ok(Backend::Relational {
                table: TableName::parse(table)?,
            }),
            (Some(prefix), None) if prefix.is_empty() => Err(ConfigError::EmptyPrefix),
            (prefix, None) => Ok(Backend::Crdt {
                prefix: prefix.clone(),
            }),
        }
    }
}

/// Command backend selected by a [`ReducerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Crdt { prefix: Option<String> },
    Relational { table: TableName },
}

/// A validated, optionally schema-qualified SQL table identifier.
///
/// Identifiers cannot be bound as statement parameters, so this is the
/// only place a configured name is allowed into SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidTable {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("empty"));
        }

        let segments: Vec<&str> = name.split('.').collect();
        if segments.len() > 2 {
            return Err(invalid("at most one schema qualifier is allowed"));
        }

        for segment in segments {
            if segment.is_empty() {
                return Err(invalid("empty identifier segment"));
            }
            if segment.len() > MAX_IDENTIFIER_LEN {
                return Err(invalid("identifier longer than 63 bytes"));
            }
            let mut chars = segment.chars();
            let first_ok = chars
                .next()
                .map(|c| c.is_ascii_alphabetic() || c == '_')
                .unwrap_or(false);
            if !first_ok {
                return Err(invalid("identifier must start with a letter or underscore"));
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid("identifier may only contain letters, digits and underscores"));
            }
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
