//! # Storage Commands
//!
//! The values reducers hand to the storage collaborator. Commands are
//! produced fresh per reduction and never executed here.
//!
//! ## Wire Shape
//!
//! ```text
//! { "command": "PNCounter",  "key": "...", "value": "-1000000" }
//! { "command": "ExecuteSQL", "sql": "...", "params": [ { "type": "TextArray", "values": [..] } ] }
//! ```
//!
//! Counter values are decimal strings so no consumer truncates them to a
//! fixed-width integer. Parsing accepts plain JSON integers as well.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::entities::Point;

/// Signed balance change for one key within one block reduction.
pub type Delta = i128;

/// A single storage mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Increment (or decrement, when negative) a convergent counter.
    #[serde(rename = "PNCounter")]
    PnCounter {
        key: String,
        #[serde(with = "decimal")]
        value: Delta,
    },
    /// A parameterised SQL statement. Literals are always bound, never
    /// spliced into `sql`.
    #[serde(rename = "ExecuteSQL")]
    ExecuteSql {
        sql: String,
        #[serde(default)]
        params: Vec<SqlParam>,
    },
}

impl Command {
    /// Build a counter command, namespacing the key under `prefix` when set.
    pub fn pn_counter(prefix: Option<&str>, key: &str, value: Delta) -> Command {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.to_string(),
        };

        Command::PnCounter { key, value }
    }

    pub fn execute_sql(sql: impl Into<String>, params: Vec<SqlParam>) -> Command {
        Command::ExecuteSql {
            sql: sql.into(),
            params,
        }
    }

    /// Parse a command from its JSON form.
    pub fn from_json(value: &serde_json::Value) -> Result<Command, serde_json::Error> {
        Command::deserialize(value)
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of these variants cannot fail: all keys are strings.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// A bound statement parameter. Positions are 1-based in `sql` (`$1`, `$2`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values")]
pub enum SqlParam {
    /// Bound as `text[]`.
    TextArray(Vec<String>),
    /// Bound as `numeric[]`; serialized as decimal strings.
    NumericArray(#[serde_as(as = "Vec<DisplayFromStr>")] Vec<Delta>),
}

/// Everything a reduce stage sends downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum StorageEvent {
    /// Opens the storage transaction for one block.
    BlockStarting(Point),
    Command(Command),
    /// Commits the storage transaction opened by the matching `BlockStarting`.
    BlockFinished(Point),
    /// The follower rewound to `Point`; no commands accompany it.
    Reset(Point),
}

impl StorageEvent {
    pub fn command(&self) -> Option<&Command> {
        match self {
            StorageEvent::Command(c) => Some(c),
            _ => None,
        }
    }
}

/// Serde glue for `Delta` as a decimal string.
mod decimal {
    use super::Delta;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &Delta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Delta, D::Error> {
        deserializer.deserialize_any(DeltaVisitor)
    }

    struct DeltaVisitor;

    impl<'de> Visitor<'de> for DeltaVisitor {
        type Value = Delta;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer or a stringified integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Delta, E> {
            Ok(Delta::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Delta, E> {
            Ok(Delta::from(v))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<Delta, E> {
            Ok(v)
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Delta, E> {
            Delta::try_from(v).map_err(|_| E::custom("integer out of range"))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Delta, E> {
            v.trim()
                .parse::<Delta>()
                .map_err(|_| E::custom(format!("failed to parse stringified integer {:?}", v)))
        }
    }
}
