//! # Relational Backend
//!
//! Two statements per non-empty block, keys and amounts always bound:
//!
//! ```sql
//! INSERT INTO <table> (address, balance)
//!   SELECT * FROM unnest($1::text[], $2::numeric[])
//!   ON CONFLICT (address) DO UPDATE SET balance = <table>.balance + EXCLUDED.balance;
//! DELETE FROM <table> WHERE address = ANY($1::text[]) AND balance = 0;
//! ```
//!
//! The table holds `address text primary key, balance numeric`. The delete
//! keeps no row at a zero balance after a block, whether it reached zero
//! in this block or was upserted with a zero delta.

use shared_types::{Command, SqlParam};

use crate::domain::{BalanceDeltas, TableName};
use crate::ports::CommandEmitter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalEmitter {
    table: TableName,
}

impl RelationalEmitter {
    pub fn new(table: TableName) -> Self {
        Self { table }
    }

    pub fn upsert_sql(&self) -> String {
        format!(
            "INSERT INTO {table} (address, balance) \
             SELECT * FROM unnest($1::text[], $2::numeric[]) \
             ON CONFLICT (address) DO UPDATE SET balance = {table}.balance + EXCLUDED.balance",
            table = self.table
        )
    }

    pub fn prune_sql(&self) -> String {
        format!(
            "DELETE FROM {table} WHERE address = ANY($1::text[]) AND balance = 0",
            table = self.table
        )
    }
}

impl CommandEmitter for RelationalEmitter {
    fn emit(&self, deltas: &BalanceDeltas) -> Vec<Command> {
        if deltas.is_empty() {
            return Vec::new();
        }

        let (keys, amounts): (Vec<String>, Vec<i128>) = deltas
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), *value))
            .unzip();

        vec![
            Command::execute_sql(
                self.upsert_sql(),
                vec![
                    SqlParam::TextArray(keys.clone()),
                    SqlParam::NumericArray(amounts),
                ],
            ),
            Command::execute_sql(self.prune_sql(), vec![SqlParam::TextArray(keys)]),
        ]
    }

    fn backend_name(&self) -> &'static str {
        "relational"
    }
}
