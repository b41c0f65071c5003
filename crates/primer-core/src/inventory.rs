//! Device inventory counter driven by unary and compound-assignment operators.

use crate::error::{PrimerError, Result};
use serde::Deserialize;

/// One change applied to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Adjustment {
    /// A single device handed out (`-= 1`).
    Deliver,
    /// A single device handed back (`+= 1`).
    Return,
    /// New devices arrived.
    Restock { count: i64 },
    /// Several devices handed out at once.
    Dispatch { count: i64 },
}

impl Adjustment {
    pub fn label(self) -> &'static str {
        match self {
            Adjustment::Deliver => "after delivery",
            Adjustment::Return => "after returned delivery",
            Adjustment::Restock { .. } => "after new devices arrived",
            Adjustment::Dispatch { .. } => "after devices delivered",
        }
    }

    /// The default day: one delivery, its return, five new devices, ten sent out.
    pub fn default_sequence() -> Vec<Adjustment> {
        vec![
            Adjustment::Deliver,
            Adjustment::Return,
            Adjustment::Restock { count: 5 },
            Adjustment::Dispatch { count: 10 },
        ]
    }
}

/// Running device count. The only mutable value in the lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    total: i64,
}

impl Inventory {
    pub fn new(start: i64) -> Self {
        Self { total: start }
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Applies `adjustment` and returns the new total.
    pub fn apply(&mut self, adjustment: Adjustment) -> Result<i64> {
        let next = match adjustment {
            Adjustment::Deliver => self.total.checked_sub(1),
            Adjustment::Return => self.total.checked_add(1),
            Adjustment::Restock { count } => self.total.checked_add(count),
            Adjustment::Dispatch { count } => self.total.checked_sub(count),
        };
        self.total = next.ok_or_else(|| PrimerError::overflow("the inventory total"))?;
        Ok(self.total)
    }
}
