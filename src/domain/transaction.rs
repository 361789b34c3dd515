use super::money::Money;
use crate::error::PosError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Canceled,
}

/// A terminal status: the only values `finalize` accepts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum FinalStatus {
    Completed,
    Canceled,
}

impl From<FinalStatus> for TransactionStatus {
    fn from(status: FinalStatus) -> Self {
        match status {
            FinalStatus::Completed => TransactionStatus::Completed,
            FinalStatus::Canceled => TransactionStatus::Canceled,
        }
    }
}

impl FromStr for FinalStatus {
    type Err = PosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(FinalStatus::Completed),
            "canceled" => Ok(FinalStatus::Canceled),
            other => Err(PosError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Canceled => "canceled",
        };
        f.write_str(s)
    }
}

/// One priced line. Name and unit price are snapshots taken at checkout.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLineItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
    pub is_member_price: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: TransactionStatus,
    pub total: Money,
    pub items: Vec<TransactionLineItem>,
}

impl Transaction {
    /// Opens a new pending transaction with a fresh id and the current time.
    pub fn open(items: Vec<TransactionLineItem>, total: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            status: TransactionStatus::Pending,
            total,
            items,
        }
    }

    /// Overwrites the status. Re-finalizing is allowed; items, total, id and
    /// creation time are never touched.
    pub fn finalize(&mut self, status: FinalStatus) {
        self.status = status.into();
    }
}
