//! Financial transaction and insight records.
//!
//! # Responsibility
//! - Define the transaction-side shapes consumed by the dashboard service.
//!
//! # Invariants
//! - `MonthlyFinancials::profit` always equals `income - expenses`.
//! - `CategoryBreakdown` percentages across one breakdown sum to 100.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

/// Single ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    /// Serialized as `type` to match the external schema naming.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    /// Paying client name, income entries only.
    pub client: Option<String>,
}

/// One month of income/expense history or projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFinancials {
    /// Three-letter month label, e.g. `"Jan"`.
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// Share of expenses attributed to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_income: f64,
    /// Month-over-month change percentages derived from monthly history.
    pub income_change: f64,
    pub expense_change: f64,
    pub net_change: f64,
}
