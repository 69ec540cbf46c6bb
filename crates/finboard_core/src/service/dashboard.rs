//! Dashboard insight service.
//!
//! # Responsibility
//! - Assemble the headline financial summary from transaction history.
//! - Expose insight series and client statistics for the dashboard cards.
//!
//! # Invariants
//! - The summary is a pure function of the fetched series; no figure is
//!   invented outside the record sources.

use crate::model::finance::{
    CategoryBreakdown, FinancialSummary, MonthlyFinancials, Transaction, TransactionKind,
};
use crate::query::{client_statistics, ClientStatistics};
use crate::source::{ClientSource, FinanceSource, SourceError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of ledger entries folded into the financial summary.
const SUMMARY_SAMPLE_SIZE: usize = 100;

/// Service error for dashboard use-cases.
#[derive(Debug)]
pub enum DashboardServiceError {
    Source(SourceError),
}

impl Display for DashboardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DashboardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
        }
    }
}

impl From<SourceError> for DashboardServiceError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

/// Dashboard facade over finance and client record sources.
pub struct DashboardService<F: FinanceSource, C: ClientSource> {
    finance: F,
    clients: C,
}

impl<F: FinanceSource, C: ClientSource> DashboardService<F, C> {
    /// Creates a service over the provided sources.
    pub fn new(finance: F, clients: C) -> Self {
        Self { finance, clients }
    }

    /// Computes headline income/expense/net figures.
    ///
    /// Change percentages come from the last two monthly entries rather
    /// than being synthesized, so the summary stays a pure fold over its
    /// inputs.
    pub fn financial_summary(&self) -> Result<FinancialSummary, DashboardServiceError> {
        let transactions = self.finance.transactions(SUMMARY_SAMPLE_SIZE)?;
        let monthly = self.finance.monthly_financials()?;

        let summary = summarize(&transactions, &monthly);
        debug!(
            "event=financial_summary module=service status=ok sample={}",
            transactions.len()
        );
        Ok(summary)
    }

    /// Most recent ledger entries for the activity card.
    pub fn recent_transactions(
        &self,
        limit: usize,
    ) -> Result<Vec<Transaction>, DashboardServiceError> {
        Ok(self.finance.transactions(limit)?)
    }

    /// Twelve trailing months of income/expense history.
    pub fn monthly_financials(&self) -> Result<Vec<MonthlyFinancials>, DashboardServiceError> {
        Ok(self.finance.monthly_financials()?)
    }

    /// Expense share per category.
    pub fn expense_breakdown(&self) -> Result<Vec<CategoryBreakdown>, DashboardServiceError> {
        Ok(self.finance.expense_breakdown()?)
    }

    /// Six leading months of projected income/expense.
    pub fn cash_flow_projections(
        &self,
    ) -> Result<Vec<MonthlyFinancials>, DashboardServiceError> {
        Ok(self.finance.cash_flow_projections()?)
    }

    /// Four-field client statistics for the overview card.
    pub fn client_statistics(&self) -> Result<ClientStatistics, DashboardServiceError> {
        let clients = self.clients.fetch_clients()?;
        Ok(client_statistics(&clients))
    }
}

/// Folds transactions and monthly history into the headline summary.
pub fn summarize(
    transactions: &[Transaction],
    monthly: &[MonthlyFinancials],
) -> FinancialSummary {
    let total_income: f64 = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Income)
        .map(|tx| tx.amount)
        .sum();
    let total_expenses: f64 = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
        .map(|tx| tx.amount)
        .sum();

    let (income_change, expense_change, net_change) = month_over_month(monthly);

    FinancialSummary {
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        income_change,
        expense_change,
        net_change,
    }
}

// Percentage change between the two most recent monthly entries; zero when
// the history is too short or the previous month divides to nonsense.
fn month_over_month(monthly: &[MonthlyFinancials]) -> (f64, f64, f64) {
    let [.., previous, current] = monthly else {
        return (0.0, 0.0, 0.0);
    };

    (
        percent_change(previous.income, current.income),
        percent_change(previous.expenses, current.expenses),
        percent_change(previous.profit, current.profit),
    )
}

fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    let change = (current - previous) / previous * 100.0;
    (change * 10.0).round() / 10.0
}
