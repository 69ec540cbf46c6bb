//! Mock finance record source.
//!
//! # Responsibility
//! - Synthesize ledger entries and insight series for the dashboard.
//!
//! # Invariants
//! - `profit == income - expenses` in every monthly entry.
//! - Expense breakdown percentages sum to exactly 100.
//! - Transactions date within the trailing 30 days.

use crate::model::finance::{
    CategoryBreakdown, MonthlyFinancials, Transaction, TransactionKind, TransactionStatus,
};
use crate::source::{FinanceSource, SourceResult};
use chrono::{Datelike, Days, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

const MONTH_LABELS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const INCOME_CATEGORIES: &[&str] = &[
    "Client Payment",
    "Consulting",
    "Contract Work",
    "Project Completion",
    "Retainer",
];
const EXPENSE_CATEGORIES: &[&str] = &[
    "Software",
    "Office Supplies",
    "Utilities",
    "Marketing",
    "Subscriptions",
    "Travel",
];
const BILLED_CLIENTS: &[&str] = &[
    "ABC Corp",
    "XYZ Inc",
    "Acme Ltd",
    "Tech Solutions",
    "Global Services",
];

// (category, typical share in percent) for the expense breakdown; the last
// entry absorbs whatever remains so the total lands on 100.
const BREAKDOWN_BASES: &[(&str, f64)] = &[
    ("Software", 25.0),
    ("Marketing", 20.0),
    ("Office", 15.0),
    ("Travel", 10.0),
    ("Utilities", 8.0),
    ("Other", 22.0),
];

const BREAKDOWN_TOTAL_AMOUNT: f64 = 5_000.0;

/// Finance source that regenerates its series per call.
///
/// Seeded construction gives reproducible output for tests.
pub struct MockFinanceSource {
    seed: Option<u64>,
}

impl MockFinanceSource {
    /// Creates an entropy-backed source.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Creates a deterministic source for tests and reproducible probes.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for MockFinanceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FinanceSource for MockFinanceSource {
    fn transactions(&self, count: usize) -> SourceResult<Vec<Transaction>> {
        let mut rng = self.rng();
        let today = Utc::now().date_naive();

        let entries = (0..count)
            .map(|_| {
                let kind = if rng.gen_bool(0.5) {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                };
                let is_income = kind == TransactionKind::Income;
                let pool = if is_income {
                    INCOME_CATEGORIES
                } else {
                    EXPENSE_CATEGORIES
                };
                let category = choose(&mut rng, pool);
                let date = today
                    .checked_sub_days(Days::new(rng.gen_range(0..30)))
                    .unwrap_or(today);
                let ceiling = if is_income { 5_000.0 } else { 1_000.0 };

                Transaction {
                    id: Builder::from_random_bytes(rng.gen()).into_uuid(),
                    date: date.to_string(),
                    description: category.clone(),
                    category,
                    amount: (rng.gen::<f64>() * ceiling * 100.0).round() / 100.0,
                    kind,
                    status: *[
                        TransactionStatus::Completed,
                        TransactionStatus::Pending,
                        TransactionStatus::Failed,
                    ]
                    .choose(&mut rng)
                    .unwrap_or(&TransactionStatus::Completed),
                    client: is_income.then(|| choose(&mut rng, BILLED_CLIENTS)),
                }
            })
            .collect();

        Ok(entries)
    }

    fn monthly_financials(&self) -> SourceResult<Vec<MonthlyFinancials>> {
        let mut rng = self.rng();
        let current_month = Utc::now().month0() as usize;

        // Trailing 12 months ending at the current one, with a gentle
        // seasonal wave on the income baseline.
        let series = (0..12)
            .map(|offset| {
                let month_index = (current_month + 1 + offset) % 12;
                let base_income = 10_000.0 + (offset as f64 * 0.5).sin() * 2_000.0;
                let income = (base_income * (1.0 + rng.gen::<f64>() * 0.2)).round();
                let expenses = (income * (0.5 + rng.gen::<f64>() * 0.2)).round();

                MonthlyFinancials {
                    month: MONTH_LABELS[month_index].to_string(),
                    income,
                    expenses,
                    profit: income - expenses,
                }
            })
            .collect();

        Ok(series)
    }

    fn expense_breakdown(&self) -> SourceResult<Vec<CategoryBreakdown>> {
        let mut rng = self.rng();
        let mut remaining = 100.0;
        let mut breakdown = Vec::with_capacity(BREAKDOWN_BASES.len());

        for (index, (category, base)) in BREAKDOWN_BASES.iter().enumerate() {
            let percentage = if index == BREAKDOWN_BASES.len() - 1 {
                remaining
            } else {
                let variance = base * 0.3;
                let jittered = base + rng.gen::<f64>() * variance * 2.0 - variance;
                jittered.round().clamp(1.0, remaining - 1.0)
            };

            breakdown.push(CategoryBreakdown {
                category: (*category).to_string(),
                percentage,
                amount: (percentage / 100.0 * BREAKDOWN_TOTAL_AMOUNT).round(),
            });
            remaining -= percentage;
        }

        Ok(breakdown)
    }

    fn cash_flow_projections(&self) -> SourceResult<Vec<MonthlyFinancials>> {
        let mut rng = self.rng();
        let current_month = Utc::now().month0() as usize;

        // Next 6 months with a 3% month-over-month growth trend and a small
        // variance band on both sides of the ledger.
        let series = (0..6)
            .map(|offset| {
                let month_index = (current_month + offset) % 12;
                let base_income = 12_000.0 * (1.0 + offset as f64 * 0.03);
                let income = (base_income * (1.0 + rng.gen::<f64>() * 0.1 - 0.05)).round();
                let expenses = (base_income * (0.6 + rng.gen::<f64>() * 0.1 - 0.05)).round();

                MonthlyFinancials {
                    month: MONTH_LABELS[month_index].to_string(),
                    income,
                    expenses,
                    profit: income - expenses,
                }
            })
            .collect();

        Ok(series)
    }
}

fn choose(rng: &mut StdRng, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}
