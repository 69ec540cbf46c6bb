use finboard_core::{
    DashboardService, FinanceSource, MockClientSource, MockFinanceSource, TransactionKind,
};

fn service() -> DashboardService<MockFinanceSource, MockClientSource> {
    DashboardService::new(
        MockFinanceSource::with_seed(7),
        MockClientSource::with_seed(15, 7),
    )
}

#[test]
fn summary_sums_match_the_underlying_transactions() {
    let service = service();
    let summary = service.financial_summary().unwrap();

    // the seeded finance source replays the same series on every call
    let transactions = MockFinanceSource::with_seed(7).transactions(100).unwrap();
    let income: f64 = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Income)
        .map(|tx| tx.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
        .map(|tx| tx.amount)
        .sum();

    assert_eq!(summary.total_income, income);
    assert_eq!(summary.total_expenses, expenses);
    assert_eq!(summary.net_income, income - expenses);
}

#[test]
fn change_figures_derive_from_monthly_history() {
    let service = service();
    let summary = service.financial_summary().unwrap();
    let monthly = MockFinanceSource::with_seed(7).monthly_financials().unwrap();

    let previous = &monthly[monthly.len() - 2];
    let current = &monthly[monthly.len() - 1];
    let expected = ((current.income - previous.income) / previous.income * 1000.0).round() / 10.0;
    assert_eq!(summary.income_change, expected);
}

#[test]
fn insight_passthroughs_keep_source_shapes() {
    let service = service();

    assert_eq!(service.recent_transactions(10).unwrap().len(), 10);
    assert_eq!(service.monthly_financials().unwrap().len(), 12);
    assert_eq!(service.cash_flow_projections().unwrap().len(), 6);

    let breakdown = service.expense_breakdown().unwrap();
    let total: f64 = breakdown.iter().map(|entry| entry.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn client_statistics_cover_the_full_set() {
    let service = service();
    let stats = service.client_statistics().unwrap();
    assert_eq!(stats.total_clients, 15);
    assert!(stats.active_clients <= 15);
    assert!(stats.total_revenue > 0.0);
}
