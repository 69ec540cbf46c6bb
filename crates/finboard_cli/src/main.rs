//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `finboard_core` linkage.
//! - Run the list pipeline once over a seeded source so output stays
//!   deterministic for quick local sanity checks.

use finboard_core::{ClientListQuery, ClientService, MockClientSource};

const PROBE_SEED: u64 = 2026;
const PROBE_CLIENT_COUNT: usize = 20;

fn main() {
    println!("finboard_core version={}", finboard_core::core_version());

    let service = ClientService::new(MockClientSource::with_seed(
        PROBE_CLIENT_COUNT,
        PROBE_SEED,
    ));

    match service.list_clients(&ClientListQuery::default()) {
        Ok(listing) => {
            let stats = listing.stats;
            println!(
                "clients total={} active={} revenue={:.0} outstanding={:.0}",
                stats.total_clients,
                stats.active_clients,
                stats.total_revenue,
                stats.outstanding_balance
            );
            for client in listing.items.iter().take(5) {
                println!(
                    "  {} | {} | {:.0}",
                    client.name,
                    client.company_name.as_deref().unwrap_or("-"),
                    client.total_revenue
                );
            }
        }
        Err(err) => {
            eprintln!("client list pipeline failed: {err}");
            std::process::exit(1);
        }
    }
}
