//! Mock client record source.
//!
//! # Responsibility
//! - Synthesize a plausible client record set on every fetch.
//!
//! # Invariants
//! - Every synthesized record passes `Client::validate()`.
//! - `outstanding_balance` never exceeds 30% of `total_revenue`.
//! - A seeded source returns the identical record set on every call, so
//!   ID-based lookup stays coherent across fetches.

use crate::model::client::{
    Address, Client, ClientId, ClientStatus, Contact, Project, ProjectStatus,
};
use crate::source::{ClientSource, SourceResult};
use chrono::{Days, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Education",
    "Finance",
    "Marketing",
    "E-commerce",
    "Manufacturing",
    "Retail",
];
const CONTACT_ROLES: &[&str] = &[
    "CEO",
    "CTO",
    "Marketing Director",
    "Project Manager",
    "Finance Manager",
    "HR Director",
];
const TAG_POOL: &[&str] = &[
    "VIP",
    "Recurring",
    "Referral",
    "Potential Growth",
    "Enterprise",
    "Startup",
    "International",
];
const PAYMENT_TERMS: &[&str] = &["Net 15", "Net 30", "Net 45", "Net 60"];

/// Earliest `date_added` the generator emits.
static DATE_RANGE_START: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid range start"));

/// Client source that regenerates its record set per call.
///
/// With a seed the output is fully deterministic; without one each fetch
/// draws fresh entropy, mirroring the regenerate-on-read behavior of the
/// upstream mock API.
pub struct MockClientSource {
    count: usize,
    seed: Option<u64>,
}

impl MockClientSource {
    /// Creates an entropy-backed source yielding `count` records per fetch.
    pub fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    /// Creates a deterministic source for tests and reproducible probes.
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed: Some(seed),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn generate(&self) -> SourceResult<Vec<Client>> {
        let mut rng = self.rng();
        let today = Utc::now().date_naive();
        let mut clients = Vec::with_capacity(self.count);

        for index in 0..self.count {
            let client = generate_client(&mut rng, index, today);
            client.validate()?;
            clients.push(client);
        }

        Ok(clients)
    }
}

impl ClientSource for MockClientSource {
    fn fetch_clients(&self) -> SourceResult<Vec<Client>> {
        self.generate()
    }

    fn fetch_client(&self, id: ClientId) -> SourceResult<Option<Client>> {
        let clients = self.generate()?;
        Ok(clients.into_iter().find(|client| client.id == id))
    }
}

fn generate_client(rng: &mut StdRng, index: usize, today: NaiveDate) -> Client {
    let ordinal = index + 1;

    // Revenue lands on a hundred boundary; outstanding stays within 30%.
    let base_revenue = 10_000.0 + rng.gen_range(0..90_000) as f64;
    let total_revenue = (base_revenue / 100.0).round() * 100.0;
    let outstanding_balance = (rng.gen::<f64>() * 0.3 * total_revenue).round();

    let status = weighted_status(rng);
    let date_added = random_date(rng, *DATE_RANGE_START, today);

    let contact_count = rng.gen_range(1..=3);
    let contacts = (0..contact_count)
        .map(|slot| generate_contact(rng, index, slot))
        .collect();

    let project_count = rng.gen_range(1..=4);
    let projects = (0..project_count)
        .map(|slot| generate_project(rng, slot, today))
        .collect();

    let mut tags: Vec<String> = Vec::new();
    for _ in 0..rng.gen_range(0..4) {
        let tag = choose(rng, TAG_POOL);
        if !tags.iter().any(|existing| existing == &tag) {
            tags.push(tag);
        }
    }

    Client {
        id: random_uuid(rng),
        name: format!("Client {ordinal}"),
        company_name: rng
            .gen_bool(0.7)
            .then(|| format!("Company {ordinal}")),
        email: format!("client{ordinal}@example.com"),
        phone: rng.gen_bool(0.8).then(|| random_phone(rng)),
        address: rng.gen_bool(0.7).then(|| Address {
            street: Some(format!("{} Main St", rng.gen_range(1000..10_000))),
            city: Some(format!("City {ordinal}")),
            state: Some(format!("State {}", index % 50 + 1)),
            zip: Some(format!("{}", rng.gen_range(10_000..100_000))),
            country: Some("United States".to_string()),
        }),
        website: rng
            .gen_bool(0.6)
            .then(|| format!("https://company{ordinal}.com")),
        industry: rng.gen_bool(0.8).then(|| choose(rng, INDUSTRIES)),
        notes: rng.gen_bool(0.4).then(|| {
            format!(
                "Some notes about client {ordinal}. This client has specific \
                 preferences and requirements."
            )
        }),
        status,
        date_added: date_added.to_string(),
        contacts,
        projects,
        tags,
        total_revenue,
        outstanding_balance,
        payment_terms: rng.gen_bool(0.7).then(|| choose(rng, PAYMENT_TERMS)),
    }
}

fn generate_contact(rng: &mut StdRng, client_index: usize, slot: usize) -> Contact {
    Contact {
        id: random_uuid(rng),
        name: format!("Contact {}", slot + 1),
        role: choose(rng, CONTACT_ROLES),
        email: format!("contact{}@company{client_index}.com", slot + 1),
        phone: rng.gen_bool(0.7).then(|| random_phone(rng)),
    }
}

fn generate_project(rng: &mut StdRng, slot: usize, today: NaiveDate) -> Project {
    let start_date = random_date(rng, *DATE_RANGE_START, today);
    let completed = rng.gen_bool(0.6);

    Project {
        id: random_uuid(rng),
        name: format!("Project {}", slot + 1),
        status: *[
            ProjectStatus::Active,
            ProjectStatus::Completed,
            ProjectStatus::OnHold,
        ]
        .choose(rng)
        .unwrap_or(&ProjectStatus::Active),
        start_date: start_date.to_string(),
        end_date: completed.then(|| random_date(rng, start_date, today).to_string()),
        value: (rng.gen::<f64>() * 20_000.0).round() + 5_000.0,
    }
}

// 60% active, 20% inactive, 20% prospect.
fn weighted_status(rng: &mut StdRng) -> ClientStatus {
    if rng.gen::<f64>() < 0.6 {
        ClientStatus::Active
    } else if rng.gen::<f64>() < 0.8 {
        ClientStatus::Inactive
    } else {
        ClientStatus::Prospect
    }
}

fn random_date(rng: &mut StdRng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span_days = (end - start).num_days().max(0) as u64;
    start
        .checked_add_days(Days::new(rng.gen_range(0..=span_days)))
        .unwrap_or(start)
}

fn random_phone(rng: &mut StdRng) -> String {
    format!(
        "({}) {}-{}",
        rng.gen_range(100..1000),
        rng.gen_range(100..1000),
        rng.gen_range(1000..10_000)
    )
}

// Drawn from the source RNG so seeded sources stay deterministic; plain
// `Uuid::new_v4()` would pull from OS entropy.
fn random_uuid(rng: &mut StdRng) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

fn choose(rng: &mut StdRng, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}
