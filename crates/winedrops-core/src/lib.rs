//! winedrops-core library.
//!
//! Read-only query core for the winedrops order ledger: ranked best-seller
//! aggregation with substring search, plus trivial catalog reads. Every
//! operation returns the uniform [`Envelope`] shape consumed by the thin
//! presentation layer.

pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod query;

pub use config::{QueryConfig, StatsConfig, load_config};
pub use envelope::{Envelope, EnvelopeError};
pub use error::StatsError;
pub use query::best_sellers::WineStat;
pub use query::ranking::Ranking;
pub use query::{
    BestSellerOptions, get_best_selling_wines, get_products, get_qualifying_orders, get_wines,
};
