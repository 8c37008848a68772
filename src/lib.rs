pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod menu;
pub mod output;

pub use domain::{Error, Ledger, Money, Operation, Outcome};
pub use engine::Engine;
