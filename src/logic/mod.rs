//! Tournament business logic: the tournament store and the registration ledger.

mod ledger;
mod store;

pub use ledger::RegistrationLedger;
pub use store::{ListFilter, TournamentStore};
