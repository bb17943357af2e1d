pub mod controller;
pub mod providers;

pub use controller::{FetchController, Intent, Settlement, SettlementPolicy, ViewState};
pub use providers::{HttpCatalog, MovieCatalog};
