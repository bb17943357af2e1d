//! Movie catalog view: a fetch controller that reconciles recommendation and
//! search requests into one view state, and a pure renderer for that state.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod view;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::Movie;
pub use services::{FetchController, HttpCatalog, MovieCatalog, Settlement, ViewState};
pub use view::{render, Page};
