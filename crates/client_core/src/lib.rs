//! Amphibian listing client: remote repository, UI state and the view model
//! that drives fetch attempts.

pub mod config;
pub mod controller;
pub mod error;
pub mod repository;
pub mod state;

pub use config::{load_settings, ClientSettings};
pub use controller::AmphibiansViewModel;
pub use error::FetchError;
pub use repository::{AmphibiansRepository, NetworkAmphibiansRepository};
pub use state::UiState;
