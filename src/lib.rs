pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::AppSettings;

pub use crate::adapters::{http::HostedTextGenerator, photos::StaticPhotoSource, store::FileStore};
pub use crate::core::assistant::SymptomChecker;
pub use crate::core::directory::{CityFilter, DoctorDirectory};
pub use crate::core::photos::PhotoResolver;
pub use crate::core::selection::{Comparison, SelectionSet, ToggleOutcome};
pub use crate::domain::model::{Availability, City, ConsultationMode, Doctor};
pub use crate::domain::roster::sample_roster;
pub use crate::utils::error::{AppError, Result};
