pub mod assistant;
pub mod directory;
pub mod photos;
pub mod selection;

pub use crate::domain::model::{Availability, City, ConsultationMode, Doctor};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, PhotoSource, TextGenerator};
pub use crate::utils::error::Result;
