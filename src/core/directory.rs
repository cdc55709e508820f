use crate::core::photos::PhotoResolver;
use crate::domain::model::{City, Doctor};
use crate::domain::ports::{KeyValueStore, PhotoSource};
use futures_util::future::join_all;
use std::fmt;
use std::str::FromStr;

/// City filter applied to the roster before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    City(City),
}

impl CityFilter {
    pub fn matches(&self, doctor: &Doctor) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::City(city) => doctor.city == *city,
        }
    }
}

impl fmt::Display for CityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityFilter::All => write!(f, "All"),
            CityFilter::City(city) => write!(f, "{}", city),
        }
    }
}

impl FromStr for CityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(CityFilter::All),
            "dehradun" => Ok(CityFilter::City(City::Dehradun)),
            "haldwani" => Ok(CityFilter::City(City::Haldwani)),
            other => Err(format!(
                "Unknown city '{}' (expected All, Dehradun or Haldwani)",
                other
            )),
        }
    }
}

/// The doctor roster plus its filtered views. Filtering is a pure predicate
/// and never touches the selection set.
#[derive(Debug, Clone, Default)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn find(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn filtered(&self, filter: CityFilter) -> Vec<&Doctor> {
        self.doctors.iter().filter(|d| filter.matches(d)).collect()
    }

    /// Resolve photos for the whole roster concurrently and populate each
    /// doctor's `photo_url`. The roster stays usable while this runs; callers
    /// swap in the refreshed view once every resolution has landed.
    pub async fn resolve_photos<S, P>(&mut self, resolver: &PhotoResolver<S, P>)
    where
        S: KeyValueStore,
        P: PhotoSource,
    {
        let urls = join_all(self.doctors.iter().map(|doctor| {
            resolver.resolve(&doctor.name, &doctor.specialization, doctor.city)
        }))
        .await;

        for (doctor, url) in self.doctors.iter_mut().zip(urls) {
            doctor.photo_url = Some(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::photos::StaticPhotoSource;
    use crate::adapters::store::FileStore;
    use crate::domain::roster::sample_roster;
    use tempfile::TempDir;

    #[test]
    fn haldwani_filter_yields_the_expected_doctors() {
        let directory = DoctorDirectory::new(sample_roster());

        let names: Vec<_> = directory
            .filtered(CityFilter::City(City::Haldwani))
            .iter()
            .map(|d| d.name.clone())
            .collect();

        assert_eq!(
            names,
            vec!["Dr. Manoj Joshi", "Dr. Dinesh Pandey", "Dr. Rajesh Kumar"]
        );
    }

    #[test]
    fn all_filter_keeps_the_whole_roster() {
        let directory = DoctorDirectory::new(sample_roster());
        assert_eq!(directory.filtered(CityFilter::All).len(), 6);
    }

    #[test]
    fn city_filter_parses_case_insensitively() {
        assert_eq!("all".parse::<CityFilter>().unwrap(), CityFilter::All);
        assert_eq!(
            "HALDWANI".parse::<CityFilter>().unwrap(),
            CityFilter::City(City::Haldwani)
        );
        assert!("Nainital".parse::<CityFilter>().is_err());
    }

    #[tokio::test]
    async fn resolve_photos_populates_every_doctor() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_str().unwrap().to_string());
        let resolver = PhotoResolver::new(store, StaticPhotoSource::new());

        let mut directory = DoctorDirectory::new(sample_roster());
        assert!(directory.doctors().iter().all(|d| d.photo_url.is_none()));

        directory.resolve_photos(&resolver).await;

        for doctor in directory.doctors() {
            let url = doctor.photo_url.as_deref().unwrap();
            assert!(url.starts_with("https://"));
        }
    }
}
