use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Supported cities for the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Dehradun,
    Haldwani,
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            City::Dehradun => write!(f, "Dehradun"),
            City::Haldwani => write!(f, "Haldwani"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Online,
    Offline,
    Busy,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Online => write!(f, "Online"),
            Availability::Offline => write!(f, "Offline"),
            Availability::Busy => write!(f, "Busy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsultationMode {
    Video,
    Phone,
    InPerson,
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationMode::Video => write!(f, "Video"),
            ConsultationMode::Phone => write!(f, "Phone"),
            ConsultationMode::InPerson => write!(f, "In-Person"),
        }
    }
}

/// A doctor record from the static roster. `photo_url` stays `None` until the
/// photo resolver has run for this doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub city: City,
    pub experience_years: u32,
    pub rating: f64,
    pub languages: Vec<String>,
    pub availability: Availability,
    pub consultation_modes: Vec<ConsultationMode>,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// One resolved photo URL plus the moment it was resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoCacheEntry {
    pub url: String,
    pub timestamp: DateTime<Utc>,
}

impl PhotoCacheEntry {
    pub const TTL_DAYS: i64 = 7;

    pub fn new(url: String, timestamp: DateTime<Utc>) -> Self {
        Self { url, timestamp }
    }

    /// Fresh strictly inside the 7-day window; exactly 7 days old counts as
    /// expired.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp) < Duration::days(Self::TTL_DAYS)
    }
}

/// Serialized shape of the persisted photo cache: one mapping with unique
/// normalized keys.
pub type PhotoCache = HashMap<String, PhotoCacheEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the symptom-checker transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_fresh_inside_window() {
        let now = Utc::now();
        let entry = PhotoCacheEntry::new("https://example.com/a.jpg".into(), now);
        assert!(entry.is_fresh(now + Duration::days(6)));
        assert!(entry.is_fresh(now + Duration::days(7) - Duration::seconds(1)));
    }

    #[test]
    fn entry_expired_at_exact_boundary() {
        let now = Utc::now();
        let entry = PhotoCacheEntry::new("https://example.com/a.jpg".into(), now);
        assert!(!entry.is_fresh(now + Duration::days(7)));
        assert!(!entry.is_fresh(now + Duration::days(30)));
    }
}
