use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_MIN_AGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Woman,
    Man,
    NonBinary,
    Other,
}

/// A user profile. Field names serialize to the same JSON keys the session
/// file has always used, so persisted sessions stay readable across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub city: String,
    pub bio: String,
    /// "Perfect cozy evening looks like..."
    pub cozy_evening: String,
    /// Up to three things that make this person feel at home
    pub cozy_things: Vec<String>,
    pub interests: Vec<String>,
    /// Ordered; index 0 is the primary display photo
    pub photos: Vec<String>,
    pub gender: Gender,
    pub interested_in: Vec<Gender>,
}

impl Profile {
    /// Starting point for the onboarding wizard, mirroring the defaults the
    /// signup form opens with.
    pub fn blank() -> Self {
        Self {
            id: format!("user_{}", Uuid::new_v4()),
            name: String::new(),
            age: DEFAULT_MIN_AGE,
            city: String::new(),
            bio: String::new(),
            cozy_evening: String::new(),
            cozy_things: Vec::new(),
            interests: Vec::new(),
            photos: Vec::new(),
            gender: Gender::Woman,
            interested_in: vec![Gender::Man],
        }
    }

    /// First interest both profiles list, scanning in this profile's order.
    pub fn shared_interest<'a>(&'a self, other: &Profile) -> Option<&'a str> {
        self.interests
            .iter()
            .find(|i| other.interests.contains(i))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_interests(interests: &[&str]) -> Profile {
        Profile {
            interests: interests.iter().map(|s| s.to_string()).collect(),
            ..Profile::blank()
        }
    }

    #[test]
    fn shared_interest_scans_in_actor_order() {
        let a = profile_with_interests(&["Reading", "Hiking", "Pottery"]);
        let b = profile_with_interests(&["Pottery", "Hiking"]);
        assert_eq!(a.shared_interest(&b), Some("Hiking"));
    }

    #[test]
    fn shared_interest_none_when_disjoint() {
        let a = profile_with_interests(&["Reading"]);
        let b = profile_with_interests(&["Camping"]);
        assert_eq!(a.shared_interest(&b), None);
    }

    #[test]
    fn gender_serializes_kebab_case() {
        let json = serde_json::to_string(&Gender::NonBinary).unwrap();
        assert_eq!(json, "\"non-binary\"");
    }
}
