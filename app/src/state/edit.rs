use serde::Deserialize;

use crate::constants::{DEFAULT_DISPLAY_NAME, DEFAULT_MIN_AGE, MAX_COZY_THINGS, MAX_PHOTOS};
use crate::models::{Gender, Profile};

/// One field mutation against an open draft. Tagged so the intent API can
/// carry it as `{"field": "toggleInterest", "value": "Pottery"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EditField {
    Name(String),
    /// `null` models a cleared age input; commit coerces it back to a
    /// valid default.
    Age(Option<u32>),
    City(String),
    Bio(String),
    CozyEvening(String),
    Gender(Gender),
    InterestedIn(Vec<Gender>),
    ToggleCozyThing(String),
    ToggleInterest(String),
    AddPhoto(String),
    RemovePhoto(usize),
    MovePhoto { from: usize, to: usize },
    ShiftPhoto { index: usize, direction: ShiftDirection },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    Left,
    Right,
}

/// Draft/commit protocol over a profile. `begin` snapshots the committed
/// profile; mutations only ever touch the snapshot; `commit` normalizes and
/// yields the replacement profile as a whole. The committed profile is never
/// mutated field-by-field outside a session.
#[derive(Debug, Clone)]
pub struct EditSession {
    draft: Profile,
    age: Option<u32>,
}

impl EditSession {
    pub fn begin(profile: &Profile) -> Self {
        Self {
            age: Some(profile.age),
            draft: profile.clone(),
        }
    }

    /// Read-only view of the draft for the presentation layer. The stored
    /// age field holds the last committed value while `age` is cleared.
    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    pub fn apply(&mut self, field: EditField) {
        match field {
            EditField::Name(v) => self.draft.name = v,
            EditField::Age(v) => self.age = v,
            EditField::City(v) => self.draft.city = v,
            EditField::Bio(v) => self.draft.bio = v,
            EditField::CozyEvening(v) => self.draft.cozy_evening = v,
            EditField::Gender(v) => self.draft.gender = v,
            EditField::InterestedIn(v) => self.draft.interested_in = v,
            EditField::ToggleCozyThing(v) => self.toggle_cozy_thing(v),
            EditField::ToggleInterest(v) => self.toggle_interest(v),
            EditField::AddPhoto(v) => self.add_photo(v),
            EditField::RemovePhoto(i) => self.remove_photo(i),
            EditField::MovePhoto { from, to } => self.move_photo(from, to),
            EditField::ShiftPhoto { index, direction } => self.shift_photo(index, direction),
        }
    }

    /// Toggling off is always allowed; toggling on past the cap of 3 is a
    /// silent no-op.
    pub fn toggle_cozy_thing(&mut self, thing: String) {
        if let Some(pos) = self.draft.cozy_things.iter().position(|t| *t == thing) {
            self.draft.cozy_things.remove(pos);
        } else if self.draft.cozy_things.len() < MAX_COZY_THINGS {
            self.draft.cozy_things.push(thing);
        }
    }

    pub fn toggle_interest(&mut self, interest: String) {
        if let Some(pos) = self.draft.interests.iter().position(|i| *i == interest) {
            self.draft.interests.remove(pos);
        } else {
            self.draft.interests.push(interest);
        }
    }

    /// Appends below the photo cap, no-op at it.
    pub fn add_photo(&mut self, photo: String) {
        if self.draft.photos.len() < MAX_PHOTOS {
            self.draft.photos.push(photo);
        }
    }

    /// Deletes and compacts; later photos shift down one slot.
    pub fn remove_photo(&mut self, index: usize) {
        if index < self.draft.photos.len() {
            self.draft.photos.remove(index);
        }
    }

    /// Stable splice: the photo at `from` is reinserted at `to`, shifting the
    /// ones in between. Not a swap.
    pub fn move_photo(&mut self, from: usize, to: usize) {
        let photos = &mut self.draft.photos;
        if from == to || from >= photos.len() {
            return;
        }
        let moved = photos.remove(from);
        let to = to.min(photos.len());
        photos.insert(to, moved);
    }

    /// Legacy neighbor swap kept for keyboard-style "move left/right by one"
    /// controls.
    pub fn shift_photo(&mut self, index: usize, direction: ShiftDirection) {
        let photos = &mut self.draft.photos;
        match direction {
            ShiftDirection::Left if index > 0 && index < photos.len() => {
                photos.swap(index, index - 1);
            }
            ShiftDirection::Right if index + 1 < photos.len() => {
                photos.swap(index, index + 1);
            }
            _ => {}
        }
    }

    /// Normalizes and yields the profile that replaces the committed one:
    /// name is trimmed (default word when empty), a cleared or zero age is
    /// coerced to the minimum default.
    pub fn commit(mut self) -> Profile {
        let trimmed = self.draft.name.trim();
        self.draft.name = if trimmed.is_empty() {
            DEFAULT_DISPLAY_NAME.to_string()
        } else {
            trimmed.to_string()
        };
        self.draft.age = match self.age {
            Some(age) if age > 0 => age,
            _ => DEFAULT_MIN_AGE,
        };
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> Profile {
        Profile {
            id: "user_test".into(),
            name: "Elara".into(),
            age: 26,
            city: "Portland".into(),
            bio: "bio".into(),
            cozy_evening: "rain".into(),
            cozy_things: vec!["Blankets".into(), "Tea".into(), "Candles".into()],
            interests: vec!["Reading".into()],
            photos: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            gender: Gender::Woman,
            interested_in: vec![Gender::Man, Gender::Woman],
        }
    }

    #[test]
    fn commit_without_mutations_is_identity_modulo_normalization() {
        let profile = base_profile();
        let committed = EditSession::begin(&profile).commit();
        assert_eq!(committed, profile);
    }

    #[test]
    fn mutations_do_not_leak_before_commit() {
        let profile = base_profile();
        let mut session = EditSession::begin(&profile);
        session.apply(EditField::Name("Someone Else".into()));
        assert_eq!(profile.name, "Elara");
        assert_eq!(session.draft().name, "Someone Else");
    }

    #[test]
    fn commit_trims_name_and_defaults_when_empty() {
        let profile = base_profile();

        let mut session = EditSession::begin(&profile);
        session.apply(EditField::Name("  Elara  ".into()));
        assert_eq!(session.commit().name, "Elara");

        let mut session = EditSession::begin(&profile);
        session.apply(EditField::Name("   ".into()));
        assert_eq!(session.commit().name, "User");
    }

    #[test]
    fn commit_coerces_cleared_or_zero_age() {
        let profile = base_profile();

        let mut session = EditSession::begin(&profile);
        session.apply(EditField::Age(None));
        assert_eq!(session.commit().age, 18);

        let mut session = EditSession::begin(&profile);
        session.apply(EditField::Age(Some(0)));
        assert_eq!(session.commit().age, 18);

        let mut session = EditSession::begin(&profile);
        session.apply(EditField::Age(Some(31)));
        assert_eq!(session.commit().age, 31);
    }

    #[test]
    fn fourth_cozy_thing_is_a_silent_no_op() {
        let profile = base_profile();
        let mut session = EditSession::begin(&profile);

        session.toggle_cozy_thing("Rain".into());
        assert_eq!(session.draft().cozy_things.len(), 3);
        assert!(!session.draft().cozy_things.contains(&"Rain".to_string()));

        // Freeing a slot first makes room for the new item.
        session.toggle_cozy_thing("Tea".into());
        session.toggle_cozy_thing("Rain".into());
        let things = &session.draft().cozy_things;
        assert_eq!(things.len(), 3);
        assert!(things.contains(&"Rain".to_string()));
        assert!(!things.contains(&"Tea".to_string()));
    }

    #[test]
    fn interests_are_uncapped() {
        let profile = base_profile();
        let mut session = EditSession::begin(&profile);
        for i in 0..10 {
            session.toggle_interest(format!("interest_{i}"));
        }
        assert_eq!(session.draft().interests.len(), 11);
    }

    #[test]
    fn move_photo_is_a_splice_not_a_swap() {
        let profile = base_profile(); // photos a,b,c,d
        let mut session = EditSession::begin(&profile);
        session.move_photo(0, 2);
        assert_eq!(session.draft().photos, ["b", "c", "a", "d"]);
    }

    #[test]
    fn remove_photo_compacts() {
        let mut profile = base_profile();
        profile.photos = vec!["a".into(), "b".into(), "c".into()];
        let mut session = EditSession::begin(&profile);
        session.remove_photo(1);
        assert_eq!(session.draft().photos, ["a", "c"]);

        // Out of range is ignored.
        session.remove_photo(7);
        assert_eq!(session.draft().photos, ["a", "c"]);
    }

    #[test]
    fn shift_photo_swaps_neighbors_only() {
        let profile = base_profile(); // a,b,c,d
        let mut session = EditSession::begin(&profile);
        session.shift_photo(1, ShiftDirection::Left);
        assert_eq!(session.draft().photos, ["b", "a", "c", "d"]);
        session.shift_photo(0, ShiftDirection::Left); // edge, no-op
        assert_eq!(session.draft().photos, ["b", "a", "c", "d"]);
        session.shift_photo(3, ShiftDirection::Right); // edge, no-op
        assert_eq!(session.draft().photos, ["b", "a", "c", "d"]);
    }

    #[test]
    fn photo_cap_is_six() {
        let mut profile = base_profile();
        profile.photos.clear();
        let mut session = EditSession::begin(&profile);
        for i in 0..8 {
            session.add_photo(format!("photo_{i}"));
        }
        assert_eq!(session.draft().photos.len(), 6);
    }
}
