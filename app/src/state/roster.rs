use once_cell::sync::Lazy;

use crate::models::{Gender, Profile};

fn profile(
    id: &str,
    name: &str,
    age: u32,
    city: &str,
    bio: &str,
    cozy_evening: &str,
    cozy_things: &[&str],
    interests: &[&str],
    photos: &[&str],
    gender: Gender,
    interested_in: &[Gender],
) -> Profile {
    Profile {
        id: id.into(),
        name: name.into(),
        age,
        city: city.into(),
        bio: bio.into(),
        cozy_evening: cozy_evening.into(),
        cozy_things: cozy_things.iter().map(|s| s.to_string()).collect(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        photos: photos.iter().map(|s| s.to_string()).collect(),
        gender,
        interested_in: interested_in.to_vec(),
    }
}

/// Built-in discovery candidates. This demo has no user directory service;
/// these stand in for it.
static DEMO_ROSTER: Lazy<Vec<Profile>> = Lazy::new(|| {
    vec![
        profile(
            "user_1",
            "Elara",
            26,
            "Portland",
            "Looking for someone to share silence with comfortably.",
            "Rain against the window, a warm blanket, and a lo-fi playlist.",
            &["Oat milk lattes", "Old bookstores", "Oversized sweaters"],
            &["Reading", "Indie Folk", "Pottery", "Hiking"],
            &[
                "https://picsum.photos/400/600?random=1",
                "https://picsum.photos/400/600?random=11",
            ],
            Gender::Woman,
            &[Gender::Man, Gender::Woman],
        ),
        profile(
            "user_2",
            "Liam",
            29,
            "Seattle",
            "Software engineer by day, acoustic guitarist by night.",
            "Cooking a slow stew while listening to jazz vinyls.",
            &["Log cabins", "Wool socks", "Fresh bread"],
            &["Cooking", "Music", "Tech", "Camping"],
            &[
                "https://picsum.photos/400/600?random=2",
                "https://picsum.photos/400/600?random=22",
            ],
            Gender::Man,
            &[Gender::Woman],
        ),
        profile(
            "user_3",
            "Sofia",
            24,
            "Austin",
            "Plant mom and yoga enthusiast.",
            "Incense burning, chamomile tea, and a Ghibli movie.",
            &["Succulents", "Essential oils", "Soft lighting"],
            &["Yoga", "Anime", "Gardening", "Vegan Food"],
            &[
                "https://picsum.photos/400/600?random=3",
                "https://picsum.photos/400/600?random=33",
            ],
            Gender::Woman,
            &[Gender::Man, Gender::Woman, Gender::NonBinary],
        ),
        profile(
            "user_4",
            "Noah",
            28,
            "Denver",
            "Photographer chasing golden hours.",
            "Editing photos by the fireplace with a glass of red wine.",
            &["Film cameras", "Fireplaces", "Acoustic covers"],
            &["Photography", "Travel", "Coffee", "Art"],
            &[
                "https://picsum.photos/400/600?random=4",
                "https://picsum.photos/400/600?random=44",
            ],
            Gender::Man,
            &[Gender::Woman],
        ),
        profile(
            "user_5",
            "Alex",
            25,
            "Brooklyn",
            "Barista and aspiring writer.",
            "Writing poetry while it snows outside.",
            &["Typewriters", "Vinyl", "Rooftops"],
            &["Writing", "Poetry", "Coffee", "Cats"],
            &["https://picsum.photos/400/600?random=5"],
            Gender::NonBinary,
            &[Gender::Man, Gender::Woman, Gender::NonBinary],
        ),
    ]
});

pub fn demo_roster() -> Vec<Profile> {
    DEMO_ROSTER.clone()
}
