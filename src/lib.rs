//! Age, zodiac and birthday arithmetic over local wall-clock instants.
//!
//! The calculators ([`age::compute_age`], [`zodiac::classify`],
//! [`birthday::next_birthday`], [`milestone::upcoming_milestones`]) are pure
//! and assume `birth <= reference`. [`profile::AgeProfile::compute`] checks
//! that and runs them in order for callers that want everything at once.
//!
//! ```
//! use agecounter::instant::parse_instant;
//! use agecounter::profile::AgeProfile;
//!
//! let birth = parse_instant("2000-06-15T08:00").unwrap();
//! let reference = parse_instant("2024-06-20T12:00").unwrap();
//! let profile = AgeProfile::compute(birth, reference).unwrap();
//!
//! assert_eq!(profile.age.years, 24);
//! assert_eq!(profile.zodiac.name, "Gemini");
//! assert_eq!(profile.next_birthday.next_age, 25);
//! ```

pub mod age;
pub mod birthday;
pub mod config;
pub mod instant;
pub mod milestone;
pub mod output;
pub mod prefs;
pub mod profile;
pub mod share;
pub mod svg;
pub mod watch;
pub mod zodiac;

pub use age::{AgeDuration, compute_age};
pub use birthday::{BirthdayProjection, next_birthday};
pub use milestone::{Milestone, upcoming_milestones};
pub use profile::{AgeProfile, ProfileError};
pub use zodiac::{Element, ZodiacSign, classify};
