//! Caller-side composition of the calculators.
//!
//! The calculators in [`crate::age`], [`crate::zodiac`], [`crate::birthday`]
//! and [`crate::milestone`] trust their inputs. This is where a birth date
//! after the reference instant is turned away before any of them run.

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::age::{AgeDuration, compute_age};
use crate::birthday::{BirthdayProjection, next_birthday};
use crate::milestone::{Milestone, upcoming_milestones};
use crate::zodiac::{ZodiacSign, classify};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("birth date cannot be in the future ({birth} is after {reference})")]
    BirthInFuture {
        birth: NaiveDateTime,
        reference: NaiveDateTime,
    },
}

/// Everything derived from one (birth, reference) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeProfile {
    pub birth: NaiveDateTime,
    pub reference: NaiveDateTime,
    pub age: AgeDuration,
    pub zodiac: ZodiacSign,
    pub next_birthday: BirthdayProjection,
    pub milestones: Vec<Milestone>,
}

impl AgeProfile {
    /// Runs age, zodiac, birthday and milestone calculations in that order.
    pub fn compute(birth: NaiveDateTime, reference: NaiveDateTime) -> Result<Self, ProfileError> {
        if birth > reference {
            return Err(ProfileError::BirthInFuture { birth, reference });
        }

        let age = compute_age(birth, reference);
        let zodiac = classify(&birth);
        let next_birthday = next_birthday(birth, reference);
        let current_years = u32::try_from(age.years).unwrap_or(0);
        let milestones = upcoming_milestones(current_years, &next_birthday);

        debug!(
            %birth,
            %reference,
            years = age.years,
            sign = zodiac.name,
            days_until_birthday = next_birthday.days_until,
            "computed age profile"
        );

        Ok(Self {
            birth,
            reference,
            age,
            zodiac,
            next_birthday,
            milestones,
        })
    }
}
