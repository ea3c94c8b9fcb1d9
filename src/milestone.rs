//! Upcoming round-number ages.

use serde::Serialize;

use crate::birthday::BirthdayProjection;

pub const MILESTONE_AGES: [u32; 11] = [18, 21, 25, 30, 40, 50, 60, 70, 80, 90, 100];
const MAX_UPCOMING: usize = 3;
const DAYS_PER_YEAR: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub age: u32,
    pub years_until: u32,
    pub days_until: u32,
}

/// Up to three milestone ages above `current_age_years`, ascending.
///
/// Day counts past the next birthday use flat 365-day years.
pub fn upcoming_milestones(
    current_age_years: u32,
    projection: &BirthdayProjection,
) -> Vec<Milestone> {
    MILESTONE_AGES
        .iter()
        .copied()
        .filter(|&age| age > current_age_years)
        .take(MAX_UPCOMING)
        .map(|age| {
            let years_until = age - current_age_years;
            Milestone {
                age,
                years_until,
                days_until: (years_until - 1) * DAYS_PER_YEAR + projection.days_until,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn projection(days_until: u32) -> BirthdayProjection {
        BirthdayProjection {
            date: NaiveDate::from_ymd_opt(2025, 6, 15)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            days_until,
            next_age: 25,
        }
    }

    #[test]
    fn next_three_after_twenty_four() {
        let got = upcoming_milestones(24, &projection(100));
        assert_eq!(
            got,
            vec![
                Milestone { age: 25, years_until: 1, days_until: 100 },
                Milestone { age: 30, years_until: 6, days_until: 1925 },
                Milestone { age: 40, years_until: 16, days_until: 5575 },
            ]
        );
    }

    #[test]
    fn exact_milestone_age_is_skipped() {
        let ages: Vec<u32> = upcoming_milestones(18, &projection(5)).iter().map(|m| m.age).collect();
        assert_eq!(ages, vec![21, 25, 30]);
    }

    #[test]
    fn fewer_than_three_near_the_end() {
        let ages: Vec<u32> = upcoming_milestones(85, &projection(5)).iter().map(|m| m.age).collect();
        assert_eq!(ages, vec![90, 100]);
    }

    #[test]
    fn none_at_one_hundred() {
        assert!(upcoming_milestones(100, &projection(5)).is_empty());
        assert!(upcoming_milestones(104, &projection(5)).is_empty());
    }

    #[test]
    fn newborn_starts_at_eighteen() {
        let got = upcoming_milestones(0, &projection(0));
        assert_eq!(got[0], Milestone { age: 18, years_until: 18, days_until: 17 * 365 });
        assert_eq!(got.len(), 3);
    }
}
