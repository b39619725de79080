//! Luck-pillar calculation: converts the interval between birth and the
//! next solar term into a starting age/date, then walks the stem and branch
//! cycles forward or backward from the month pillar.
//!
//! The age arithmetic uses the traditional approximation (3 days = 1 year,
//! 1 day = 4 months, 1 hour = 10 days, months of 30 days, years of 365
//! days). This is a domain convention; it must not be corrected to
//! calendar-accurate arithmetic.

use crate::domain::model::{
    Branch, Gender, LuckDirection, LuckOrigin, LuckPillar, Stem,
};
use chrono::{Duration, NaiveDateTime};

/// Number of ten-year periods in a luck sequence.
pub const PILLAR_COUNT: usize = 8;

/// Forward progression for yang-year males and yin-year females, backward
/// otherwise. Fixed for the whole sequence.
pub fn luck_direction(gender: Gender, year_stem: Stem) -> LuckDirection {
    match (gender, year_stem.is_yang()) {
        (Gender::Male, true) | (Gender::Female, false) => LuckDirection::Forward,
        _ => LuckDirection::Backward,
    }
}

/// Derives the starting point of the luck sequence from the time left until
/// the next solar term.
pub fn compute_luck_origin(
    to_next_term: Duration,
    gender: Gender,
    year_stem: Stem,
    birth: NaiveDateTime,
) -> LuckOrigin {
    let days = to_next_term.num_days();
    let hours = to_next_term.num_hours() - days * 24;

    let start_years = days / 3;
    let start_months = (days % 3) * 4;
    let start_days = hours * 10;

    let start_date =
        birth + Duration::days(start_days + start_months * 30 + start_years * 365);

    LuckOrigin {
        direction: luck_direction(gender, year_stem),
        start_years,
        start_months,
        start_days,
        start_date,
    }
}

/// Walks eight steps from the month pillar, one per decade. Indices are
/// taken with a euclidean remainder so backward sequences never leave the
/// cycle.
pub fn compute_luck_pillars(
    month_stem: Stem,
    month_branch: Branch,
    direction: LuckDirection,
    start_years: i64,
) -> Vec<LuckPillar> {
    let step: i64 = match direction {
        LuckDirection::Forward => 1,
        LuckDirection::Backward => -1,
    };

    (0..PILLAR_COUNT as i64)
        .map(|i| {
            let start_age = start_years + 10 * i;
            LuckPillar {
                stem: month_stem.offset(step * i),
                branch: month_branch.offset(step * i),
                start_age,
                end_age: start_age + 9,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Branch as B, Stem as S};
    use chrono::NaiveDate;

    fn birth() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 10, 20)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn direction_encodes_the_yang_stem_table() {
        let yang = [S::Jia, S::Bing, S::Wu, S::Geng, S::Ren];
        let yin = [S::Yi, S::Ding, S::Ji, S::Xin, S::Gui];
        for stem in yang {
            assert_eq!(luck_direction(Gender::Male, stem), LuckDirection::Forward);
            assert_eq!(luck_direction(Gender::Female, stem), LuckDirection::Backward);
        }
        for stem in yin {
            assert_eq!(luck_direction(Gender::Male, stem), LuckDirection::Backward);
            assert_eq!(luck_direction(Gender::Female, stem), LuckDirection::Forward);
        }
    }

    #[test]
    fn origin_follows_the_three_day_rule() {
        // 10 days 7 hours to the next term: 10 div 3 = 3 years,
        // (10 mod 3) * 4 = 4 months, 7 * 10 = 70 days
        let origin = compute_luck_origin(
            Duration::days(10) + Duration::hours(7) + Duration::minutes(30),
            Gender::Male,
            S::Geng,
            birth(),
        );
        assert_eq!(origin.direction, LuckDirection::Forward);
        assert_eq!(origin.start_years, 3);
        assert_eq!(origin.start_months, 4);
        assert_eq!(origin.start_days, 70);
        // 70 + 4*30 + 3*365 = 1285 approximate days after birth
        assert_eq!(
            origin.start_date,
            NaiveDate::from_ymd_opt(1994, 4, 28)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn origin_truncates_partial_days_and_hours() {
        let origin = compute_luck_origin(
            Duration::hours(5) + Duration::minutes(59),
            Gender::Female,
            S::Yi,
            birth(),
        );
        assert_eq!(origin.start_years, 0);
        assert_eq!(origin.start_months, 0);
        assert_eq!(origin.start_days, 50);
        assert_eq!(origin.start_date, birth() + Duration::days(50));
    }

    #[test]
    fn forward_sequence_walks_both_cycles_up() {
        let pillars = compute_luck_pillars(S::Wu, B::Xu, LuckDirection::Forward, 3);
        assert_eq!(pillars.len(), PILLAR_COUNT);
        let pairs: Vec<(Stem, Branch)> = pillars.iter().map(|p| (p.stem, p.branch)).collect();
        assert_eq!(
            pairs,
            vec![
                (S::Wu, B::Xu),
                (S::Ji, B::Hai),
                (S::Geng, B::Zi),
                (S::Xin, B::Chou),
                (S::Ren, B::Yin),
                (S::Gui, B::Mao),
                (S::Jia, B::Chen),
                (S::Yi, B::Si),
            ]
        );
    }

    #[test]
    fn backward_sequence_wraps_without_leaving_the_cycle() {
        let pillars = compute_luck_pillars(S::Jia, B::Zi, LuckDirection::Backward, 5);
        let pairs: Vec<(Stem, Branch)> = pillars.iter().map(|p| (p.stem, p.branch)).collect();
        assert_eq!(
            pairs,
            vec![
                (S::Jia, B::Zi),
                (S::Gui, B::Hai),
                (S::Ren, B::Xu),
                (S::Xin, B::You),
                (S::Geng, B::Shen),
                (S::Ji, B::Wei),
                (S::Wu, B::Wu),
                (S::Ding, B::Si),
            ]
        );
    }

    #[test]
    fn age_ranges_tile_the_decades_exactly() {
        let pillars = compute_luck_pillars(S::Bing, B::Yin, LuckDirection::Forward, 7);
        for (i, pillar) in pillars.iter().enumerate() {
            assert_eq!(pillar.start_age, 7 + 10 * i as i64);
            assert_eq!(pillar.end_age - pillar.start_age, 9);
        }
        for pair in pillars.windows(2) {
            assert_eq!(pair[1].start_age, pair[0].end_age + 1);
        }
    }
}
