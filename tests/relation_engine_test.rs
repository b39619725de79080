use four_pillars::{
    relations, Branch as B, Chart, Element as E, PillarPosition as P, RelationFact, Stem as S,
};

fn fixture_chart() -> Chart {
    // 庚午 戊戌 乙卯 丙戌
    Chart::from_symbols("庚戊乙丙", "午戌卯戌").unwrap()
}

/// Regression fixture: the full enumeration, in discovery order, for the
/// reference chart. Hidden stems first, then stem pairs, then branch pairs.
#[test]
fn fixture_chart_enumerates_exact_fact_sequence() {
    let facts = relations::analyze(&fixture_chart());

    assert_eq!(
        facts,
        vec![
            RelationFact::HiddenStems {
                position: P::Year,
                branch: B::Wu,
                stems: vec![S::Ding, S::Ji],
            },
            RelationFact::HiddenStems {
                position: P::Month,
                branch: B::Xu,
                stems: vec![S::Wu, S::Xin, S::Ding],
            },
            RelationFact::HiddenStems {
                position: P::Day,
                branch: B::Mao,
                stems: vec![S::Yi],
            },
            RelationFact::HiddenStems {
                position: P::Hour,
                branch: B::Xu,
                stems: vec![S::Wu, S::Xin, S::Ding],
            },
            // 年干庚 合 日干乙 化金
            RelationFact::StemCombination {
                positions: (P::Year, P::Day),
                stems: (S::Geng, S::Yi),
                element: Some(E::Metal),
            },
            // 午戌 half-combinations against both 戌
            RelationFact::HalfCombination {
                positions: (P::Year, P::Month),
                branches: (B::Wu, B::Xu),
                element: E::Fire,
            },
            RelationFact::HalfCombination {
                positions: (P::Year, P::Hour),
                branches: (B::Wu, B::Xu),
                element: E::Fire,
            },
            // 卯戌 six-combinations on both sides of the day branch
            RelationFact::SixCombination {
                positions: (P::Month, P::Day),
                branches: (B::Xu, B::Mao),
                element: Some(E::Fire),
            },
            RelationFact::SixCombination {
                positions: (P::Day, P::Hour),
                branches: (B::Mao, B::Xu),
                element: Some(E::Fire),
            },
        ]
    );
}

/// 寅戌 would arch to 火, but 寅 is absent from the fixture chart.
#[test]
fn fixture_chart_has_no_arch_combination() {
    let facts = relations::analyze(&fixture_chart());
    assert!(!facts
        .iter()
        .any(|f| matches!(f, RelationFact::ArchCombination { .. })));
    assert!(!facts
        .iter()
        .any(|f| matches!(f, RelationFact::ThreeCombination { .. })));
}

#[test]
fn fixture_chart_has_no_conflicts() {
    assert!(relations::conflicts(&fixture_chart()).is_empty());
}

#[test]
fn fixture_day_stem_finds_its_literary_star_at_the_day_branch() {
    let star = relations::literary_star(&fixture_chart());
    assert_eq!(star.day_stem, S::Yi);
    assert_eq!(star.branch, B::Mao);
    assert_eq!(star.found_positions, vec![P::Day]);
}

#[test]
fn three_combination_found_regardless_of_chart_position_order() {
    for (stems, branches) in [
        ("甲甲甲甲", "申子辰丑"),
        ("甲甲甲甲", "子辰丑申"),
        ("甲甲甲甲", "辰丑申子"),
    ] {
        let chart = Chart::from_symbols(stems, branches).unwrap();
        let triple = relations::analyze(&chart)
            .into_iter()
            .find(|f| matches!(f, RelationFact::ThreeCombination { .. }));
        match triple {
            Some(RelationFact::ThreeCombination { element, .. }) => {
                assert_eq!(element, E::Water)
            }
            other => panic!("expected a three-combination, got {:?}", other),
        }
    }
}

#[test]
fn invalid_symbols_are_rejected_not_ignored() {
    assert!(Chart::from_symbols("庚戊乙X", "午戌卯戌").is_err());
    assert!(Chart::from_symbols("庚戊乙", "午戌卯戌").is_err());
    assert!(Chart::from_symbols("庚戊乙丙", "午戌卯戌亥").is_err());
    // branch glyph in a stem slot
    assert!(Chart::from_symbols("庚戊乙午", "午戌卯戌").is_err());
}
