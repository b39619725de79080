//! Relation engine: enumerates every combination-type relationship in a
//! chart, in a fixed discovery order, and answers clash/punishment/harm
//! queries over the same pairwise scan.
//!
//! No relation check short-circuits another. A single branch pair may emit
//! a six-combination, a half-combination, and an arch-combination fact at
//! the same time; each kind is evaluated independently.

use crate::core::tables;
use crate::domain::model::{Chart, LiteraryStar, PillarPosition, RelationFact};

/// Enumerates the combination-type facts of a chart, in order: hidden stems
/// per branch position, stem combinations, then branch pairs (six, half,
/// arch) and triples, positions ascending.
pub fn analyze(chart: &Chart) -> Vec<RelationFact> {
    let positions = PillarPosition::ALL;
    let stems = chart.stems();
    let branches = chart.branches();
    let mut facts = Vec::new();

    // 地支藏干
    for (i, &branch) in branches.iter().enumerate() {
        facts.push(RelationFact::HiddenStems {
            position: positions[i],
            branch,
            stems: tables::hidden_stems(branch).to_vec(),
        });
    }

    // 天干相合
    for i in 0..4 {
        for j in (i + 1)..4 {
            if tables::stem_combination_partner(stems[i]) == Some(stems[j]) {
                facts.push(RelationFact::StemCombination {
                    positions: (positions[i], positions[j]),
                    stems: (stems[i], stems[j]),
                    element: tables::combined_element(stems[i], stems[j]),
                });
            }
        }
    }

    // 地支關係
    for i in 0..4 {
        for j in (i + 1)..4 {
            let (a, b) = (branches[i], branches[j]);

            if tables::is_six_combination(a, b) {
                facts.push(RelationFact::SixCombination {
                    positions: (positions[i], positions[j]),
                    branches: (a, b),
                    element: tables::six_combination_element(a, b),
                });
            }

            if let Some(element) = tables::half_combination_element(a, b) {
                facts.push(RelationFact::HalfCombination {
                    positions: (positions[i], positions[j]),
                    branches: (a, b),
                    element,
                });
            }

            if let Some(element) = tables::arch_combination_element(a, b) {
                facts.push(RelationFact::ArchCombination {
                    positions: (positions[i], positions[j]),
                    branches: (a, b),
                    element,
                });
            }

            for k in (j + 1)..4 {
                if let Some(element) = tables::three_combination_element(a, b, branches[k]) {
                    facts.push(RelationFact::ThreeCombination {
                        positions: [positions[i], positions[j], positions[k]],
                        branches: [a, b, branches[k]],
                        element,
                    });
                }
            }
        }
    }

    facts
}

/// Enumerates clash, punishment, and harm facts with the same pairwise
/// scan as [`analyze`]. Kept separate so the presentation layer decides
/// whether to render them; the traditional report surfaces combinations
/// only.
pub fn conflicts(chart: &Chart) -> Vec<RelationFact> {
    let positions = PillarPosition::ALL;
    let branches = chart.branches();
    let mut facts = Vec::new();

    for i in 0..4 {
        for j in (i + 1)..4 {
            let (a, b) = (branches[i], branches[j]);

            if tables::clashes(a, b) {
                facts.push(RelationFact::Clash {
                    positions: (positions[i], positions[j]),
                    branches: (a, b),
                });
            }

            if tables::punishes(a, b) {
                facts.push(RelationFact::Punishment {
                    positions: (positions[i], positions[j]),
                    branches: (a, b),
                });
            }

            if tables::harms(a, b) {
                facts.push(RelationFact::Harm {
                    positions: (positions[i], positions[j]),
                    branches: (a, b),
                });
            }
        }
    }

    facts
}

/// Looks up the day stem's literary-star branch and every chart position
/// holding it. An empty `found_positions` is a normal outcome.
pub fn literary_star(chart: &Chart) -> LiteraryStar {
    let day_stem = chart.day_stem();
    let branch = tables::literary_star_branch(day_stem);
    let found_positions = PillarPosition::ALL
        .into_iter()
        .filter(|&pos| chart.branch(pos) == branch)
        .collect();

    LiteraryStar {
        day_stem,
        branch,
        found_positions,
    }
}
