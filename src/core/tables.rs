//! Fixed reference tables of the sexagenary relation system.
//!
//! Everything here is process-wide constant data expressed as match-based
//! lookups over the closed stem/branch enums. A lookup miss means "no
//! relation" and is answered with `None`/`false`, never an error.
//!
//! Pairwise relations are order-independent: callers may pass the two
//! symbols either way round, canonicalization happens once in [`ordered`].

use crate::domain::model::{Branch, Element, Stem};
use crate::domain::model::{Branch as B, Element as E, Stem as S};

/// Canonical unordered pair, smaller cycle index first.
fn ordered<T: Copy + Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// 地支藏干 — the ordered hidden stems of each branch.
pub fn hidden_stems(branch: Branch) -> &'static [Stem] {
    match branch {
        B::Zi => &[S::Gui],
        B::Chou => &[S::Ji, S::Gui, S::Xin],
        B::Yin => &[S::Jia, S::Bing, S::Wu],
        B::Mao => &[S::Yi],
        B::Chen => &[S::Wu, S::Yi, S::Gui],
        B::Si => &[S::Bing, S::Geng, S::Wu],
        B::Wu => &[S::Ding, S::Ji],
        B::Wei => &[S::Ji, S::Ding, S::Yi],
        B::Shen => &[S::Geng, S::Ren, S::Wu],
        B::You => &[S::Xin],
        B::Xu => &[S::Wu, S::Xin, S::Ding],
        B::Hai => &[S::Ren, S::Jia],
    }
}

/// 天干五合 — each stem combines with exactly one partner.
pub fn stem_combination_partner(stem: Stem) -> Option<Stem> {
    let partner = match stem {
        S::Jia => S::Ji,
        S::Yi => S::Geng,
        S::Bing => S::Xin,
        S::Ding => S::Ren,
        S::Wu => S::Gui,
        S::Ji => S::Jia,
        S::Geng => S::Yi,
        S::Xin => S::Bing,
        S::Ren => S::Ding,
        S::Gui => S::Wu,
    };
    Some(partner)
}

/// 天干合化五行 — resolved element of a stem combination, order-independent.
pub fn combined_element(a: Stem, b: Stem) -> Option<Element> {
    match ordered(a, b) {
        (S::Jia, S::Ji) => Some(E::Earth),
        (S::Yi, S::Geng) => Some(E::Metal),
        (S::Bing, S::Xin) => Some(E::Water),
        (S::Ding, S::Ren) => Some(E::Wood),
        (S::Wu, S::Gui) => Some(E::Fire),
        _ => None,
    }
}

/// 地支六合化五行 — resolved element of a six-combination pair.
pub fn six_combination_element(a: Branch, b: Branch) -> Option<Element> {
    match ordered(a, b) {
        (B::Zi, B::Chou) => Some(E::Earth),
        (B::Yin, B::Hai) => Some(E::Wood),
        (B::Mao, B::Xu) => Some(E::Fire),
        (B::Chen, B::You) => Some(E::Metal),
        (B::Si, B::Shen) => Some(E::Water),
        (B::Wu, B::Wei) => Some(E::Fire),
        _ => None,
    }
}

pub fn is_six_combination(a: Branch, b: Branch) -> bool {
    six_combination_element(a, b).is_some()
}

/// 半三合 — the two adjacent legs of each three-combination frame.
pub fn half_combination_element(a: Branch, b: Branch) -> Option<Element> {
    match ordered(a, b) {
        (B::Zi, B::Shen) => Some(E::Water),
        (B::Zi, B::Chen) => Some(E::Water),
        (B::Mao, B::Hai) => Some(E::Wood),
        (B::Mao, B::Wei) => Some(E::Wood),
        (B::Yin, B::Wu) => Some(E::Fire),
        (B::Wu, B::Xu) => Some(E::Fire),
        (B::Si, B::You) => Some(E::Metal),
        (B::Chou, B::You) => Some(E::Metal),
        _ => None,
    }
}

/// 拱合 — the two outer branches of a three-combination frame with the
/// middle branch absent.
pub fn arch_combination_element(a: Branch, b: Branch) -> Option<Element> {
    match ordered(a, b) {
        (B::Chen, B::Shen) => Some(E::Water),
        (B::Wei, B::Hai) => Some(E::Wood),
        (B::Yin, B::Xu) => Some(E::Fire),
        (B::Chou, B::Si) => Some(E::Metal),
        _ => None,
    }
}

/// 三合局 — exact set match against the four fixed triples, keyed by the
/// index-sorted triple. No partial credit.
pub fn three_combination_element(a: Branch, b: Branch, c: Branch) -> Option<Element> {
    let mut triple = [a, b, c];
    triple.sort();
    match triple {
        [B::Zi, B::Chen, B::Shen] => Some(E::Water),
        [B::Mao, B::Wei, B::Hai] => Some(E::Wood),
        [B::Yin, B::Wu, B::Xu] => Some(E::Fire),
        [B::Chou, B::Si, B::You] => Some(E::Metal),
        _ => None,
    }
}

/// 相沖 — each branch clashes with its opposite (six positions away).
pub fn clashes(a: Branch, b: Branch) -> bool {
    matches!(
        ordered(a, b),
        (B::Zi, B::Wu)
            | (B::Chou, B::Wei)
            | (B::Yin, B::Shen)
            | (B::Mao, B::You)
            | (B::Chen, B::Xu)
            | (B::Si, B::Hai)
    )
}

/// 相刑 — mutual punishment pairs plus the self-punishing branches
/// (辰 巳 午 酉 亥, matching the legacy table).
pub fn punishes(a: Branch, b: Branch) -> bool {
    if a == b {
        return matches!(a, B::Chen | B::Si | B::Wu | B::You | B::Hai);
    }
    matches!(
        ordered(a, b),
        (B::Zi, B::Mao)
            | (B::Chou, B::Wei)
            | (B::Chou, B::Xu)
            | (B::Wei, B::Xu)
            | (B::Yin, B::Si)
            | (B::Yin, B::Shen)
    )
}

/// 相害
pub fn harms(a: Branch, b: Branch) -> bool {
    matches!(
        ordered(a, b),
        (B::Zi, B::Wei)
            | (B::Chou, B::Wu)
            | (B::Yin, B::Si)
            | (B::Mao, B::Chen)
            | (B::Shen, B::Hai)
            | (B::You, B::Xu)
    )
}

/// 文昌貴人 — the literary-star branch of each day stem. Total over the
/// closed stem set.
pub fn literary_star_branch(day_stem: Stem) -> Branch {
    match day_stem {
        S::Jia => B::Si,
        S::Yi => B::Mao,
        S::Bing => B::Shen,
        S::Ding => B::You,
        S::Wu => B::Shen,
        S::Ji => B::You,
        S::Geng => B::Hai,
        S::Xin => B::Zi,
        S::Ren => B::Yin,
        S::Gui => B::Mao,
    }
}
