use crate::utils::error::{BaziError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 十天干
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Cyclic lookup, index taken modulo 10.
    pub fn from_index(index: usize) -> Stem {
        Self::ALL[index % 10]
    }

    /// Cyclic step of `offset` positions; negative offsets walk backward.
    pub fn offset(self, offset: i64) -> Stem {
        let index = (self.index() as i64 + offset).rem_euclid(10);
        Self::ALL[index as usize]
    }

    pub fn symbol(self) -> char {
        match self {
            Stem::Jia => '甲',
            Stem::Yi => '乙',
            Stem::Bing => '丙',
            Stem::Ding => '丁',
            Stem::Wu => '戊',
            Stem::Ji => '己',
            Stem::Geng => '庚',
            Stem::Xin => '辛',
            Stem::Ren => '壬',
            Stem::Gui => '癸',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Stem> {
        Self::ALL.into_iter().find(|s| s.symbol() == symbol)
    }

    /// 陽干: 甲丙戊庚壬 (even cycle index). Drives luck-pillar direction.
    pub fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl FromStr for Stem {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Stem::from_symbol(c).ok_or_else(|| BaziError::InvalidStem {
                symbol: s.to_string(),
            }),
            _ => Err(BaziError::InvalidStem {
                symbol: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 十二地支
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Cyclic lookup, index taken modulo 12.
    pub fn from_index(index: usize) -> Branch {
        Self::ALL[index % 12]
    }

    /// Cyclic step of `offset` positions; negative offsets walk backward.
    pub fn offset(self, offset: i64) -> Branch {
        let index = (self.index() as i64 + offset).rem_euclid(12);
        Self::ALL[index as usize]
    }

    pub fn symbol(self) -> char {
        match self {
            Branch::Zi => '子',
            Branch::Chou => '丑',
            Branch::Yin => '寅',
            Branch::Mao => '卯',
            Branch::Chen => '辰',
            Branch::Si => '巳',
            Branch::Wu => '午',
            Branch::Wei => '未',
            Branch::Shen => '申',
            Branch::You => '酉',
            Branch::Xu => '戌',
            Branch::Hai => '亥',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Branch> {
        Self::ALL.into_iter().find(|b| b.symbol() == symbol)
    }
}

impl FromStr for Branch {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Branch::from_symbol(c).ok_or_else(|| BaziError::InvalidBranch {
                symbol: s.to_string(),
            }),
            _ => Err(BaziError::InvalidBranch {
                symbol: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 五行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    pub fn symbol(self) -> char {
        match self {
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
            Element::Water => '水',
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Gender::Male),
            "female" | "f" | "女" => Ok(Gender::Female),
            other => Err(BaziError::InvalidConfigValue {
                field: "gender".to_string(),
                value: other.to_string(),
                reason: "expected male or female".to_string(),
            }),
        }
    }
}

/// Reporting label only; relation logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PillarPosition::Year => "年",
            PillarPosition::Month => "月",
            PillarPosition::Day => "日",
            PillarPosition::Hour => "時",
        }
    }
}

impl fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Four stems and four branches, one pair per position. Repeats are allowed
/// and meaningful (self-punishment branches, doubled combination partners).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    stems: [Stem; 4],
    branches: [Branch; 4],
}

impl Chart {
    pub fn new(stems: [Stem; 4], branches: [Branch; 4]) -> Self {
        Self { stems, branches }
    }

    /// Parses the two four-glyph strings of a written chart, e.g.
    /// `"庚戊乙丙"` / `"午戌卯戌"` in year-month-day-hour order.
    pub fn from_symbols(stems: &str, branches: &str) -> Result<Self> {
        let stems = Self::parse_cycle(stems, "stems", |c| {
            Stem::from_symbol(c).ok_or_else(|| BaziError::InvalidStem {
                symbol: c.to_string(),
            })
        })?;
        let branches = Self::parse_cycle(branches, "branches", |c| {
            Branch::from_symbol(c).ok_or_else(|| BaziError::InvalidBranch {
                symbol: c.to_string(),
            })
        })?;
        Ok(Self { stems, branches })
    }

    fn parse_cycle<T: Copy>(
        text: &str,
        what: &str,
        parse: impl Fn(char) -> Result<T>,
    ) -> Result<[T; 4]> {
        let parsed: Vec<T> = text.chars().map(parse).collect::<Result<_>>()?;
        parsed.try_into().map_err(|v: Vec<T>| BaziError::InvalidChart {
            message: format!("expected exactly 4 {}, got {}", what, v.len()),
        })
    }

    pub fn stem(&self, position: PillarPosition) -> Stem {
        self.stems[position as usize]
    }

    pub fn branch(&self, position: PillarPosition) -> Branch {
        self.branches[position as usize]
    }

    pub fn stems(&self) -> &[Stem; 4] {
        &self.stems
    }

    pub fn branches(&self) -> &[Branch; 4] {
        &self.branches
    }

    pub fn day_stem(&self) -> Stem {
        self.stem(PillarPosition::Day)
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in PillarPosition::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", self.stem(pos), self.branch(pos))?;
        }
        Ok(())
    }
}

/// One detected relationship instance. Immutable; the engine emits these in
/// discovery order (hidden stems, then stem pairs, then branch pairs and
/// triples, positions ascending).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationFact {
    HiddenStems {
        position: PillarPosition,
        branch: Branch,
        stems: Vec<Stem>,
    },
    StemCombination {
        positions: (PillarPosition, PillarPosition),
        stems: (Stem, Stem),
        element: Option<Element>,
    },
    SixCombination {
        positions: (PillarPosition, PillarPosition),
        branches: (Branch, Branch),
        element: Option<Element>,
    },
    HalfCombination {
        positions: (PillarPosition, PillarPosition),
        branches: (Branch, Branch),
        element: Element,
    },
    ArchCombination {
        positions: (PillarPosition, PillarPosition),
        branches: (Branch, Branch),
        element: Element,
    },
    ThreeCombination {
        positions: [PillarPosition; 3],
        branches: [Branch; 3],
        element: Element,
    },
    Clash {
        positions: (PillarPosition, PillarPosition),
        branches: (Branch, Branch),
    },
    Punishment {
        positions: (PillarPosition, PillarPosition),
        branches: (Branch, Branch),
    },
    Harm {
        positions: (PillarPosition, PillarPosition),
        branches: (Branch, Branch),
    },
}

impl fmt::Display for RelationFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationFact::HiddenStems {
                position,
                branch,
                stems,
            } => {
                let listed: Vec<String> = stems.iter().map(|s| s.to_string()).collect();
                write!(f, "{}支 {} 藏干 {}", position, branch, listed.join("、"))
            }
            RelationFact::StemCombination {
                positions: (p1, p2),
                stems: (s1, s2),
                element,
            } => match element {
                Some(el) => write!(f, "{}干 {} 合 {}干 {} 化為 {}", p1, s1, p2, s2, el),
                None => write!(f, "{}干 {} 合 {}干 {}", p1, s1, p2, s2),
            },
            RelationFact::SixCombination {
                positions: (p1, p2),
                branches: (b1, b2),
                element,
            } => match element {
                Some(el) => write!(f, "{}支 {} 六合 {}支 {} 化為 {}", p1, b1, p2, b2, el),
                None => write!(f, "{}支 {} 六合 {}支 {}", p1, b1, p2, b2),
            },
            RelationFact::HalfCombination {
                positions: (p1, p2),
                branches: (b1, b2),
                element,
            } => write!(f, "{}支 {} 半三合 {}支 {} 化為 {}", p1, b1, p2, b2, element),
            RelationFact::ArchCombination {
                positions: (p1, p2),
                branches: (b1, b2),
                element,
            } => write!(f, "{}支 {} 拱 {}支 {} 化為 {}", p1, b1, p2, b2, element),
            RelationFact::ThreeCombination {
                positions: [p1, p2, p3],
                branches: [b1, b2, b3],
                element,
            } => write!(
                f,
                "{}支 {} {}支 {} {}支 {} 三合化為 {}",
                p1, b1, p2, b2, p3, b3, element
            ),
            RelationFact::Clash {
                positions: (p1, p2),
                branches: (b1, b2),
            } => write!(f, "{}支 {} 沖 {}支 {}", p1, b1, p2, b2),
            RelationFact::Punishment {
                positions: (p1, p2),
                branches: (b1, b2),
            } => write!(f, "{}支 {} 刑 {}支 {}", p1, b1, p2, b2),
            RelationFact::Harm {
                positions: (p1, p2),
                branches: (b1, b2),
            } => write!(f, "{}支 {} 害 {}支 {}", p1, b1, p2, b2),
        }
    }
}

/// 文昌貴人 lookup result. `found_positions` may be empty; absence of the
/// star branch in the chart is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteraryStar {
    pub day_stem: Stem,
    pub branch: Branch,
    pub found_positions: Vec<PillarPosition>,
}

impl fmt::Display for LiteraryStar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "日干 {} 的文昌貴人在 {}",
            self.day_stem, self.branch
        )
    }
}

/// A named solar-term anchor with its start instant, as supplied by the
/// calendar collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTerm {
    pub name: String,
    pub at: NaiveDateTime,
}

/// Everything the calendar collaborator resolves for one birth instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthContext {
    pub chart: Chart,
    pub previous_term: SolarTerm,
    pub next_term: SolarTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckDirection {
    Forward,
    Backward,
}

/// Starting point of the luck-pillar sequence. Computed once from the birth
/// instant's distance to the next solar term, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckOrigin {
    pub direction: LuckDirection,
    pub start_years: i64,
    pub start_months: i64,
    pub start_days: i64,
    pub start_date: NaiveDateTime,
}

/// One ten-year luck period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckPillar {
    pub stem: Stem,
    pub branch: Branch,
    pub start_age: i64,
    pub end_age: i64,
}

impl fmt::Display for LuckPillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}-{}歲",
            self.stem, self.branch, self.start_age, self.end_age
        )
    }
}

/// Full analysis output: plain structured data, no formatting decisions.
/// `conflicts` is reported separately from `relations` so the presentation
/// layer decides what to render.
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub birth: NaiveDateTime,
    pub gender: Gender,
    pub chart: Chart,
    pub previous_term: SolarTerm,
    pub next_term: SolarTerm,
    pub relations: Vec<RelationFact>,
    pub conflicts: Vec<RelationFact>,
    pub literary_star: LiteraryStar,
    pub luck_origin: LuckOrigin,
    pub luck_pillars: Vec<LuckPillar>,
}
