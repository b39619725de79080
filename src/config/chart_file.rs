use crate::domain::model::{BirthContext, Chart, Gender, SolarTerm};
use crate::utils::error::{BaziError, Result};
use crate::utils::validation::{parse_datetime, validate_non_empty_string, Validate};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Birth data as written in a TOML chart file:
///
/// ```toml
/// [birth]
/// datetime = "1990-10-20 14:30"
/// gender = "male"
///
/// [chart]
/// stems = "庚戊乙丙"
/// branches = "午戌卯戌"
///
/// [terms.previous]
/// name = "寒露"
/// at = "1990-10-09 03:14"
///
/// [terms.next]
/// name = "立冬"
/// at = "1990-11-08 00:23"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartFile {
    pub birth: BirthSection,
    pub chart: ChartSection,
    pub terms: TermsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthSection {
    pub datetime: String,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSection {
    /// Year, month, day, hour stems, four glyphs.
    pub stems: String,
    /// Year, month, day, hour branches, four glyphs.
    pub branches: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsSection {
    pub previous: TermSection,
    pub next: TermSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermSection {
    pub name: String,
    pub at: String,
}

impl ChartFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn birth_datetime(&self) -> Result<NaiveDateTime> {
        parse_datetime("birth.datetime", &self.birth.datetime)
    }

    pub fn gender(&self) -> Result<Gender> {
        self.birth.gender.parse()
    }

    pub fn chart(&self) -> Result<Chart> {
        Chart::from_symbols(&self.chart.stems, &self.chart.branches)
    }

    pub fn birth_context(&self) -> Result<BirthContext> {
        Ok(BirthContext {
            chart: self.chart()?,
            previous_term: SolarTerm {
                name: self.terms.previous.name.clone(),
                at: parse_datetime("terms.previous.at", &self.terms.previous.at)?,
            },
            next_term: SolarTerm {
                name: self.terms.next.name.clone(),
                at: parse_datetime("terms.next.at", &self.terms.next.at)?,
            },
        })
    }
}

impl Validate for ChartFile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("terms.previous.name", &self.terms.previous.name)?;
        validate_non_empty_string("terms.next.name", &self.terms.next.name)?;

        // parse everything once so bad glyphs or dates fail before analysis
        self.chart()?;
        self.gender()?;
        let birth = self.birth_datetime()?;
        let context = self.birth_context()?;

        if context.previous_term.at > birth {
            return Err(BaziError::InvalidConfigValue {
                field: "terms.previous.at".to_string(),
                value: self.terms.previous.at.clone(),
                reason: "previous solar term must not fall after the birth instant".to_string(),
            });
        }
        if context.next_term.at <= birth {
            return Err(BaziError::InvalidConfigValue {
                field: "terms.next.at".to_string(),
                value: self.terms.next.at.clone(),
                reason: "next solar term must fall after the birth instant".to_string(),
            });
        }
        Ok(())
    }
}
