use crate::config::chart_file::{
    BirthSection, ChartFile, ChartSection, TermSection, TermsSection,
};
use crate::utils::error::{BaziError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "four-pillars")]
#[command(about = "BaZi chart relation analysis and luck-pillar calculation")]
pub struct CliConfig {
    /// TOML chart file; replaces the inline flags below
    #[arg(long)]
    pub chart_file: Option<String>,

    /// Year, month, day, hour stems, e.g. 庚戊乙丙
    #[arg(long)]
    pub stems: Option<String>,

    /// Year, month, day, hour branches, e.g. 午戌卯戌
    #[arg(long)]
    pub branches: Option<String>,

    /// Birth instant, e.g. "1990-10-20 14:30"
    #[arg(long)]
    pub birth: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    /// Solar term before birth as name=datetime, e.g. "寒露=1990-10-09 03:14"
    #[arg(long)]
    pub prev_term: Option<String>,

    /// Solar term after birth as name=datetime, e.g. "立冬=1990-11-08 00:23"
    #[arg(long)]
    pub next_term: Option<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the chart file when given, otherwise assembles one from the
    /// inline flags.
    pub fn resolve(&self) -> Result<ChartFile> {
        if let Some(path) = &self.chart_file {
            return ChartFile::load(path);
        }

        let (prev_name, prev_at) =
            split_term("prev-term", validate_required_field("prev-term", &self.prev_term)?)?;
        let (next_name, next_at) =
            split_term("next-term", validate_required_field("next-term", &self.next_term)?)?;

        Ok(ChartFile {
            birth: BirthSection {
                datetime: validate_required_field("birth", &self.birth)?.clone(),
                gender: validate_required_field("gender", &self.gender)?.clone(),
            },
            chart: ChartSection {
                stems: validate_required_field("stems", &self.stems)?.clone(),
                branches: validate_required_field("branches", &self.branches)?.clone(),
            },
            terms: TermsSection {
                previous: TermSection {
                    name: prev_name,
                    at: prev_at,
                },
                next: TermSection {
                    name: next_name,
                    at: next_at,
                },
            },
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(BaziError::InvalidConfigValue {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "expected text or json".to_string(),
            }),
        }
    }
}

fn split_term(field_name: &str, raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, at)) if !name.trim().is_empty() && !at.trim().is_empty() => {
            Ok((name.trim().to_string(), at.trim().to_string()))
        }
        _ => Err(BaziError::InvalidConfigValue {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "expected name=datetime".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_assembles_a_chart_file_from_inline_flags() {
        let config = CliConfig::try_parse_from([
            "four-pillars",
            "--stems",
            "庚戊乙丙",
            "--branches",
            "午戌卯戌",
            "--birth",
            "1990-10-20 14:30",
            "--gender",
            "male",
            "--prev-term",
            "寒露=1990-10-09 03:14",
            "--next-term",
            "立冬=1990-11-08 00:23",
        ])
        .unwrap();

        let chart_file = config.resolve().unwrap();
        assert_eq!(chart_file.chart.stems, "庚戊乙丙");
        assert_eq!(chart_file.terms.next.name, "立冬");
        assert!(chart_file.validate().is_ok());
    }

    #[test]
    fn resolve_requires_every_inline_flag() {
        let config = CliConfig::try_parse_from(["four-pillars", "--stems", "庚戊乙丙"]).unwrap();
        assert!(matches!(
            config.resolve(),
            Err(BaziError::MissingConfig { .. })
        ));
    }

    #[test]
    fn format_must_be_text_or_json() {
        let config =
            CliConfig::try_parse_from(["four-pillars", "--format", "yaml"]).unwrap();
        assert!(config.validate().is_err());
    }
}
