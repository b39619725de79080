use chrono::{NaiveDate, NaiveDateTime};
use four_pillars::utils::validation::Validate;
use four_pillars::{
    BaziError, BirthContext, Chart, ChartEngine, ChartFile, FixedCalendar, Gender, LuckDirection,
    SolarTerm, Stem,
};
use std::io::Write;
use tempfile::NamedTempFile;

const CHART_TOML: &str = r#"
[birth]
datetime = "1990-10-20 14:30"
gender = "male"

[chart]
stems = "庚戊乙丙"
branches = "午戌卯戌"

[terms.previous]
name = "寒露"
at = "1990-10-09 03:14"

[terms.next]
name = "立冬"
at = "1990-11-08 00:23"
"#;

fn birth() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1990, 10, 20)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn chart_file() -> ChartFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CHART_TOML.as_bytes()).unwrap();
    ChartFile::load(file.path()).unwrap()
}

#[tokio::test]
async fn end_to_end_analysis_from_chart_file() {
    let chart_file = chart_file();
    chart_file.validate().unwrap();

    let calendar = FixedCalendar::new(chart_file.birth_context().unwrap());
    let engine = ChartEngine::new(calendar);
    let report = engine
        .run(
            chart_file.birth_datetime().unwrap(),
            chart_file.gender().unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(report.chart.to_string(), "庚午 戊戌 乙卯 丙戌");
    assert_eq!(report.gender, Gender::Male);
    assert_eq!(report.next_term.name, "立冬");

    // four hidden-stem facts plus five combination facts
    assert_eq!(report.relations.len(), 9);
    assert!(report.conflicts.is_empty());
    assert_eq!(report.literary_star.day_stem, Stem::Yi);

    // 18 days 9 hours to 立冬: 6 years, 0 months, 90 days, forward (male 庚)
    assert_eq!(report.luck_origin.direction, LuckDirection::Forward);
    assert_eq!(report.luck_origin.start_years, 6);
    assert_eq!(report.luck_origin.start_months, 0);
    assert_eq!(report.luck_origin.start_days, 90);

    assert_eq!(report.luck_pillars.len(), 8);
    assert_eq!(report.luck_pillars[0].to_string(), "戊戌 6-15歲");
    assert_eq!(report.luck_pillars[1].to_string(), "己亥 16-25歲");
    assert_eq!(report.luck_pillars[7].to_string(), "乙巳 76-85歲");
}

#[tokio::test]
async fn report_serializes_with_canonical_glyphs() {
    let chart_file = chart_file();
    let calendar = FixedCalendar::new(chart_file.birth_context().unwrap());
    let engine = ChartEngine::new(calendar);
    let report = engine
        .run(
            chart_file.birth_datetime().unwrap(),
            chart_file.gender().unwrap(),
        )
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["chart"]["stems"][0], "庚");
    assert_eq!(json["chart"]["branches"][1], "戌");
    assert_eq!(json["gender"], "male");
    assert_eq!(json["relations"][0]["kind"], "hidden_stems");
    assert_eq!(json["relations"][4]["kind"], "stem_combination");
    assert_eq!(json["relations"][4]["element"], "金");
    assert_eq!(json["luck_pillars"][0]["stem"], "戊");
}

#[tokio::test]
async fn next_term_before_birth_is_rejected() {
    let context = BirthContext {
        chart: Chart::from_symbols("庚戊乙丙", "午戌卯戌").unwrap(),
        previous_term: SolarTerm {
            name: "寒露".to_string(),
            at: birth() - chrono::Duration::days(11),
        },
        next_term: SolarTerm {
            name: "立冬".to_string(),
            at: birth() - chrono::Duration::hours(1),
        },
    };
    let engine = ChartEngine::new(FixedCalendar::new(context));
    let result = engine.run(birth(), Gender::Male).await;
    assert!(matches!(
        result,
        Err(BaziError::InvalidConfigValue { field, .. }) if field == "next_term"
    ));
}

#[test]
fn chart_file_rejects_unknown_glyphs() {
    let broken = CHART_TOML.replace("庚戊乙丙", "庚戊乙è");
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(broken.as_bytes()).unwrap();
    let chart_file = ChartFile::load(file.path()).unwrap();
    assert!(matches!(
        chart_file.validate(),
        Err(BaziError::InvalidStem { .. })
    ));
}

#[test]
fn chart_file_rejects_terms_outside_the_birth_bracket() {
    // push the next term before the birth instant
    let broken = CHART_TOML.replace("1990-11-08 00:23", "1990-10-09 03:00");
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(broken.as_bytes()).unwrap();
    let chart_file = ChartFile::load(file.path()).unwrap();
    assert!(chart_file.validate().is_err());
}
