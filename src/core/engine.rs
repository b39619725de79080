use crate::core::{luck, relations};
use crate::domain::model::{ChartReport, Gender, PillarPosition};
use crate::domain::ports::CalendarProvider;
use crate::utils::error::{BaziError, Result};
use chrono::NaiveDateTime;

/// Orchestrates one analysis: resolve the calendar context, run the pure
/// relation and luck computations, assemble the report.
pub struct ChartEngine<C: CalendarProvider> {
    calendar: C,
}

impl<C: CalendarProvider> ChartEngine<C> {
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    pub async fn run(&self, birth: NaiveDateTime, gender: Gender) -> Result<ChartReport> {
        tracing::info!("Resolving calendar context for {}", birth);
        let context = self.calendar.birth_context(birth).await?;
        tracing::debug!("Chart: {}", context.chart);

        if context.next_term.at <= birth {
            return Err(BaziError::InvalidConfigValue {
                field: "next_term".to_string(),
                value: context.next_term.at.to_string(),
                reason: "next solar term must fall after the birth instant".to_string(),
            });
        }

        tracing::info!("Analyzing stem and branch relations");
        let facts = relations::analyze(&context.chart);
        let conflict_facts = relations::conflicts(&context.chart);
        let star = relations::literary_star(&context.chart);
        tracing::debug!(
            "Found {} combination facts, {} conflict facts",
            facts.len(),
            conflict_facts.len()
        );

        tracing::info!(
            "Computing luck pillars against {} ({})",
            context.next_term.name,
            context.next_term.at
        );
        let origin = luck::compute_luck_origin(
            context.next_term.at - birth,
            gender,
            context.chart.stem(PillarPosition::Year),
            birth,
        );
        let pillars = luck::compute_luck_pillars(
            context.chart.stem(PillarPosition::Month),
            context.chart.branch(PillarPosition::Month),
            origin.direction,
            origin.start_years,
        );

        Ok(ChartReport {
            birth,
            gender,
            chart: context.chart,
            previous_term: context.previous_term,
            next_term: context.next_term,
            relations: facts,
            conflicts: conflict_facts,
            literary_star: star,
            luck_origin: origin,
            luck_pillars: pillars,
        })
    }
}
