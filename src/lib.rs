pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::ChartFile;

pub use crate::adapters::calendar::FixedCalendar;
pub use crate::core::engine::ChartEngine;
pub use crate::core::{luck, relations, tables};
pub use crate::domain::model::{
    BirthContext, Branch, Chart, ChartReport, Element, Gender, LiteraryStar, LuckDirection,
    LuckOrigin, LuckPillar, PillarPosition, RelationFact, SolarTerm, Stem,
};
pub use crate::domain::ports::CalendarProvider;
pub use crate::utils::error::{BaziError, Result};
