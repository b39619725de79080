pub mod engine;
pub mod luck;
pub mod relations;
pub mod tables;

pub use crate::domain::model::{
    Branch, Chart, ChartReport, Element, Gender, LuckDirection, LuckOrigin, LuckPillar,
    PillarPosition, RelationFact, Stem,
};
pub use crate::domain::ports::CalendarProvider;
pub use crate::utils::error::Result;
