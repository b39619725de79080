use crate::domain::model::BirthContext;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Calendar collaborator: resolves the four stem/branch pairs and the
/// bracketing solar terms for a birth instant. The core never computes
/// calendar data itself; a failing adapter surfaces its error unchanged.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn birth_context(&self, birth: NaiveDateTime) -> Result<BirthContext>;
}
