use crate::domain::model::BirthContext;
use crate::domain::ports::CalendarProvider;
use crate::utils::error::{BaziError, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Calendar adapter backed by preloaded data: the eight symbols and the
/// bracketing solar terms come from user input (CLI flags or a chart file)
/// rather than from a solar/lunar conversion, which stays outside this
/// crate.
#[derive(Debug, Clone)]
pub struct FixedCalendar {
    context: BirthContext,
}

impl FixedCalendar {
    pub fn new(context: BirthContext) -> Self {
        Self { context }
    }
}

#[async_trait]
impl CalendarProvider for FixedCalendar {
    async fn birth_context(&self, birth: NaiveDateTime) -> Result<BirthContext> {
        if self.context.previous_term.at > birth {
            return Err(BaziError::InvalidConfigValue {
                field: "previous_term".to_string(),
                value: self.context.previous_term.at.to_string(),
                reason: "previous solar term must not fall after the birth instant".to_string(),
            });
        }
        if self.context.next_term.at <= birth {
            return Err(BaziError::InvalidConfigValue {
                field: "next_term".to_string(),
                value: self.context.next_term.at.to_string(),
                reason: "next solar term must fall after the birth instant".to_string(),
            });
        }
        Ok(self.context.clone())
    }
}
