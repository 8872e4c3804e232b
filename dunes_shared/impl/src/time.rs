use chrono::{DateTime, Utc};
use dunes_di::Build;
use dunes_shared_contracts::time::TimeService;
use dunes_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
