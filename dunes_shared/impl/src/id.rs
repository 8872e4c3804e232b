use std::fmt::Debug;

use dunes_di::Build;
use dunes_shared_contracts::id::IdService;
use dunes_utils::trace_instrument;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Build)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[trace_instrument(skip(self))]
    fn generate<I: From<Uuid> + Debug + 'static>(&self) -> I {
        Uuid::new_v4().into()
    }
}
