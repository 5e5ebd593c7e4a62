use crate::store::TenderStore;
use crate::tender::datetime;
use crate::tender::lifecycle::LifecyclePolicy;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// 라우터 공유 상태
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TenderStore>,
    pub policy: LifecyclePolicy,
    clock: fn() -> NaiveDateTime,
}

impl AppState {
    pub fn new(store: Arc<dyn TenderStore>, policy: LifecyclePolicy) -> Self {
        Self {
            store,
            policy,
            clock: datetime::now,
        }
    }

    /// 시계 교체 (테스트용 고정 시각 등)
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}
