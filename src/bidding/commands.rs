/// 입찰 관련 커맨드 처리
/// 존재하지 않는 공고 → 404, 기간 밖 입찰 → 409
/// 예산 초과 입찰은 저장하고 조회 시점에 무효로 분류한다.
// region:    --- Imports
use crate::bidding::model::NewBid;
use crate::error::AppError;
use crate::store::TenderStore;
use crate::tender::lifecycle::{Lifecycle, LifecyclePolicy};
use crate::tender::validation::BidInput;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
// endregion: --- Imports

// region:    --- Commands
/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PlaceBidCommand {
    pub tender_id: i64,
    pub institution_id: i64,
    pub bid_amount: f64,
}

impl PlaceBidCommand {
    pub fn new(tender_id: i64, input: BidInput) -> Self {
        Self {
            tender_id,
            institution_id: input.institution_id,
            bid_amount: input.bid_amount,
        }
    }
}

/// 입찰
pub async fn handle_place_bid(
    cmd: PlaceBidCommand,
    store: &dyn TenderStore,
    policy: &LifecyclePolicy,
    now: NaiveDateTime,
) -> Result<i64, AppError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

    let tender = store
        .tender(cmd.tender_id)
        .await?
        .ok_or(AppError::NotFound)?;

    // 입찰 기간 검증
    if now < tender.start_datetime {
        warn!("{:<12} --> 공고가 아직 시작되지 않았습니다. id: {}", "Command", tender.id);
        return Err(AppError::NotStarted);
    }
    if policy.classify(tender.end_datetime, now) == Lifecycle::Concluded {
        warn!("{:<12} --> 공고가 이미 종료되었습니다. id: {}", "Command", tender.id);
        return Err(AppError::Concluded);
    }

    let bid = NewBid {
        tender_id: tender.id,
        institution_id: cmd.institution_id,
        bid_amount: cmd.bid_amount,
        timestamp: now,
    };

    match store.insert_bid(&bid).await {
        Ok(bid_id) => Ok(bid_id),
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => Err(AppError::NotFound),
        Err(e) => Err(e.into()),
    }
}

// endregion: --- Commands
