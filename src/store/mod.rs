// region:    --- Imports
use crate::bidding::model::{Bid, NewBid};
use crate::database::DatabaseManager;
use crate::query::{handlers, queries};
use crate::tender::datetime::to_storage;
use crate::tender::model::{NewTender, Tender};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Tender Store Trait
/// 공고/입찰 저장소 트레이트
/// 핸들러는 이 트레이트만 알고, 구현체는 라우터 상태로 주입된다.
#[async_trait]
pub trait TenderStore: Send + Sync {
    /// 종료 시각이 `cutoff` 이후인 공고
    async fn current_tenders(&self, cutoff: NaiveDateTime) -> Result<Vec<Tender>, sqlx::Error>;

    /// 종료 시각이 `cutoff` 이하인 공고
    async fn past_tenders(&self, cutoff: NaiveDateTime) -> Result<Vec<Tender>, sqlx::Error>;

    async fn tender(&self, tender_id: i64) -> Result<Option<Tender>, sqlx::Error>;

    async fn bids_for(&self, tender_id: i64) -> Result<Vec<Bid>, sqlx::Error>;

    async fn insert_tender(&self, tender: &NewTender) -> Result<i64, sqlx::Error>;

    async fn insert_bid(&self, bid: &NewBid) -> Result<i64, sqlx::Error>;
}

// endregion: --- Tender Store Trait

// region:    --- Sqlite Tender Store
/// SQLite 저장소 구현체
pub struct SqliteTenderStore {
    db_manager: Arc<DatabaseManager>,
}

impl SqliteTenderStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl TenderStore for SqliteTenderStore {
    async fn current_tenders(&self, cutoff: NaiveDateTime) -> Result<Vec<Tender>, sqlx::Error> {
        handlers::get_current_tenders(&self.db_manager, cutoff).await
    }

    async fn past_tenders(&self, cutoff: NaiveDateTime) -> Result<Vec<Tender>, sqlx::Error> {
        handlers::get_past_tenders(&self.db_manager, cutoff).await
    }

    async fn tender(&self, tender_id: i64) -> Result<Option<Tender>, sqlx::Error> {
        handlers::get_tender(&self.db_manager, tender_id).await
    }

    async fn bids_for(&self, tender_id: i64) -> Result<Vec<Bid>, sqlx::Error> {
        handlers::get_tender_bids(&self.db_manager, tender_id).await
    }

    async fn insert_tender(&self, tender: &NewTender) -> Result<i64, sqlx::Error> {
        let tender_id = sqlx::query(queries::INSERT_TENDER)
            .bind(&tender.name)
            .bind(&tender.description)
            .bind(tender.institution_id)
            .bind(to_storage(&tender.start_datetime))
            .bind(to_storage(&tender.end_datetime))
            .bind(tender.maximum_budget)
            .execute(self.db_manager.pool())
            .await?
            .last_insert_rowid();

        info!("{:<12} --> 공고 저장 id: {}", "Store", tender_id);
        Ok(tender_id)
    }

    async fn insert_bid(&self, bid: &NewBid) -> Result<i64, sqlx::Error> {
        let bid_id = sqlx::query(queries::INSERT_BID)
            .bind(bid.tender_id)
            .bind(bid.institution_id)
            .bind(bid.bid_amount)
            .bind(to_storage(&bid.timestamp))
            .execute(self.db_manager.pool())
            .await?
            .last_insert_rowid();

        info!(
            "{:<12} --> 입찰 저장 id: {}, 공고 id: {}",
            "Store", bid_id, bid.tender_id
        );
        Ok(bid_id)
    }
}

// endregion: --- Sqlite Tender Store
