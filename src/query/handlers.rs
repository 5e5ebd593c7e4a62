// region:    --- Imports
use super::queries;
use crate::bidding::model::Bid;
use crate::database::DatabaseManager;
use crate::tender::datetime::to_storage;
use crate::tender::model::Tender;
use chrono::NaiveDateTime;
use sqlx::Error as SqlxError;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 진행 중 공고 목록 조회
pub async fn get_current_tenders(
    db_manager: &DatabaseManager,
    cutoff: NaiveDateTime,
) -> Result<Vec<Tender>, SqlxError> {
    info!("{:<12} --> 진행 중 공고 조회 기준: {}", "Query", cutoff);
    sqlx::query_as::<_, Tender>(queries::GET_CURRENT_TENDERS)
        .bind(to_storage(&cutoff))
        .fetch_all(db_manager.pool())
        .await
}

/// 종료 공고 목록 조회
pub async fn get_past_tenders(
    db_manager: &DatabaseManager,
    cutoff: NaiveDateTime,
) -> Result<Vec<Tender>, SqlxError> {
    info!("{:<12} --> 종료 공고 조회 기준: {}", "Query", cutoff);
    sqlx::query_as::<_, Tender>(queries::GET_PAST_TENDERS)
        .bind(to_storage(&cutoff))
        .fetch_all(db_manager.pool())
        .await
}

/// 공고 조회
pub async fn get_tender(
    db_manager: &DatabaseManager,
    tender_id: i64,
) -> Result<Option<Tender>, SqlxError> {
    info!("{:<12} --> 공고 조회 id: {}", "Query", tender_id);
    sqlx::query_as::<_, Tender>(queries::GET_TENDER)
        .bind(tender_id)
        .fetch_optional(db_manager.pool())
        .await
}

/// 공고 입찰 조회
pub async fn get_tender_bids(
    db_manager: &DatabaseManager,
    tender_id: i64,
) -> Result<Vec<Bid>, SqlxError> {
    info!("{:<12} --> 공고 입찰 조회 id: {}", "Query", tender_id);
    sqlx::query_as::<_, Bid>(queries::GET_TENDER_BIDS)
        .bind(tender_id)
        .fetch_all(db_manager.pool())
        .await
}

// endregion: --- Query Handlers
