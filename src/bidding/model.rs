use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// 입찰 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bid {
    pub id: i64,
    pub tender_id: i64,
    pub institution_id: i64,
    pub bid_amount: f64,
    #[serde(with = "crate::tender::datetime::storage_format")]
    pub timestamp: NaiveDateTime,
}

// 저장 전 입찰 (타임스탬프는 서버에서 부여)
#[derive(Debug, Clone, PartialEq)]
pub struct NewBid {
    pub tender_id: i64,
    pub institution_id: i64,
    pub bid_amount: f64,
    pub timestamp: NaiveDateTime,
}
