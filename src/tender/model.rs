use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// 입찰 공고 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tender {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub institution_id: i64,
    #[serde(with = "crate::tender::datetime::storage_format")]
    pub start_datetime: NaiveDateTime,
    #[serde(with = "crate::tender::datetime::storage_format")]
    pub end_datetime: NaiveDateTime,
    pub maximum_budget: f64,
}

// 검증을 통과한 신규 공고
#[derive(Debug, Clone, PartialEq)]
pub struct NewTender {
    pub name: String,
    pub description: String,
    pub institution_id: i64,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub maximum_budget: f64,
}
