/// 공고 라이프사이클 판정
/// 상태 컬럼은 없고, 종료 시각과 현재 시각(유예 시간 포함)으로만 진행/종료를 판단한다.
/// 목록 화면과 상세 화면 모두 같은 정책을 사용한다.
// region:    --- Imports
use crate::bidding::admission::BidAdmission;
use crate::bidding::model::Bid;
use crate::tender::model::Tender;
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

// endregion: --- Imports

// region:    --- Lifecycle Policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Active,
    Concluded,
}

/// 라이프사이클 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicy {
    grace_offset: Duration,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self::new(Duration::zero())
    }
}

impl LifecyclePolicy {
    pub fn new(grace_offset: Duration) -> Self {
        Self { grace_offset }
    }

    /// 분 단위 유예 시간으로 생성, 범위를 벗어나면 None
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        Duration::try_minutes(minutes).map(Self::new)
    }

    pub fn grace_offset(&self) -> Duration {
        self.grace_offset
    }

    /// 목록 기준 시각: 종료 시각이 이보다 뒤면 진행 중
    pub fn listing_cutoff(&self, now: NaiveDateTime) -> NaiveDateTime {
        match now.checked_add_signed(self.grace_offset) {
            Some(cutoff) => cutoff,
            None if self.grace_offset < Duration::zero() => NaiveDateTime::MIN,
            None => NaiveDateTime::MAX,
        }
    }

    pub fn classify(&self, end_datetime: NaiveDateTime, now: NaiveDateTime) -> Lifecycle {
        if end_datetime > self.listing_cutoff(now) {
            Lifecycle::Active
        } else {
            Lifecycle::Concluded
        }
    }

    /// 공고 현황 계산
    pub fn evaluate(&self, tender: &Tender, bids: Vec<Bid>, now: NaiveDateTime) -> TenderStanding {
        let admission = BidAdmission::partition(tender.maximum_budget, bids);
        let no_bids = admission.no_bids();

        match self.classify(tender.end_datetime, now) {
            Lifecycle::Active => TenderStanding::Active {
                highest_bid: admission.top_bid().map(|bid| bid.bid_amount),
                no_valid_bids: admission.no_valid_bids(),
                no_bids,
                valid_bids: admission.valid,
            },
            Lifecycle::Concluded => TenderStanding::Concluded {
                winner: admission.top_bid().cloned(),
                no_bids,
            },
        }
    }
}

// endregion: --- Lifecycle Policy

// region:    --- Tender Standing
/// 공고 현황
/// 진행 중이면 유효 입찰 목록과 최고가, 종료되었으면 낙찰 입찰
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TenderStanding {
    Active {
        highest_bid: Option<f64>,
        valid_bids: Vec<Bid>,
        no_bids: bool,
        no_valid_bids: bool,
    },
    Concluded {
        winner: Option<Bid>,
        no_bids: bool,
    },
}

impl TenderStanding {
    pub fn lifecycle(&self) -> Lifecycle {
        match self {
            TenderStanding::Active { .. } => Lifecycle::Active,
            TenderStanding::Concluded { .. } => Lifecycle::Concluded,
        }
    }

    /// 화면 표시용 요약 문구
    pub fn summary(&self) -> String {
        match self {
            TenderStanding::Active { no_bids: true, .. } => "No bids yet".to_string(),
            TenderStanding::Active {
                no_valid_bids: true,
                ..
            } => "No valid bids".to_string(),
            TenderStanding::Active {
                highest_bid: Some(amount),
                ..
            } => format!("Highest bid: {}", amount),
            TenderStanding::Active { .. } => "No valid bids".to_string(),
            TenderStanding::Concluded {
                winner: Some(bid), ..
            } => format!("Winner: institution {}", bid.institution_id),
            TenderStanding::Concluded { winner: None, .. } => "No winner".to_string(),
        }
    }
}

// endregion: --- Tender Standing

// endregion: --- Tests
