/// 예산 기준 입찰 유효성 판정
/// 예산 초과 입찰도 저장은 되며, 조회 시점에 유효/무효로 나눈다.
// region:    --- Imports
use crate::bidding::model::Bid;
use std::cmp::Ordering;

// endregion: --- Imports

// region:    --- Bid Admission
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BidAdmission {
    /// 금액 오름차순
    pub valid: Vec<Bid>,
    pub invalid: Vec<Bid>,
}

impl BidAdmission {
    pub fn partition(maximum_budget: f64, bids: impl IntoIterator<Item = Bid>) -> Self {
        let (mut valid, invalid): (Vec<Bid>, Vec<Bid>) = bids
            .into_iter()
            .partition(|bid| is_within_budget(bid.bid_amount, maximum_budget));
        valid.sort_by(ascending);

        Self { valid, invalid }
    }

    /// 최고 유효 입찰 (동액이면 먼저 들어온 입찰)
    pub fn top_bid(&self) -> Option<&Bid> {
        self.valid.iter().min_by(|a, b| ranking(a, b))
    }

    pub fn no_bids(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    /// 입찰은 있으나 유효한 입찰이 없음
    pub fn no_valid_bids(&self) -> bool {
        self.valid.is_empty() && !self.invalid.is_empty()
    }
}

pub fn is_within_budget(bid_amount: f64, maximum_budget: f64) -> bool {
    bid_amount <= maximum_budget
}

fn ascending(a: &Bid, b: &Bid) -> Ordering {
    a.bid_amount
        .total_cmp(&b.bid_amount)
        .then_with(|| a.timestamp.cmp(&b.timestamp))
        .then_with(|| a.id.cmp(&b.id))
}

/// 낙찰 순서: 금액 내림차순, 시각 오름차순, id 오름차순
fn ranking(a: &Bid, b: &Bid) -> Ordering {
    b.bid_amount
        .total_cmp(&a.bid_amount)
        .then_with(|| a.timestamp.cmp(&b.timestamp))
        .then_with(|| a.id.cmp(&b.id))
}

// endregion: --- Bid Admission

// endregion: --- Tests
