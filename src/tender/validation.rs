/// 폼 입력 검증
/// 저장 전에 모든 필드를 검사하고, 실패한 필드를 한꺼번에 돌려준다.
// region:    --- Imports
use crate::error::{AppError, FieldError};
use crate::tender::datetime::parse_form_datetime;
use crate::tender::model::NewTender;
use chrono::NaiveDateTime;
use serde::Deserialize;

// endregion: --- Imports

// region:    --- Forms
/// 공고 등록 폼
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TenderForm {
    pub name: String,
    pub description: String,
    pub institution: String,
    pub start_datetime: String,
    pub end_datetime: String,
    pub maximum_budget: String,
}

/// 입찰 폼
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BidForm {
    pub institution_id: String,
    pub bid_amount: String,
}

/// 검증된 입찰 입력
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BidInput {
    pub institution_id: i64,
    pub bid_amount: f64,
}

// endregion: --- Forms

// region:    --- Validation
impl TenderForm {
    pub fn validate(self) -> Result<NewTender, AppError> {
        let mut errors = Vec::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push(FieldError::new("name", "must not be empty"));
        }
        let institution_id = parse_id("institution", &self.institution, &mut errors);
        let start_datetime = parse_datetime("start_datetime", &self.start_datetime, &mut errors);
        let end_datetime = parse_datetime("end_datetime", &self.end_datetime, &mut errors);
        let maximum_budget = parse_amount("maximum_budget", &self.maximum_budget, &mut errors)
            .filter(|budget| {
                let ok = *budget >= 0.0;
                if !ok {
                    errors.push(FieldError::new("maximum_budget", "must not be negative"));
                }
                ok
            });

        if let (Some(start), Some(end)) = (start_datetime, end_datetime) {
            if end <= start {
                errors.push(FieldError::new(
                    "end_datetime",
                    "must be after start_datetime",
                ));
            }
        }

        match (institution_id, start_datetime, end_datetime, maximum_budget) {
            (Some(institution_id), Some(start_datetime), Some(end_datetime), Some(maximum_budget))
                if errors.is_empty() =>
            {
                Ok(NewTender {
                    name,
                    description: self.description.trim().to_string(),
                    institution_id,
                    start_datetime,
                    end_datetime,
                    maximum_budget,
                })
            }
            _ => Err(AppError::Validation(errors)),
        }
    }
}

impl BidForm {
    pub fn validate(self) -> Result<BidInput, AppError> {
        let mut errors = Vec::new();

        let institution_id = parse_id("institution_id", &self.institution_id, &mut errors);
        let bid_amount = parse_amount("bid_amount", &self.bid_amount, &mut errors).filter(|amount| {
            let ok = *amount > 0.0;
            if !ok {
                errors.push(FieldError::new("bid_amount", "must be greater than zero"));
            }
            ok
        });

        match (institution_id, bid_amount) {
            (Some(institution_id), Some(bid_amount)) if errors.is_empty() => Ok(BidInput {
                institution_id,
                bid_amount,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

fn parse_id(field: &'static str, raw: &str, errors: &mut Vec<FieldError>) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(FieldError::new(field, "must be an integer"));
            None
        }
    }
}

fn parse_amount(field: &'static str, raw: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return None;
    }
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Some(amount),
        _ => {
            errors.push(FieldError::new(field, "must be a number"));
            None
        }
    }
}

fn parse_datetime(
    field: &'static str,
    raw: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDateTime> {
    if raw.trim().is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return None;
    }
    let parsed = parse_form_datetime(raw);
    if parsed.is_none() {
        errors.push(FieldError::new(
            field,
            "must look like YYYY-MM-DDTHH:MM or YYYY-MM-DD HH:MM:SS",
        ));
    }
    parsed
}

// endregion: --- Validation

// endregion: --- Tests
