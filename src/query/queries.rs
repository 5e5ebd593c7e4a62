/// 진행 중 공고 목록 조회 (종료 시각이 기준 시각 이후)
pub const GET_CURRENT_TENDERS: &str = r#"
    SELECT id, name, description, institution_id, start_datetime, end_datetime, maximum_budget
    FROM tenders
    WHERE end_datetime > ?
    ORDER BY end_datetime ASC, id ASC
"#;

/// 종료 공고 목록 조회 (종료 시각이 기준 시각 이전)
pub const GET_PAST_TENDERS: &str = r#"
    SELECT id, name, description, institution_id, start_datetime, end_datetime, maximum_budget
    FROM tenders
    WHERE end_datetime <= ?
    ORDER BY end_datetime DESC, id DESC
"#;

/// 공고 조회
pub const GET_TENDER: &str =
    "SELECT id, name, description, institution_id, start_datetime, end_datetime, maximum_budget FROM tenders WHERE id = ?";

/// 공고 입찰 조회
pub const GET_TENDER_BIDS: &str = r#"
    SELECT id, tender_id, institution_id, bid_amount, timestamp
    FROM bids
    WHERE tender_id = ?
    ORDER BY timestamp ASC, id ASC
"#;

/// 공고 등록
pub const INSERT_TENDER: &str = r#"
    INSERT INTO tenders (name, description, institution_id, start_datetime, end_datetime, maximum_budget)
    VALUES (?, ?, ?, ?, ?, ?)
"#;

/// 입찰 등록
pub const INSERT_BID: &str =
    "INSERT INTO bids (tender_id, institution_id, bid_amount, timestamp) VALUES (?, ?, ?, ?)";
