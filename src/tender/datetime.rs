use chrono::{NaiveDateTime, SubsecRound, Utc};

/// 저장 형식 (`YYYY-MM-DD HH:MM:SS`)
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// HTML datetime-local 입력 포함
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// 폼 입력 시각 파싱, 지원하지 않는 형식은 None
pub fn parse_form_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// 저장 형식으로 변환
pub fn to_storage(value: &NaiveDateTime) -> String {
    value.format(STORAGE_FORMAT).to_string()
}

/// 현재 시각 (UTC, 초 단위)
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

/// 직렬화도 저장 형식 사용
/// `#[serde(with = "crate::tender::datetime::storage_format")]`
pub mod storage_format {
    use super::STORAGE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(STORAGE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, STORAGE_FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn datetime_local_input_gets_seconds_appended() {
        let parsed = parse_form_datetime("2024-02-01T09:00").unwrap();
        assert_eq!(parsed, at(9, 0, 0));
        assert_eq!(to_storage(&parsed), "2024-02-01 09:00:00");
    }

    #[test]
    fn accepts_space_separator_and_seconds() {
        assert_eq!(parse_form_datetime("2024-02-01 10:15"), Some(at(10, 15, 0)));
        assert_eq!(
            parse_form_datetime(" 2024-02-01T10:15:30 "),
            Some(at(10, 15, 30))
        );
        assert_eq!(
            parse_form_datetime("2024-02-01 10:15:30"),
            Some(at(10, 15, 30))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_form_datetime(""), None);
        assert_eq!(parse_form_datetime("tomorrow"), None);
        assert_eq!(parse_form_datetime("2024-02-30T09:00"), None);
        assert_eq!(parse_form_datetime("01/02/2024 09:00"), None);
    }

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Stamped {
        #[serde(with = "storage_format")]
        at: NaiveDateTime,
    }

    #[test]
    fn serializes_in_storage_format() {
        let json = serde_json::to_string(&Stamped { at: at(9, 0, 0) }).unwrap();
        assert_eq!(json, r#"{"at":"2024-02-01 09:00:00"}"#);

        let back: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, at(9, 0, 0));
    }

    #[test]
    fn now_has_no_subsecond_part() {
        assert_eq!(now().and_utc().timestamp_subsec_nanos(), 0);
    }
}
