use serde::{Deserialize, Deserializer};

/// Listing endpoints serve fixed pages of six documents; the frontend
/// derives page counts from this constant.
pub const PAGE_SIZE: i64 = 6;

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Zero-based page index supplied by the caller. `skip = page * PAGE_SIZE`;
/// total pages are computed client-side as `ceil(total / PAGE_SIZE)`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    pub fn offset(&self) -> i64 {
        self.page() * PAGE_SIZE
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_page() {
        let params = PageParams::default();
        assert_eq!(params.page(), 0);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 6);
    }

    #[test]
    fn test_second_page_skips_six() {
        // 14 documents in total: page 1 must return items 7-12.
        let params = PageParams { page: Some(1) };
        assert_eq!(params.offset(), 6);
        assert_eq!(params.limit(), 6);
    }

    #[test]
    fn test_negative_page_clamped() {
        let params = PageParams { page: Some(-3) };
        assert_eq!(params.page(), 0);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_deserialize_from_query_string_value() {
        let params: PageParams = serde_json::from_str(r#"{"page":"2"}"#).unwrap();
        assert_eq!(params.offset(), 12);
    }

    #[test]
    fn test_deserialize_empty_string_falls_back() {
        let params: PageParams = serde_json::from_str(r#"{"page":""}"#).unwrap();
        assert_eq!(params.page(), 0);
    }

    #[test]
    fn test_deserialize_missing_field() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.offset(), 0);
    }
}
