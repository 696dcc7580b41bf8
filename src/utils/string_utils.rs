//! # 문자열 유틸리티
//!
//! 프로바이더 프로필과 요청 DTO에서 공통으로 쓰는 문자열 정리 함수들입니다.

use serde::Deserialize;

/// 앞뒤 공백을 제거하고, 비어 있으면 `None`으로 만듭니다.
///
/// 프로바이더가 내려주는 이메일/사진 URL처럼 빈 문자열이 섞여 오는 값에 사용합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `clean_optional_string`을 적용하는 serde deserializer
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "deserialize_optional_string")]
/// reason: Option<String>,   // "  hired  " → Some("hired"), "" → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Ann Lee ".to_string())), Some("Ann Lee".to_string()));
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Note {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            text: Option<String>,
        }

        let parse = |json: &str| serde_json::from_str::<Note>(json).unwrap().text;

        assert_eq!(parse(r#"{"text": "  예약 변경  "}"#), Some("예약 변경".to_string()));
        assert_eq!(parse(r#"{"text": "   "}"#), None);
        assert_eq!(parse(r#"{"text": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }
}
