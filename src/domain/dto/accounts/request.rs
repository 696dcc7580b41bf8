use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::accounts::Role;
use crate::utils::string_utils::deserialize_optional_string;

/// 역할 변경 요청
///
/// `role`은 고정된 역할 이름 중 하나여야 하며, 그 외의 값은 역직렬화 단계에서 거부됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    pub role: Role,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "변경 사유는 500자 이하여야 합니다"))]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_role_request() {
        let request: UpdateRoleRequest =
            serde_json::from_str(r#"{"role": "reception", "reason": "front desk"}"#).unwrap();
        assert_eq!(request.role, Role::Reception);
        assert!(request.validate().is_ok());

        assert!(serde_json::from_str::<UpdateRoleRequest>(r#"{"role": "owner"}"#).is_err());

        let blank: UpdateRoleRequest =
            serde_json::from_str(r#"{"role": "staff", "reason": "   "}"#).unwrap();
        assert_eq!(blank.reason, None);

        let missing: UpdateRoleRequest = serde_json::from_str(r#"{"role": "staff"}"#).unwrap();
        assert_eq!(missing.reason, None);

        let too_long = UpdateRoleRequest { role: Role::Staff, reason: Some("x".repeat(501)) };
        assert!(too_long.validate().is_err());
    }
}
