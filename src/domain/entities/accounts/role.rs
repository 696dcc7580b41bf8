//! 계정 역할

use std::fmt;
use serde::{Deserialize, Serialize};

/// 계정 역할
///
/// 고정된 열거형이며, 인가는 계정의 현재 역할 필드 하나와 비교해서 결정합니다.
/// 새 계정은 항상 [`Role::Customer`]로 시작합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Admin,
    Manager,
    Inventory,
    Reception,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Inventory => "inventory",
            Role::Reception => "reception",
            Role::Staff => "staff",
        }
    }

    /// 관리 화면에 접근하는 내부 역할인지 여부
    pub fn is_staff_side(&self) -> bool {
        !matches!(self, Role::Customer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
