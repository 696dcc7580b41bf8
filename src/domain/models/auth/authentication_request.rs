//! 라우트별 인증 요구사항

use crate::domain::entities::accounts::Role;

/// 라우트가 요구하는 역할
#[derive(Debug, Clone)]
pub enum RequiredRole {
    Single(Role),
    Any(Vec<Role>),
}

impl RequiredRole {
    /// 계정의 현재 역할 하나와 비교합니다.
    pub fn is_satisfied(&self, role: Role) -> bool {
        match self {
            RequiredRole::Single(required_role) => *required_role == role,
            RequiredRole::Any(required_roles) => required_roles.contains(&role),
        }
    }
}
