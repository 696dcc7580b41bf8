pub mod audit_repo;

pub use audit_repo::{AuditLogRepository, AuditLogStore, AUDIT_LOGS_COLLECTION};
#[cfg(test)]
pub use audit_repo::in_memory::InMemoryAuditLogStore;
