//! # Account Repositories
//!
//! ```rust,ignore
//! use crate::repositories::accounts::{AccountRepository, AccountStore};
//!
//! let repo = AccountRepository::new(&db);
//! repo.create_indexes().await?;
//! let account = repo.find_by_provider_id(AuthProvider::Google, "1234").await?;
//! ```

pub mod account_store;
pub mod account_repo;
#[cfg(test)]
pub mod in_memory;

pub use account_store::AccountStore;
pub use account_repo::{AccountRepository, ACCOUNTS_COLLECTION};
#[cfg(test)]
pub use in_memory::InMemoryAccountStore;
