pub mod account;
pub mod role;

pub use account::Account;
pub use role::Role;
