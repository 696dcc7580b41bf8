pub mod request;
pub mod response;

pub use request::UpdateRoleRequest;
pub use response::AccountResponse;
