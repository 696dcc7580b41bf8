pub mod authenticated_user;
pub mod authentication_request;
pub mod request_meta;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::RequiredRole;
pub use request_meta::RequestMeta;
