pub mod error;
pub mod handlers;
pub mod id;
pub mod request;
