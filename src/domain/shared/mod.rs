pub mod error_dto;

pub use error_dto::{ErrorResponse, FailureResponse};
