#![forbid(unsafe_code)]

mod convert;
mod dto;
mod error_mapping;
mod errors;
mod payload;
mod wire;

pub use convert::{
    admin_user_to_dto, contact_to_dto, course_to_dto, payment_to_dto, service_to_dto,
    student_to_dto,
};
pub use dto::{
    AdminUserDto, ContactDto, CourseDto, LoginResponseDto, PaymentDto, ServiceDto, StudentDto,
};
pub use error_mapping::map_error;
pub use errors::{ApiError, ApiErrorCode, FieldError};
pub use payload::{
    parse_admission_payload, parse_contact_payload, parse_course_payload, parse_login_payload,
    parse_service_payload, parse_student_payload, LoginCredentials,
};
pub use wire::{created_body, error_body, success_body};

pub const CRATE_NAME: &str = "elimu-api";
pub const API_VERSION: &str = "v1";
