// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[must_use]
pub fn map_error(error: &ApiError) -> u16 {
    match error.code {
        ApiErrorCode::ValidationFailed | ApiErrorCode::InvalidQueryParameter => 400,
        ApiErrorCode::InvalidCredentials | ApiErrorCode::Unauthorized => 401,
        ApiErrorCode::NotFound => 404,
        _ => 500,
    }
}
