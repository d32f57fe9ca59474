use actix_web::error::QueryPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::warn;
use thiserror::Error;

use super::models::ErrorResponse;
use crate::estimator::EstimateError;

/// Error codes carried in the `error` field of JSON error bodies.
pub const ERR_RPC: u8 = 1;
pub const ERR_MISSING_PARAM: u8 = 2;
pub const ERR_INVALID_NUMBER: u8 = 3;
pub const ERR_ZERO_NETWORK: u8 = 4;
pub const ERR_BAD_QUERY: u8 = 5;

/// Detail returned for any node failure; the cause is only logged.
pub const RPC_UNAVAILABLE_DETAIL: &str = "node RPC unavailable";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No {0} specified")]
    MissingParameter(&'static str),

    #[error("Invalid {param}: `{value}` is not a finite number")]
    InvalidNumber { param: &'static str, value: String },

    #[error("Malformed query string: {0}")]
    BadQuery(String),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

impl ApiError {
    pub fn code(&self) -> u8 {
        match self {
            ApiError::MissingParameter(_) => ERR_MISSING_PARAM,
            ApiError::InvalidNumber { .. } => ERR_INVALID_NUMBER,
            ApiError::BadQuery(_) => ERR_BAD_QUERY,
            ApiError::Estimate(EstimateError::Rpc(_)) => ERR_RPC,
            ApiError::Estimate(EstimateError::DivisionByZero(_)) => ERR_ZERO_NETWORK,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_)
            | ApiError::InvalidNumber { .. }
            | ApiError::BadQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Estimate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_detail = match self {
            ApiError::Estimate(e @ EstimateError::Rpc(_)) => {
                warn!("estimate failed: {e}");
                RPC_UNAVAILABLE_DETAIL.to_string()
            }
            ApiError::Estimate(e) => {
                warn!("estimate failed: {e}");
                e.to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.code(),
            error_detail,
        })
    }
}

/// Maps extractor failures on query strings to the JSON error body.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadQuery(err.to_string()).into()
}

/// First value of `name` in the query pairs; later repeats are ignored.
pub fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Parse a required numeric query value.
pub fn parse_amount(param: &'static str, raw: Option<&str>) -> Result<f64, ApiError> {
    let raw = raw.ok_or(ApiError::MissingParameter(param))?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ApiError::InvalidNumber {
            param,
            value: raw.to_string(),
        }),
    }
}
