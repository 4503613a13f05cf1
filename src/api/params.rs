//! Request parameter extraction
//!
//! Parameters come from the query string and, for url-encoded form bodies,
//! from the body. Body values override query values.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{Form, FromRequest, Query, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};

use crate::error::{AppError, AppResult};

/// All request parameters, keyed by name
#[derive(Debug, Default, Clone)]
pub struct RequestParams(pub HashMap<String, String>);

impl RequestParams {
    /// Value of a parameter, unless absent or blank
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Values of all required parameters, in order
    ///
    /// Fails with a validation error naming every missing parameter.
    pub fn require<const N: usize>(&self, names: [&'static str; N]) -> AppResult<[&str; N]> {
        let missing: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| self.get(name).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::missing(missing));
        }

        Ok(names.map(|name| self.get(name).unwrap_or_default()))
    }
}

/// Parse an identifier parameter
pub fn parse_id(name: &str, value: &str) -> AppResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("{} must be an integer", name)))
}

fn has_form_body(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for RequestParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(mut params) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if has_form_body(req.headers()) {
            let Form(body) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            params.extend(body);
        }

        Ok(Self(params))
    }
}
