//! Field-name convention mapping between the API and storage.
//!
//! Clients speak camelCase (`homeTeamId`), the database speaks snake_case
//! (`home_team_id`). Conversion is applied per record and only to the keys an
//! entity declares in its [`Schema`], so nested free-form data such as match
//! event payloads passes through with its keys untouched.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Explicit storage-side field list of a record or request body.
pub trait Schema {
    const FIELDS: &'static [&'static str];
}

impl<T: Schema> Schema for Vec<T> {
    const FIELDS: &'static [&'static str] = T::FIELDS;
}

/// `home_team_id` -> `homeTeamId`. A `_` or `-` followed by a lowercase
/// letter collapses into that letter upper-cased; everything else is kept.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' {
            if let Some(next) = chars.peek().copied().filter(|n| n.is_ascii_lowercase()) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// `homeTeamId` -> `home_team_id`. Every ASCII capital becomes `_` plus its
/// lowercase form.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

fn rename_keys(object: Map<String, Value>, rename: impl Fn(&str) -> Option<String>) -> Map<String, Value> {
    object
        .into_iter()
        .map(|(key, value)| match rename(key.as_str()) {
            Some(renamed) => (renamed, value),
            None => (key, value),
        })
        .collect()
}

fn map_records(value: Value, convert: &impl Fn(Map<String, Value>) -> Map<String, Value>) -> Value {
    match value {
        Value::Object(object) => Value::Object(convert(object)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(object) => Value::Object(convert(object)),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}

/// Renames the external keys of a record (or list of records) to their
/// storage names. Keys that do not map onto a declared field are left as-is.
pub fn keys_to_internal(value: Value, fields: &[&str]) -> Value {
    map_records(value, &|object: Map<String, Value>| {
        rename_keys(object, |key| {
            let snake = to_snake_case(key);
            fields.contains(&snake.as_str()).then_some(snake)
        })
    })
}

/// Renames the storage keys of a record (or list of records) to their
/// external names.
pub fn keys_to_external(value: Value, fields: &[&str]) -> Value {
    map_records(value, &|object: Map<String, Value>| {
        rename_keys(object, |key| fields.contains(&key).then(|| to_camel_case(key)))
    })
}

/// JSON body in the external (camelCase) convention.
///
/// As an extractor it converts the top-level keys to snake_case before
/// deserializing into `T`; as a response it serializes `T` and converts the
/// declared fields back to camelCase.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ExternalJson<T>
where
    T: DeserializeOwned + Schema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_data(rejection.body_text()))?;

        let payload = serde_json::from_value(keys_to_internal(body, T::FIELDS))?;
        Ok(ExternalJson(payload))
    }
}

impl<T> IntoResponse for ExternalJson<T>
where
    T: Serialize + Schema,
{
    fn into_response(self) -> Response {
        match serde_json::to_value(&self.0) {
            Ok(value) => Json(keys_to_external(value, T::FIELDS)).into_response(),
            Err(err) => AppError::Serialization(err.to_string()).into_response(),
        }
    }
}
