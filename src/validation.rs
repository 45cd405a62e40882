// Validation utilities module
// Turns validator output into the single message the API reports

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    Json,
};
use validator::{Validate, ValidationErrors};

/// Pick the client-facing message out of a set of validation errors
///
/// Field rules carry their own `message`; the first one found wins. Falls back
/// to `fallback` when no rule set a message.
pub fn first_message(errors: &ValidationErrors, fallback: &str) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| fallback.to_string())
}

/// Run `validate()` and reduce any failure to one message
pub fn check<T: Validate>(value: &T, fallback: &str) -> Result<(), String> {
    value.validate().map_err(|e| first_message(&e, fallback))
}

/// Unwrap a JSON body, treating an unreadable one as an empty object
///
/// A missing, non-JSON or mistyped body then fails field validation with the
/// route's usual message instead of producing axum's plain-text rejection.
pub fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!("Unreadable request body: {}", rejection.body_text());
            T::default()
        }
    }
}

/// Numeric path id, or `None` when the segment does not parse
///
/// No row can carry an unparseable id, so callers treat `None` as a mutation
/// that matched nothing.
pub fn path_id<T>(id: Result<axum::extract::Path<T>, PathRejection>) -> Option<T> {
    match id {
        Ok(axum::extract::Path(id)) => Some(id),
        Err(rejection) => {
            tracing::debug!("Unparseable path id: {}", rejection.body_text());
            None
        }
    }
}
