//! Structural validation of untrusted API payloads
//!
//! The status API is an external contract, so every field is checked for
//! presence and type before it is read. Checks run in a fixed order and each
//! failure maps to its own [`ShapeError`] variant.

use serde_json::Value;

use crate::error::ShapeError;
use crate::homework::{Homework, HomeworkStatus};

/// Check the top-level payload and return its homework list
pub fn validate_response(payload: &Value) -> Result<&[Value], ShapeError> {
    let object = payload.as_object().ok_or(ShapeError::NotAnObject)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(ShapeError::MissingHomeworks)?;
    let homeworks = homeworks.as_array().ok_or(ShapeError::HomeworksNotAList)?;
    Ok(homeworks.as_slice())
}

/// Read the server's `current_date` from the payload
pub fn validate_current_date(payload: &Value) -> Result<i64, ShapeError> {
    let object = payload.as_object().ok_or(ShapeError::NotAnObject)?;
    let current_date = object
        .get("current_date")
        .ok_or(ShapeError::MissingCurrentDate)?;
    current_date
        .as_i64()
        .ok_or(ShapeError::CurrentDateNotAnInteger)
}

/// Check a single homework record and extract its name and status
pub fn validate_record(record: &Value) -> Result<Homework, ShapeError> {
    let object = record.as_object().ok_or(ShapeError::NotAnObject)?;
    let status = object.get("status").ok_or(ShapeError::MissingStatus)?;
    let name = object
        .get("homework_name")
        .ok_or(ShapeError::MissingHomeworkName)?;

    let code = status.as_str().ok_or(ShapeError::StatusNotAString)?;
    let status = HomeworkStatus::from_code(code)
        .ok_or_else(|| ShapeError::UnknownStatus(code.to_string()))?;
    let name = name.as_str().ok_or(ShapeError::HomeworkNameNotAString)?;

    Ok(Homework {
        name: name.to_string(),
        status,
    })
}
