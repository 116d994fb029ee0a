//! Declarative request validation for the products resource.
//!
//! Each operation has an ordered list of pure predicate+message rules
//! evaluated against the raw JSON body. Every failed rule becomes its own
//! entry in the `400 {"errors":[...]}` response, so a single bad field can
//! report several violations at once (a missing `price` fails the numeric,
//! non-empty and positivity checks independently). The typed DTO is built
//! only after all rules pass.

use axum_helpers::FieldError;
use serde_json::Value;

use crate::models::{CreateProduct, UpdateProduct};

pub const NAME_EMPTY: &str = "The name cannot be empty";
pub const PRICE_NOT_VALID: &str = "Price not valid";
pub const PRICE_EMPTY: &str = "The price cannot be empty";
pub const AVAILABILITY_NOT_VALID: &str = "Availability value not valid";

/// A single validation rule: field, message, and the predicate that must hold
struct Rule {
    path: &'static str,
    msg: &'static str,
    check: fn(Option<&Value>) -> bool,
}

const CREATE_RULES: &[Rule] = &[
    Rule {
        path: "name",
        msg: NAME_EMPTY,
        check: name_non_empty,
    },
    Rule {
        path: "price",
        msg: PRICE_NOT_VALID,
        check: price_numeric,
    },
    Rule {
        path: "price",
        msg: PRICE_EMPTY,
        check: price_non_empty,
    },
    Rule {
        path: "price",
        msg: PRICE_NOT_VALID,
        check: price_positive,
    },
];

const UPDATE_RULES: &[Rule] = &[
    Rule {
        path: "name",
        msg: NAME_EMPTY,
        check: name_non_empty,
    },
    Rule {
        path: "price",
        msg: PRICE_NOT_VALID,
        check: price_numeric,
    },
    Rule {
        path: "price",
        msg: PRICE_EMPTY,
        check: price_non_empty,
    },
    Rule {
        path: "price",
        msg: PRICE_NOT_VALID,
        check: price_positive,
    },
    Rule {
        path: "availability",
        msg: AVAILABILITY_NOT_VALID,
        check: availability_boolean,
    },
];

/// Validate a create request body and build the typed DTO.
///
/// Rules: `name` non-empty; `price` numeric, non-empty, and greater than
/// zero. `availability` is optional and passed through when boolean.
pub fn validate_create(body: &Value) -> Result<CreateProduct, Vec<FieldError>> {
    let violations = check_rules(CREATE_RULES, body);
    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(CreateProduct {
        name: string_field(body, "name"),
        price: numeric_field(body, "price"),
        availability: body.get("availability").and_then(Value::as_bool),
    })
}

/// Validate a full-update request body and build the typed DTO.
///
/// The create rules plus a mandatory boolean `availability`.
pub fn validate_update(body: &Value) -> Result<UpdateProduct, Vec<FieldError>> {
    let violations = check_rules(UPDATE_RULES, body);
    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(UpdateProduct {
        name: string_field(body, "name"),
        price: numeric_field(body, "price"),
        availability: body.get("availability").and_then(Value::as_bool).unwrap_or_default(),
    })
}

fn check_rules(rules: &[Rule], body: &Value) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|rule| !(rule.check)(body.get(rule.path)))
        .map(|rule| FieldError::body(rule.msg, rule.path))
        .collect()
}

/// Numeric interpretation of a JSON value: numbers, or strings that parse
/// as one (`"50"` counts as numeric, `"hola"` does not)
fn numeric(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn name_non_empty(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

fn price_numeric(value: Option<&Value>) -> bool {
    numeric(value).is_some()
}

fn price_non_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn price_positive(value: Option<&Value>) -> bool {
    numeric(value).is_some_and(|price| price > 0.0)
}

fn availability_boolean(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(_)))
}

// The *_field helpers run after the rules, so the conversions cannot miss.
fn string_field(body: &Value, path: &str) -> String {
    body.get(path)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn numeric_field(body: &Value, path: &str) -> f64 {
    numeric(body.get(path)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_empty_body_reports_four_errors() {
        let errors = validate_create(&json!({})).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].msg, NAME_EMPTY);
        let price_errors: Vec<_> = errors.iter().filter(|e| e.path == "price").collect();
        assert_eq!(price_errors.len(), 3);
    }

    #[test]
    fn test_create_zero_price_reports_single_error() {
        let errors =
            validate_create(&json!({"name": "mouse testing", "price": 0})).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, PRICE_NOT_VALID);
        assert_eq!(errors[0].path, "price");
    }

    #[test]
    fn test_create_non_numeric_price_reports_two_errors() {
        let errors =
            validate_create(&json!({"name": "Mouse testing", "price": "hola"})).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.path == "price"));
    }

    #[test]
    fn test_create_negative_price_rejected() {
        let errors = validate_create(&json!({"name": "mouse", "price": -5})).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, PRICE_NOT_VALID);
    }

    #[test]
    fn test_create_valid_body_builds_dto() {
        let input = validate_create(&json!({"name": "Mouse testing", "price": 50})).unwrap();

        assert_eq!(input.name, "Mouse testing");
        assert_eq!(input.price, 50.0);
        assert_eq!(input.availability, None);
    }

    #[test]
    fn test_create_accepts_numeric_string_price() {
        let input = validate_create(&json!({"name": "mouse", "price": "49.9"})).unwrap();
        assert_eq!(input.price, 49.9);
    }

    #[test]
    fn test_create_passes_availability_through() {
        let input =
            validate_create(&json!({"name": "mouse", "price": 10, "availability": false}))
                .unwrap();
        assert_eq!(input.availability, Some(false));
    }

    #[test]
    fn test_update_empty_body_reports_five_errors() {
        let errors = validate_update(&json!({})).unwrap_err();

        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| e.msg == AVAILABILITY_NOT_VALID));
    }

    #[test]
    fn test_update_requires_boolean_availability() {
        let errors = validate_update(
            &json!({"name": "Monitor curvo", "price": 12, "availability": "yes"}),
        )
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, AVAILABILITY_NOT_VALID);
    }

    #[test]
    fn test_update_valid_body_builds_dto() {
        let input = validate_update(
            &json!({"name": "Monitor curvo", "price": 12, "availability": true}),
        )
        .unwrap();

        assert_eq!(input.name, "Monitor curvo");
        assert_eq!(input.price, 12.0);
        assert!(input.availability);
    }

    #[test]
    fn test_non_object_body_fails_all_field_rules() {
        let errors = validate_update(&json!(null)).unwrap_err();
        assert_eq!(errors.len(), 5);
    }
}
