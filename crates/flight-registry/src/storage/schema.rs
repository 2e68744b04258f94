//! Schema for flight list documents.
//!
//! A valid document is a JSON array of objects, each carrying a string
//! `destination`, an integer `flight number` and a string `type of plane`.
//! Extra properties are allowed.

use serde_json::Value;

use crate::flight::{integral_f64_to_i64, DESTINATION_KEY, FLIGHT_NUMBER_KEY, PLANE_TYPE_KEY};

/// JSON types the schema refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
    /// A JSON string.
    String,
    /// A JSON number without a fractional part that fits in an `i64`,
    /// whether written as `101` or `101.0`.
    Integer,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// A required property of a flight object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Property name.
    pub key: &'static str,
    /// Expected type.
    pub kind: JsonType,
}

/// Properties every flight object must carry, in declaration order.
pub const FLIGHT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: DESTINATION_KEY,
        kind: JsonType::String,
    },
    FieldSpec {
        key: FLIGHT_NUMBER_KEY,
        kind: JsonType::Integer,
    },
    FieldSpec {
        key: PLANE_TYPE_KEY,
        kind: JsonType::String,
    },
];

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location of the offending value, e.g. `$[1]["flight number"]`.
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at {})", self.message, self.path)
    }
}

/// Validate a parsed document against the flight list schema.
///
/// Returns every violation in document order; an empty vector means the
/// document is valid.
#[must_use]
pub fn validate(document: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();

    let Some(items) = document.as_array() else {
        violations.push(type_violation("$".to_string(), document, JsonType::Array));
        return violations;
    };

    for (index, item) in items.iter().enumerate() {
        let item_path = format!("$[{index}]");
        let Some(object) = item.as_object() else {
            violations.push(type_violation(item_path, item, JsonType::Object));
            continue;
        };

        for field in FLIGHT_FIELDS {
            if !object.contains_key(field.key) {
                violations.push(Violation {
                    path: item_path.clone(),
                    message: format!("'{}' is a required property", field.key),
                });
            }
        }

        for field in FLIGHT_FIELDS {
            if let Some(value) = object.get(field.key) {
                let field_path = format!("{item_path}[\"{}\"]", field.key);
                if let Some(violation) = check_type(field_path, value, field.kind) {
                    violations.push(violation);
                }
            }
        }
    }

    violations
}

fn check_type(path: String, value: &Value, kind: JsonType) -> Option<Violation> {
    let matches = match kind {
        JsonType::Array => value.is_array(),
        JsonType::Object => value.is_object(),
        JsonType::String => value.is_string(),
        JsonType::Integer => {
            if value.as_i64().is_some() {
                true
            } else if let Some(number) = value.as_f64().filter(|n| n.fract() == 0.0) {
                if integral_f64_to_i64(number).is_none() {
                    return Some(Violation {
                        path,
                        message: format!("{value} is out of range for 'integer'"),
                    });
                }
                true
            } else {
                false
            }
        }
    };

    (!matches).then(|| type_violation(path, value, kind))
}

fn type_violation(path: String, value: &Value, kind: JsonType) -> Violation {
    Violation {
        path,
        message: format!("{value} is not of type '{kind}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_document() {
        let document = json!([
            {"destination": "Rome", "flight number": 101, "type of plane": "Boeing"},
            {"destination": "Paris", "flight number": 202, "type of plane": "Airbus"}
        ]);
        assert!(validate(&document).is_empty());
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(validate(&json!([])).is_empty());
    }

    #[test]
    fn test_extra_properties_are_tolerated() {
        let document = json!([
            {"destination": "Rome", "flight number": 1, "type of plane": "Boeing", "gate": 4}
        ]);
        assert!(validate(&document).is_empty());
    }

    #[test]
    fn test_root_must_be_array() {
        let violations = validate(&json!({"destination": "Rome"}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "$");
        assert!(violations[0].message.ends_with("is not of type 'array'"));
    }

    #[test]
    fn test_items_must_be_objects() {
        let violations = validate(&json!(["Rome", 5]));
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].message, "\"Rome\" is not of type 'object'");
        assert_eq!(violations[1].path, "$[1]");
    }

    #[test]
    fn test_missing_flight_number() {
        let document = json!([{"destination": "Rome", "type of plane": "Boeing"}]);
        let violations = validate(&document);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "'flight number' is a required property");
        assert_eq!(violations[0].path, "$[0]");
    }

    #[test]
    fn test_wrong_types() {
        let document = json!([
            {"destination": 7, "flight number": "101", "type of plane": null}
        ]);
        let violations = validate(&document);

        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "7 is not of type 'string'",
                "\"101\" is not of type 'integer'",
                "null is not of type 'string'",
            ]
        );
        assert_eq!(violations[1].path, "$[0][\"flight number\"]");
    }

    #[test]
    fn test_integral_float_flight_number_is_accepted() {
        let document = json!([
            {"destination": "Rome", "flight number": 101.0, "type of plane": "Boeing"}
        ]);
        assert!(validate(&document).is_empty());
    }

    #[test]
    fn test_huge_float_flight_number_is_out_of_range() {
        let document = json!([
            {"destination": "Rome", "flight number": 1e20, "type of plane": "Boeing"}
        ]);
        let violations = validate(&document);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("out of range"));
    }

    #[test]
    fn test_missing_fields_reported_before_type_errors() {
        let violations = validate(&json!([{"destination": 3}]));
        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "'flight number' is a required property",
                "'type of plane' is a required property",
                "3 is not of type 'string'",
            ]
        );
    }

    #[test]
    fn test_fractional_flight_number_is_rejected() {
        let document = json!([
            {"destination": "Rome", "flight number": 10.5, "type of plane": "Boeing"}
        ]);
        let violations = validate(&document);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "10.5 is not of type 'integer'");
    }

    #[test]
    fn test_out_of_range_flight_number() {
        let document = json!([
            {"destination": "Rome", "flight number": u64::MAX, "type of plane": "Boeing"}
        ]);
        let violations = validate(&document);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("out of range"));
    }

    #[test]
    fn test_negative_flight_number_is_integer() {
        let document = json!([
            {"destination": "Rome", "flight number": -3, "type of plane": "Boeing"}
        ]);
        assert!(validate(&document).is_empty());
    }

    #[test]
    fn test_violations_in_document_order() {
        let document = json!([
            {"destination": "Rome", "flight number": 1, "type of plane": "Boeing"},
            {"flight number": 2, "type of plane": "Airbus"},
            {"destination": "Oslo", "flight number": 3}
        ]);
        let violations = validate(&document);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].path, "$[1]");
        assert!(violations[0].message.contains("destination"));
        assert_eq!(violations[1].path, "$[2]");
        assert!(violations[1].message.contains("type of plane"));
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation {
            path: "$[0]".to_string(),
            message: "'destination' is a required property".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "'destination' is a required property (at $[0])"
        );
    }

    #[test]
    fn test_json_type_display() {
        assert_eq!(JsonType::Array.to_string(), "array");
        assert_eq!(JsonType::Object.to_string(), "object");
        assert_eq!(JsonType::String.to_string(), "string");
        assert_eq!(JsonType::Integer.to_string(), "integer");
    }
}
