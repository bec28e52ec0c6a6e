//! Presence and range checks for the create payload

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::CreateEventRequest;

/// Validated, strongly-typed fields of a new event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub max_attendees: u64,
}

/// Whether a payload value counts as present
///
/// `null`, `false`, `0` and `""` are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validate a create payload
///
/// `title`, `date`, `location` and `maxAttendees` must all be truthy, else
/// [`ValidationError::MissingFields`]. The one exception is a numeric `0`
/// attendee limit, which is present but out of range: like any value that is
/// not an integer above zero it yields
/// [`ValidationError::InvalidMaxAttendees`].
pub fn validate_create(request: &CreateEventRequest) -> Result<NewEvent, ValidationError> {
    let title = required_text(&request.title);
    let date = required_text(&request.date);
    let location = required_text(&request.location);
    let max_attendees = request
        .max_attendees
        .as_ref()
        .filter(|v| v.is_number() || is_truthy(v));

    let (Some(title), Some(date), Some(location), Some(max_attendees)) =
        (title, date, location, max_attendees)
    else {
        return Err(ValidationError::MissingFields);
    };

    let max_attendees =
        positive_integer(max_attendees).ok_or(ValidationError::InvalidMaxAttendees)?;

    let description = required_text(&request.description).unwrap_or_default();

    Ok(NewEvent {
        title,
        description,
        date,
        location,
        max_attendees,
    })
}

/// Text of a truthy value, or `None`
///
/// Strings are taken verbatim; other truthy values keep their JSON text,
/// so `20250101` becomes `"20250101"`.
fn required_text(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(v) if is_truthy(v) => Some(v.to_string()),
        _ => None,
    }
}

/// Accept integral numbers in `1..=u64::MAX`, including `10.0`
fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_u64() {
        return (n > 0).then_some(n);
    }
    if number.is_i64() {
        return None;
    }

    // Integral floats past u64::MAX (e.g. 1e20) have no stored representation
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f > 0.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> CreateEventRequest {
        serde_json::from_value(value).unwrap()
    }

    fn with_max_attendees(max_attendees: Value) -> CreateEventRequest {
        request(json!({
            "title": "Meetup",
            "date": "2025-01-01",
            "location": "HQ",
            "maxAttendees": max_attendees
        }))
    }

    #[test]
    fn test_valid_payload() {
        let new_event = validate_create(&request(json!({
            "title": "Meetup",
            "description": "Monthly sync",
            "date": "2025-01-01",
            "location": "HQ",
            "maxAttendees": 10
        })))
        .unwrap();

        assert_eq!(new_event.title, "Meetup");
        assert_eq!(new_event.description, "Monthly sync");
        assert_eq!(new_event.max_attendees, 10);
    }

    #[test]
    fn test_description_defaults_to_empty() {
        for falsy in [json!(null), json!(false), json!(0), json!("")] {
            let new_event = validate_create(&request(json!({
                "title": "Meetup",
                "date": "2025-01-01",
                "location": "HQ",
                "maxAttendees": 3,
                "description": falsy
            })))
            .unwrap();

            assert_eq!(new_event.description, "", "{}", falsy);
        }
    }

    #[test]
    fn test_non_string_description_kept() {
        let new_event = validate_create(&request(json!({
            "title": "Meetup",
            "date": "2025-01-01",
            "location": "HQ",
            "maxAttendees": 3,
            "description": 5
        })))
        .unwrap();

        assert_eq!(new_event.description, "5");
    }

    #[test]
    fn test_numeric_date_accepted() {
        let new_event = validate_create(&request(json!({
            "title": "Meetup",
            "date": 20250101,
            "location": "HQ",
            "maxAttendees": 5
        })))
        .unwrap();

        assert_eq!(new_event.date, "20250101");
    }

    #[test]
    fn test_each_missing_field_reports_all_fields() {
        let full = json!({
            "title": "Meetup",
            "date": "2025-01-01",
            "location": "HQ",
            "maxAttendees": 5
        });

        for field in ["title", "date", "location", "maxAttendees"] {
            let mut payload = full.clone();
            payload.as_object_mut().unwrap().remove(field);
            assert_eq!(
                validate_create(&request(payload)),
                Err(ValidationError::MissingFields),
                "missing {}",
                field
            );
        }
    }

    #[test]
    fn test_falsy_values_are_missing() {
        for falsy in [json!(null), json!(false), json!(0), json!("")] {
            let err = validate_create(&request(json!({
                "title": falsy,
                "date": "2025-01-01",
                "location": "HQ",
                "maxAttendees": 5
            })));
            assert_eq!(err, Err(ValidationError::MissingFields), "{}", falsy);
        }
    }

    #[test]
    fn test_falsy_max_attendees_is_missing() {
        for falsy in [json!(null), json!(false), json!("")] {
            assert_eq!(
                validate_create(&with_max_attendees(falsy.clone())),
                Err(ValidationError::MissingFields),
                "{}",
                falsy
            );
        }
    }

    #[test]
    fn test_invalid_max_attendees() {
        for bad in [
            json!(0),
            json!(-3),
            json!(2.5),
            json!("10"),
            json!(true),
            json!([1]),
            json!(1e20),
        ] {
            assert_eq!(
                validate_create(&with_max_attendees(bad.clone())),
                Err(ValidationError::InvalidMaxAttendees),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_integral_float_accepted() {
        let new_event = validate_create(&with_max_attendees(json!(10.0))).unwrap();
        assert_eq!(new_event.max_attendees, 10);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
    }
}
