use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use super::field_error::ValidationErrors;

/// Length bounds for a text field, counted in characters.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub label: &'static str,
    pub min: usize,
    pub max: Option<usize>,
}

impl TextRule {
    pub const fn new(label: &'static str, min: usize, max: Option<usize>) -> Self {
        Self { label, min, max }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListRule {
    pub label: &'static str,
    /// Reported when the list is missing or empty.
    pub empty_message: &'static str,
    /// When set, blank items are rejected with this message.
    pub blank_item_message: Option<&'static str>,
}

/// Reads fields out of an untrusted JSON object and collects every violation
/// instead of stopping at the first one.
///
/// Each accessor returns `None` when the field is absent or rejected; callers
/// check [`PayloadReader::finish`] before assembling their typed input.
pub struct PayloadReader<'a> {
    object: Option<&'a Map<String, Value>>,
    errors: ValidationErrors,
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a Value) -> Self {
        let mut errors = ValidationErrors::default();
        let object = payload.as_object();
        if object.is_none() {
            errors.push("payload", "Payload must be a JSON object");
        }

        Self { object, errors }
    }

    /// Present and not `null`.
    fn value(&self, field: &str) -> Option<&'a Value> {
        self.object
            .and_then(|o| o.get(field))
            .filter(|v| !v.is_null())
    }

    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(field, message);
    }

    pub fn check(&mut self, field: &str, valid: bool, message: &str) {
        if !valid {
            self.reject(field, message);
        }
    }

    pub fn required_text(&mut self, field: &str, rule: TextRule) -> Option<String> {
        let Some(value) = self.value(field) else {
            self.reject(field, format!("{} is required", rule.label));
            return None;
        };

        let Some(text) = value.as_str() else {
            self.reject(field, format!("{} must be a string", rule.label));
            return None;
        };

        let len = text.chars().count();
        if len < rule.min {
            let message = if rule.min <= 1 {
                format!("{} is required", rule.label)
            } else {
                format!(
                    "{} must be at least {} characters long",
                    rule.label, rule.min
                )
            };
            self.reject(field, message);
            return None;
        }

        if let Some(max) = rule.max {
            if len > max {
                self.reject(
                    field,
                    format!("{} must be at most {} characters", rule.label, max),
                );
                return None;
            }
        }

        Some(text.to_string())
    }

    /// Blank strings count as absent.
    pub fn optional_text(&mut self, field: &str, rule: TextRule) -> Option<String> {
        let value = self.value(field)?;

        let Some(text) = value.as_str() else {
            self.reject(field, format!("{} must be a string", rule.label));
            return None;
        };

        if text.trim().is_empty() {
            return None;
        }

        if let Some(max) = rule.max {
            if text.chars().count() > max {
                self.reject(field, format!("{} too long", rule.label));
                return None;
            }
        }

        Some(text.to_string())
    }

    pub fn required_enum<E: FromStr>(&mut self, field: &str, message: &str) -> Option<E> {
        match self.value(field).and_then(Value::as_str).map(E::from_str) {
            Some(Ok(parsed)) => Some(parsed),
            _ => {
                self.reject(field, message);
                None
            }
        }
    }

    pub fn required_date(&mut self, field: &str, message: &str) -> Option<NaiveDate> {
        match self.value(field).and_then(Value::as_str).and_then(parse_calendar_date) {
            Some(date) => Some(date),
            None => {
                self.reject(field, message);
                None
            }
        }
    }

    /// Missing, `null` and `""` all mean "no date".
    pub fn optional_date(&mut self, field: &str, message: &str) -> Option<NaiveDate> {
        let value = self.value(field)?;

        match value.as_str() {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => match parse_calendar_date(raw) {
                Some(date) => Some(date),
                None => {
                    self.reject(field, message);
                    None
                }
            },
            None => {
                self.reject(field, message);
                None
            }
        }
    }

    /// Accepts a JSON number or a numeric string; `""` counts as absent.
    pub fn optional_integer(
        &mut self,
        field: &str,
        range: RangeInclusive<i32>,
        message: &str,
    ) -> Option<i32> {
        let value = self.value(field)?;

        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if s.trim().is_empty() => return None,
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        let parsed = number
            .filter(|n| n.is_finite() && n.fract() == 0.0)
            .filter(|n| *n >= f64::from(*range.start()) && *n <= f64::from(*range.end()))
            .map(|n| n as i32);

        if parsed.is_none() {
            self.reject(field, message);
        }
        parsed
    }

    pub fn string_list(&mut self, field: &str, rule: ListRule) -> Option<Vec<String>> {
        let Some(value) = self.value(field) else {
            self.reject(field, rule.empty_message);
            return None;
        };

        let Some(items) = value.as_array() else {
            self.reject(field, format!("{} must be a list of strings", rule.label));
            return None;
        };

        if items.is_empty() {
            self.reject(field, rule.empty_message);
            return None;
        }

        let mut list = Vec::with_capacity(items.len());
        for item in items {
            let Some(text) = item.as_str() else {
                self.reject(field, format!("{} must be a list of strings", rule.label));
                return None;
            };

            if let Some(message) = rule.blank_item_message {
                if text.trim().is_empty() {
                    self.reject(field, message);
                    return None;
                }
            }

            list.push(text.to_string());
        }

        Some(list)
    }

    /// Absolute URL check; blank counts as absent.
    pub fn optional_url(&mut self, field: &str, max: usize, message: &str) -> Option<String> {
        let value = self.value(field)?;

        let Some(raw) = value.as_str() else {
            self.reject(field, message);
            return None;
        };

        if raw.trim().is_empty() {
            return None;
        }

        if raw.chars().count() > max || url::Url::parse(raw).is_err() {
            self.reject(field, message);
            return None;
        }

        Some(raw.to_string())
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// `YYYY-MM-DD`, RFC 3339, or a naive ISO date-time; only the date is kept.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|d| d.date())
        })
}

/// The instant named by a date-time string; `None` for plain dates.
/// Values without an offset are read as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|d| d.with_timezone(&Utc))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|d| d.and_utc())
        })
}
