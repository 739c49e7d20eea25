//! Field checks shared by the scanner, lookup and share sections

pub use crate::error::ValidationError;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// A named block of the BookScan config (`[scanner]`, `[lookup]`, `[share]`)
pub trait ConfigSection: Default {
    /// Checks every field and reports all failures at once
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Overlays `other` onto this section
    fn merge(&mut self, other: Self);

    /// Table name used in TOML and in error paths
    fn section_name(&self) -> &'static str;
}

/// Field checks returning a `ValidationError` keyed by the field path
pub struct Validator;

impl Validator {
    /// Durations, timeouts and similar bounded numbers
    pub fn in_range<T>(
        value: T,
        bounds: RangeInclusive<T>,
        field: &str,
    ) -> Result<(), ValidationError>
    where
        T: PartialOrd + Display + Copy,
    {
        if bounds.contains(&value) {
            return Ok(());
        }

        Err(ValidationError::with_value(
            field,
            format!("must be between {} and {}", bounds.start(), bounds.end()),
            value,
        ))
    }

    /// Text shown to users or sent on the wire, e.g. share titles
    pub fn not_blank(value: &str, field: &str) -> Result<(), ValidationError> {
        match value.trim() {
            "" => Err(ValidationError::new(field, "must not be blank")),
            _ => Ok(()),
        }
    }

    /// Absolute http(s) endpoint such as the lookup base URL
    pub fn http_url(value: &str, field: &str) -> Result<(), ValidationError> {
        let host = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"))
            .filter(|rest| !rest.is_empty() && !rest.starts_with('/'));

        host.map(|_| ()).ok_or_else(|| {
            ValidationError::with_value(field, "must be an http:// or https:// URL", value)
        })
    }

    /// Gathers the failures of several checks
    pub fn collect(
        checks: impl IntoIterator<Item = Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
