//! Passenger field validation.
//!
//! Every field a passenger supplies is one [`FieldKind`]. Each kind owns a
//! formatter and an acceptance rule: [`validate`] either returns the
//! formatted value that goes into the passenger table, or a [`Rejection`]
//! with a reason the operator can act on. Validating an already formatted
//! value returns it unchanged.
//!
//! # Examples
//!
//! ```
//! use magnolia::validation::{validate, FieldKind};
//!
//! let surname = validate(FieldKind::Surname, "  o'brien ").unwrap();
//! assert_eq!(surname.to_string(), "O'Brien");
//!
//! let rejection = validate(FieldKind::Passport, "AB-123").unwrap_err();
//! assert_eq!(rejection.field, FieldKind::Passport);
//! ```

mod countries;

#[cfg(test)]
mod proptests;

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::luggage::Luggage;

pub use countries::{is_known_country, COUNTRIES};

/// Date format for dates of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The kinds of passenger input the booking desk accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Given name(s).
    GivenNames,
    /// Family name.
    Surname,
    /// Date of birth, `YYYY-MM-DD`.
    DateOfBirth,
    /// Passport number.
    Passport,
    /// Nationality, as a country name.
    Nationality,
    /// Number of checked bags.
    Luggage,
}

impl FieldKind {
    /// Every field, in passenger-table column order.
    pub const ALL: [Self; 6] = [
        Self::GivenNames,
        Self::Surname,
        Self::DateOfBirth,
        Self::Passport,
        Self::Nationality,
        Self::Luggage,
    ];

    /// Fields that can be changed after booking through a detail update.
    pub const UPDATABLE: [Self; 5] = [
        Self::GivenNames,
        Self::Surname,
        Self::DateOfBirth,
        Self::Passport,
        Self::Nationality,
    ];

    /// The passenger-table header this field is stored under.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::GivenNames => "first name",
            Self::Surname => "last name",
            Self::DateOfBirth => "date of birth",
            Self::Passport => "passport number",
            Self::Nationality => "nationality",
            Self::Luggage => "luggage",
        }
    }

    /// Text shown when asking an operator for this field.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::GivenNames => "First name(s)",
            Self::Surname => "Last name",
            Self::DateOfBirth => "Date of birth (YYYY-MM-DD)",
            Self::Passport => "Passport number",
            Self::Nationality => "Nationality",
            Self::Luggage => "Checked bags (0-2)",
        }
    }

    /// Returns `true` if the field can be changed through a detail update.
    #[must_use]
    pub fn is_updatable(self) -> bool {
        Self::UPDATABLE.contains(&self)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A value that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A formatted text field.
    Text(String),
    /// A checked-bag count.
    Luggage(Luggage),
}

impl FieldValue {
    /// The text written to the table cell.
    #[must_use]
    pub fn to_cell(&self) -> String {
        self.to_string()
    }

    /// Returns the luggage count if this is a luggage value.
    #[must_use]
    pub const fn as_luggage(&self) -> Option<Luggage> {
        match self {
            Self::Luggage(luggage) => Some(*luggage),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Luggage(luggage) => write!(f, "{luggage}"),
        }
    }
}

/// Why an input was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The field that was being validated.
    pub field: FieldKind,
    /// Human-readable reason.
    pub reason: String,
}

impl Rejection {
    fn new(field: FieldKind, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.reason)
    }
}

impl std::error::Error for Rejection {}

/// Field validator with an optional set of extra accepted nationalities.
///
/// # Examples
///
/// ```
/// use magnolia::validation::{FieldKind, Validator};
///
/// let validator = Validator::new().with_extra_nationalities(["Atlantis"]);
/// assert!(validator.validate(FieldKind::Nationality, "atlantis").is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    extra_nationalities: Vec<String>,
}

impl Validator {
    /// Creates a validator that accepts only the built-in country list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds country names accepted on top of the built-in list.
    #[must_use]
    pub fn with_extra_nationalities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_nationalities.extend(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_uppercase()),
        );
        self
    }

    /// Validates `raw` as `kind` against the local calendar date.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] when the input fails the field's rule.
    pub fn validate(&self, kind: FieldKind, raw: &str) -> Result<FieldValue, Rejection> {
        self.validate_on(kind, raw, Local::now().date_naive())
    }

    /// Validates `raw` as `kind`, treating `today` as the current date.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] when the input fails the field's rule.
    pub fn validate_on(
        &self,
        kind: FieldKind,
        raw: &str,
        today: NaiveDate,
    ) -> Result<FieldValue, Rejection> {
        let trimmed = raw.trim();
        match kind {
            FieldKind::GivenNames | FieldKind::Surname => name(kind, trimmed),
            FieldKind::DateOfBirth => date_of_birth(trimmed, today),
            FieldKind::Passport => passport(trimmed),
            FieldKind::Nationality => self.nationality(trimmed),
            FieldKind::Luggage => trimmed
                .parse::<Luggage>()
                .map(FieldValue::Luggage)
                .map_err(|err| Rejection::new(kind, err.reason)),
        }
    }

    fn nationality(&self, trimmed: &str) -> Result<FieldValue, Rejection> {
        let upper = trimmed.to_uppercase();
        if upper.is_empty() {
            return Err(Rejection::new(
                FieldKind::Nationality,
                "enter a country name",
            ));
        }
        if is_known_country(&upper) || self.extra_nationalities.iter().any(|c| *c == upper) {
            Ok(FieldValue::Text(upper))
        } else {
            Err(Rejection::new(
                FieldKind::Nationality,
                format!("'{trimmed}' is not a recognised country"),
            ))
        }
    }
}

/// Validates `raw` as `kind` with the default validator.
///
/// # Errors
///
/// Returns a [`Rejection`] when the input fails the field's rule.
pub fn validate(kind: FieldKind, raw: &str) -> Result<FieldValue, Rejection> {
    Validator::new().validate(kind, raw)
}

/// Validates `raw` as `kind` with the default validator and a fixed date.
///
/// # Errors
///
/// Returns a [`Rejection`] when the input fails the field's rule.
pub fn validate_on(kind: FieldKind, raw: &str, today: NaiveDate) -> Result<FieldValue, Rejection> {
    Validator::new().validate_on(kind, raw, today)
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest.
///
/// A letter whose case mapping is not a single character (`ß`, `İ`) is
/// kept as it is, so the result has the same characters as the input.
///
/// # Examples
///
/// ```
/// use magnolia::validation::title_case;
///
/// assert_eq!(title_case("jean-luc"), "Jean-Luc");
/// assert_eq!(title_case("MARIE SKŁODOWSKA"), "Marie Skłodowska");
/// assert_eq!(title_case("ßmith"), "ßmith");
/// ```
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut in_word = false;
    text.chars()
        .map(|c| {
            if !c.is_alphabetic() {
                in_word = false;
                return c;
            }
            let mapped = if in_word {
                single_char(c.to_lowercase())
            } else {
                single_char(c.to_uppercase())
            };
            in_word = true;
            mapped.unwrap_or(c)
        })
        .collect()
}

fn single_char(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    mapping.next().is_none().then_some(first)
}

fn check_name_chars(kind: FieldKind, text: &str) -> Result<(), Rejection> {
    if let Some(bad) = text
        .chars()
        .find(|c| !(c.is_alphabetic() || *c == ' ' || *c == '-' || *c == '\''))
    {
        return Err(Rejection::new(
            kind,
            format!("'{bad}' is not allowed; use letters, spaces, hyphens or apostrophes"),
        ));
    }
    Ok(())
}

fn name(kind: FieldKind, trimmed: &str) -> Result<FieldValue, Rejection> {
    check_name_chars(kind, trimmed)?;
    if !trimmed.chars().any(char::is_alphabetic) {
        return Err(Rejection::new(kind, "must contain at least one letter"));
    }

    // the stored form must validate back to itself
    let formatted = title_case(trimmed);
    if check_name_chars(kind, &formatted).is_err() || title_case(&formatted) != formatted {
        return Err(Rejection::new(
            kind,
            format!("'{trimmed}' cannot be written in a consistent letter case"),
        ));
    }
    Ok(FieldValue::Text(formatted))
}

fn date_of_birth(trimmed: &str, today: NaiveDate) -> Result<FieldValue, Rejection> {
    let kind = FieldKind::DateOfBirth;
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == trimmed)
        .ok_or_else(|| Rejection::new(kind, format!("'{trimmed}' is not a YYYY-MM-DD date")))?;

    if date >= today {
        return Err(Rejection::new(kind, "must be in the past"));
    }
    Ok(FieldValue::Text(trimmed.to_string()))
}

fn passport(trimmed: &str) -> Result<FieldValue, Rejection> {
    let kind = FieldKind::Passport;
    if trimmed.is_empty() {
        return Err(Rejection::new(kind, "enter a passport number"));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Rejection::new(kind, "use letters and digits only"));
    }
    Ok(FieldValue::Text(trimmed.to_ascii_uppercase()))
}
