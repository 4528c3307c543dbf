//! Booking references and their generator.
//!
//! A booking reference is eight characters: two uppercase letters, two
//! digits 1-9, two uppercase letters, two digits 1-9 (for example
//! `TF78RE32`). References are drawn at random and redrawn until they miss
//! every reference already in the registry.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of characters in a booking reference.
pub const REFERENCE_LENGTH: usize = 8;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8; 9] = b"123456789";

/// A well-formed booking reference.
///
/// # Examples
///
/// ```
/// use magnolia::BookingReference;
///
/// let reference: BookingReference = "TF78RE32".parse().unwrap();
/// assert_eq!(reference.as_str(), "TF78RE32");
///
/// assert!("TF70RE32".parse::<BookingReference>().is_err());
/// assert!("tf78re32".parse::<BookingReference>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingReference(String);

impl BookingReference {
    /// Returns the reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the reference, returning the owned text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_letter_at(position: usize) -> bool {
    matches!(position, 0 | 1 | 4 | 5)
}

impl TryFrom<String> for BookingReference {
    type Error = InvalidReferenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.len() != REFERENCE_LENGTH {
            return Err(InvalidReferenceError {
                value,
                reason: format!("must be exactly {REFERENCE_LENGTH} characters"),
            });
        }

        let well_formed = value.bytes().enumerate().all(|(position, byte)| {
            if is_letter_at(position) {
                byte.is_ascii_uppercase()
            } else {
                (b'1'..=b'9').contains(&byte)
            }
        });

        if well_formed {
            Ok(Self(value))
        } else {
            Err(InvalidReferenceError {
                value,
                reason: "expected two capital letters, two digits 1-9, two capital letters, \
                         two digits 1-9"
                    .into(),
            })
        }
    }
}

impl FromStr for BookingReference {
    type Err = InvalidReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<BookingReference> for String {
    fn from(reference: BookingReference) -> Self {
        reference.0
    }
}

impl AsRef<str> for BookingReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for malformed booking references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidReferenceError {
    /// The rejected text.
    pub value: String,
    /// The reason the text is not a reference.
    pub reason: String,
}

impl fmt::Display for InvalidReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid booking reference '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidReferenceError {}

/// Draws fresh booking references from a random source.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use magnolia::ReferenceGenerator;
///
/// let mut generator = ReferenceGenerator::from_thread_rng();
/// let used: HashSet<String> = ["TF78RE32".to_string()].into_iter().collect();
///
/// let reference = generator.generate(&used);
/// assert!(!used.contains(reference.as_str()));
/// ```
#[derive(Debug)]
pub struct ReferenceGenerator<R> {
    rng: R,
}

impl ReferenceGenerator<rand::rngs::ThreadRng> {
    /// Creates a generator backed by the thread-local random source.
    #[must_use]
    pub fn from_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> ReferenceGenerator<R> {
    /// Creates a generator that draws from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws one reference without checking it against the registry.
    pub fn draw(&mut self) -> BookingReference {
        let text: String = (0..REFERENCE_LENGTH)
            .map(|position| {
                let byte = if is_letter_at(position) {
                    LETTERS[self.rng.gen_range(0..LETTERS.len())]
                } else {
                    DIGITS[self.rng.gen_range(0..DIGITS.len())]
                };
                char::from(byte)
            })
            .collect();
        BookingReference(text)
    }

    /// Draws references until one is not in `used`.
    ///
    /// The loop has no upper bound. There are 26⁴·9⁴ (about 3×10⁹) possible
    /// references, so a collision is rare for any realistic registry.
    pub fn generate(&mut self, used: &HashSet<String>) -> BookingReference {
        let mut attempts = 1u32;
        loop {
            let candidate = self.draw();
            if !used.contains(candidate.as_str()) {
                if attempts > 1 {
                    log::debug!("booking reference accepted after {attempts} draws");
                }
                return candidate;
            }
            attempts = attempts.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod proptests;
