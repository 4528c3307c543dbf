//! Checked-luggage allowance.
//!
//! Every booking carries between [`Luggage::MIN`] and [`Luggage::MAX`]
//! checked bags. The count is stored as plain text in the passenger table
//! and only ever increases after booking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A valid number of checked bags (0-2).
///
/// # Examples
///
/// ```
/// use magnolia::Luggage;
///
/// let bags = Luggage::try_from(1).unwrap();
/// assert_eq!(bags.value(), 1);
///
/// assert!(Luggage::try_from(3).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Luggage(u8);

impl Luggage {
    /// The smallest allowance.
    pub const MIN: u8 = 0;

    /// The largest allowance.
    pub const MAX: u8 = 2;

    /// Returns the number of bags.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` once no further bags can be added.
    #[must_use]
    pub const fn is_at_maximum(self) -> bool {
        self.0 >= Self::MAX
    }

    /// How many more bags fit in the allowance.
    #[must_use]
    pub const fn remaining(self) -> u8 {
        Self::MAX - self.0
    }

    /// Adds `additional` bags, failing if the total would leave the range.
    ///
    /// # Errors
    ///
    /// Returns an error if the sum exceeds [`Luggage::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use magnolia::Luggage;
    ///
    /// let one = Luggage::try_from(1).unwrap();
    /// assert_eq!(one.checked_add(1).unwrap().value(), 2);
    /// assert!(one.checked_add(2).is_err());
    /// ```
    pub fn checked_add(self, additional: u8) -> Result<Self, InvalidLuggageError> {
        let total = self.0.saturating_add(additional);
        Self::try_from(total).map_err(|_| InvalidLuggageError {
            value: total,
            reason: format!(
                "adding {additional} to {} would exceed the maximum of {}",
                self.0,
                Self::MAX
            ),
        })
    }
}

impl TryFrom<u8> for Luggage {
    type Error = InvalidLuggageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            Err(InvalidLuggageError {
                value,
                reason: format!("must be between {} and {}", Self::MIN, Self::MAX),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Luggage> for u8 {
    fn from(luggage: Luggage) -> Self {
        luggage.0
    }
}

impl FromStr for Luggage {
    type Err = InvalidLuggageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed.parse().map_err(|_| InvalidLuggageError {
            value: u8::MAX,
            reason: format!("'{trimmed}' is not a whole number"),
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for Luggage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for luggage counts outside the allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLuggageError {
    /// The rejected count (`u8::MAX` when the input was not a number).
    pub value: u8,
    /// The reason the count is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidLuggageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid luggage count: {}", self.reason)
    }
}

impl std::error::Error for InvalidLuggageError {}

#[cfg(test)]
mod proptests;
