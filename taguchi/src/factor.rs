//! The data model shared by every component: factors and experiment
//! definitions.

use crate::error::Error;

/// Lower bound on the number of levels a [`Factor`] may declare.
pub const MIN_LEVELS: usize = 2;
/// Upper bound on the number of levels a [`Factor`] may declare.
pub const MAX_LEVELS: usize = 27;
/// Upper bound on the number of factors an [`Definition`] may hold.
pub const MAX_FACTORS: usize = 41;
/// Upper bound, in bytes, on a factor name.
pub const MAX_NAME_LEN: usize = 63;
/// Upper bound, in bytes, on a single level value.
pub const MAX_VALUE_LEN: usize = 127;

/// A named discrete input variable with an ordered list of level values.
///
/// Level values are opaque strings; the library never interprets them —
/// only their identity (for matching a response back to a level) and
/// position (for the 1-based `level_<n>` recommendation string) matter.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factor {
    name: String,
    levels: Vec<String>,
}

impl Factor {
    /// Builds a factor, validating the name length, value lengths, and
    /// level-count bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name or any level value is too
    /// long, or if the level count is outside `[MIN_LEVELS, MAX_LEVELS]`.
    pub fn new(
        name: impl Into<String>,
        levels: impl IntoIterator<Item = impl Into<String>>,
    ) -> crate::Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Validation("factor name must not be empty".into()));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(Error::Validation(format!(
                "factor name '{name}' exceeds {MAX_NAME_LEN} bytes"
            )));
        }

        let levels: Vec<String> = levels.into_iter().map(Into::into).collect();
        if levels.len() < MIN_LEVELS || levels.len() > MAX_LEVELS {
            return Err(Error::Validation(format!(
                "factor '{name}' has {} level(s), must be between {MIN_LEVELS} and {MAX_LEVELS}",
                levels.len()
            )));
        }
        for value in &levels {
            if value.len() > MAX_VALUE_LEN {
                return Err(Error::Validation(format!(
                    "level value '{value}' of factor '{name}' exceeds {MAX_VALUE_LEN} bytes"
                )));
            }
        }

        Ok(Self { name, levels })
    }

    /// The factor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The factor's declared level values, in declaration order.
    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Number of levels this factor declares.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

/// An ordered set of factors plus an optional explicit array choice.
///
/// Insertion order is part of the definition's identity: column assignment
/// walks factors in this order.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    factors: Vec<Factor>,
    array: Option<String>,
}

impl Definition {
    /// Builds a definition from an ordered list of factors and an optional
    /// explicit array name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if there are no factors or more than
    /// [`MAX_FACTORS`].
    pub fn new(factors: Vec<Factor>, array: Option<String>) -> crate::Result<Self> {
        if factors.is_empty() {
            return Err(Error::Validation("definition has no factors".into()));
        }
        if factors.len() > MAX_FACTORS {
            return Err(Error::Validation(format!(
                "definition has {} factors, at most {MAX_FACTORS} are supported",
                factors.len()
            )));
        }
        Ok(Self { factors, array })
    }

    /// The factors, in insertion order.
    #[must_use]
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// The explicit array name, if one was requested instead of "auto".
    #[must_use]
    pub fn array_name(&self) -> Option<&str> {
        self.array.as_deref()
    }

    /// The largest level count among all factors.
    ///
    /// # Panics
    ///
    /// Never: a [`Definition`] always has at least one factor.
    #[must_use]
    pub fn max_level_count(&self) -> usize {
        self.factors
            .iter()
            .map(Factor::level_count)
            .max()
            .expect("definition always has at least one factor")
    }

    /// Looks up a factor by name.
    #[must_use]
    pub fn factor(&self, name: &str) -> Option<&Factor> {
        self.factors.iter().find(|f| f.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Definition, Factor};

    #[test]
    fn factor_rejects_too_few_levels() {
        assert!(Factor::new("a", ["only"]).is_err());
    }

    #[test]
    fn factor_rejects_too_many_levels() {
        let levels: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        assert!(Factor::new("a", levels).is_err());
    }

    #[test]
    fn factor_accepts_boundary_level_counts() {
        assert!(Factor::new("a", ["x", "y"]).is_ok());
        let levels: Vec<String> = (0..27).map(|i| i.to_string()).collect();
        assert!(Factor::new("a", levels).is_ok());
    }

    #[test]
    fn definition_rejects_empty_factor_list() {
        assert!(Definition::new(vec![], None).is_err());
    }

    #[test]
    fn definition_preserves_insertion_order() {
        let a = Factor::new("a", ["1", "2"]).unwrap();
        let b = Factor::new("b", ["1", "2", "3"]).unwrap();
        let def = Definition::new(vec![a, b], None).unwrap();
        assert_eq!(def.factors()[0].name(), "a");
        assert_eq!(def.factors()[1].name(), "b");
        assert_eq!(def.max_level_count(), 3);
    }
}
