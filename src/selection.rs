//! The pair of countries under comparison and its single invariant: the two
//! slots never hold the same name.

use crate::error::SelectionError;
use crate::models::{DEFAULT_PAIR, Slot};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryPair {
    slots: [String; 2],
}

impl Default for CountryPair {
    fn default() -> Self {
        Self {
            slots: [DEFAULT_PAIR.0.to_string(), DEFAULT_PAIR.1.to_string()],
        }
    }
}

impl CountryPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, SelectionError> {
        let (first, second) = (first.into(), second.into());
        if first == second {
            return Err(SelectionError::Duplicate { country: second });
        }
        Ok(Self {
            slots: [first, second],
        })
    }

    /// Build a pair from `"A,B"` or `"A;B"`. Blank entries are ignored.
    pub fn parse(list: &str) -> Result<Self, SelectionError> {
        let names: Vec<&str> = list
            .split([',', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        match names.as_slice() {
            [a, b] => Self::new(*a, *b),
            other => Err(SelectionError::WrongCount(other.len())),
        }
    }

    pub fn get(&self, slot: Slot) -> &str {
        &self.slots[slot.index()]
    }

    pub fn first(&self) -> &str {
        self.get(Slot::First)
    }

    pub fn second(&self) -> &str {
        self.get(Slot::Second)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    /// Put `country` into `slot`.
    ///
    /// Returns `Ok(true)` when the pair changed and data must be reloaded,
    /// `Ok(false)` when `country` already sits in that slot. Choosing the
    /// other slot's country is rejected and leaves the pair untouched.
    pub fn select(&mut self, slot: Slot, country: &str) -> Result<bool, SelectionError> {
        if self.get(slot.other()) == country {
            return Err(SelectionError::Duplicate {
                country: country.to_string(),
            });
        }
        if self.get(slot) == country {
            return Ok(false);
        }
        self.slots[slot.index()] = country.to_string();
        Ok(true)
    }

    /// Whether `country` may be offered for `slot`.
    pub fn is_selectable(&self, slot: Slot, country: &str) -> bool {
        self.get(slot.other()) != country
    }
}

impl std::fmt::Display for CountryPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.slots[0], self.slots[1])
    }
}
