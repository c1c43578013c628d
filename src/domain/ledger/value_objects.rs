use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::errors::AppError;

/// Which collection an entry lives in
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum EntryType {
    #[strum(to_string = "income", serialize = "inc")]
    #[serde(rename = "income")]
    Income,

    #[strum(to_string = "expenses", serialize = "exp")]
    #[serde(rename = "expenses")]
    Expense,
}

/// Generated entry identifier, `[0-9A-Z]+`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
pub struct EntryId(String);

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const RANDOM_DIGITS: usize = 5;

impl EntryId {
    /// Builds `base36(timestamp) + 5 base36 digits of the random fraction`.
    pub fn from_parts(timestamp_ms: u64, random_unit: f64) -> Self {
        let mut id = to_base36(timestamp_ms);
        id.push_str(&fraction_to_base36(random_unit, RANDOM_DIGITS));
        Self(id)
    }

    /// Appends a disambiguating base36 counter.
    pub fn with_suffix(&self, counter: u64) -> Self {
        Self(format!("{}{}", self.0, to_base36(counter)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntryId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AppError::InvalidKey(s.to_string()));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

fn fraction_to_base36(unit: f64, count: usize) -> String {
    let mut rest = if unit.is_finite() { unit.fract().abs() } else { 0.0 };
    (0..count)
        .map(|_| {
            rest *= 36.0;
            let digit = (rest.floor() as usize).min(35);
            rest -= digit as f64;
            BASE36_DIGITS[digit] as char
        })
        .collect()
}

/// Composite key `{type}-{id}` identifying one stored/rendered entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{}", entry_type, id)]
pub struct EntryKey {
    pub entry_type: EntryType,
    pub id: EntryId,
}

impl EntryKey {
    pub const SEPARATOR: char = '-';

    pub fn new(entry_type: EntryType, id: EntryId) -> Self {
        Self { entry_type, id }
    }
}

impl FromStr for EntryKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(Self::SEPARATOR)
            .ok_or_else(|| AppError::InvalidKey(s.to_string()))?;
        let entry_type =
            EntryType::from_str(kind).map_err(|_| AppError::InvalidKey(s.to_string()))?;
        Ok(Self { entry_type, id: id.parse()? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_matches_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(fraction_to_base36(0.5, 5), "I0000");
    }

    #[test]
    fn id_never_contains_separator() {
        let id = EntryId::from_parts(1_700_000_000_000, 0.987_654);
        assert!(!id.value().contains(EntryKey::SEPARATOR));
        assert_eq!(id.value().len(), to_base36(1_700_000_000_000).len() + RANDOM_DIGITS);
    }
}
