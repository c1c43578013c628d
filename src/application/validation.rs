use std::str::FromStr;

use crate::domain::InputError;
use crate::domain::ledger::EntryType;

/// Form contents as read from the page, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInput {
    pub entry_type: String,
    pub description: String,
    /// `NaN` when the field did not parse.
    pub raw_value: f64,
}

/// Input that passed validation and may be added to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub entry_type: EntryType,
    pub description: String,
    pub value: f64,
}

/// Presence / numeric / non-zero check on a form submission.
pub fn validate_input(input: &RawInput) -> Result<ValidatedInput, InputError> {
    if input.description.is_empty() {
        return Err(InputError::EmptyDescription);
    }
    if !input.raw_value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if input.raw_value == 0.0 {
        return Err(InputError::ZeroValue);
    }
    let entry_type = EntryType::from_str(&input.entry_type)
        .map_err(|_| InputError::UnknownEntryType(input.entry_type.clone()))?;

    Ok(ValidatedInput {
        entry_type,
        description: input.description.clone(),
        value: input.raw_value,
    })
}
