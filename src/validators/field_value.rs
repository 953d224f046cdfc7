use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::validators::{is_valid_field, InvalidArgument};

/// Free text destined for a request body (display names, account names). The value is stripped
/// of surrounding whitespace before it is checked.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(field: &'static str, raw: &str) -> Result<Self, InvalidArgument> {
        let stripped = raw.trim();

        if !is_valid_field(stripped) {
            return Err(InvalidArgument::new(
                field,
                stripped,
                "must be non-empty and may not contain a single quote (') character",
            ));
        }

        Ok(Self(stripped.to_string()))
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
