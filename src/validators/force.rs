use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::validators::InvalidArgument;

/// Whether the appliance should ignore non-critical warnings when accepting a request.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Force {
    Yes,

    #[default]
    No,
}

impl Force {
    pub fn as_str(&self) -> &'static str {
        match self {
            Force::Yes => "YES",
            Force::No => "NO",
        }
    }
}

impl Display for Force {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Force {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YES" => Ok(Force::Yes),
            "NO" => Ok(Force::No),
            other => Err(InvalidArgument::new(
                "force",
                other,
                "allowed values are \"YES\" or \"NO\"",
            )),
        }
    }
}

impl From<bool> for Force {
    fn from(value: bool) -> Self {
        if value {
            Force::Yes
        } else {
            Force::No
        }
    }
}
