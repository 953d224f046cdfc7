use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::validators::InvalidArgument;

const MAX_SEVERITY: i64 = 7;

/// Severity code of a VPSA log message, 0 through 7 with lower values being more severe.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct LogSeverity(u8);

impl LogSeverity {
    pub const CRITICAL: LogSeverity = LogSeverity(3);
    pub const WARNING: LogSeverity = LogSeverity(4);

    pub fn code(&self) -> u8 {
        self.0
    }
}

impl Display for LogSeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for LogSeverity {
    type Error = InvalidArgument;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(0..=MAX_SEVERITY).contains(&value) {
            return Err(InvalidArgument::new(
                "severity",
                value,
                format!("known severity codes are 0 through {MAX_SEVERITY}"),
            ));
        }

        Ok(Self(value as u8))
    }
}
