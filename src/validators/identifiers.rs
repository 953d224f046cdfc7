use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::validators::{is_valid_drive_id, is_valid_vpsaos_account_id, InvalidArgument};

/// A VPSA drive identifier, the drive 'name' value reported by the drive listing (for example
/// `volume-00002a73`). Only the shape is checked, nothing confirms the drive exists.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DriveId(String);

impl DriveId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DriveId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DriveId {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_drive_id(s) {
            return Err(InvalidArgument::new(
                "drive_id",
                s,
                "is not a valid drive ID",
            ));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for DriveId {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A VPSA Object Storage account identifier, a 32 character lowercase hex token such as
/// `91ea5bd5cdc04adb9f5e3c00a346c463`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_vpsaos_account_id(s) {
            return Err(InvalidArgument::new(
                "account_id",
                s,
                "is not a valid VPSAOS account ID",
            ));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for AccountId {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
