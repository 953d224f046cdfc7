use std::fmt::{self, Debug, Formatter};

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The per-user API token sent with every request. Wiped from memory when dropped and never
/// printed in full.
#[derive(Clone, Deserialize, Eq, PartialEq, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub(crate) struct AccessKey(String);

impl AccessKey {
    #[cfg_attr(not(feature = "http-transport"), allow(dead_code))]
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }

    pub(crate) fn masked(&self) -> String {
        mask_secret(&self.0)
    }

    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl Debug for AccessKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessKey").field(&self.masked()).finish()
    }
}

pub(crate) fn mask_secret(value: &str) -> String {
    let char_count = value.chars().count();

    if char_count <= 8 {
        return "*".repeat(char_count);
    }

    let head: String = value.chars().take(4).collect();
    let tail: String = value.chars().skip(char_count - 4).collect();

    format!("{head}...{tail}")
}
