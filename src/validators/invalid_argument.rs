/// The single failure kind produced by every validator. It is raised before any request is
/// constructed so a call that fails with this error never touched the network.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid argument {field} (\"{value}\"): {reason}")]
pub struct InvalidArgument {
    field: &'static str,
    value: String,
    reason: String,
}

impl InvalidArgument {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn new(field: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
