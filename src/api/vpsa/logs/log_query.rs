use serde_json::Value;

use crate::api::client::Parameters;
use crate::validators::{verify_start_limit_sort_severity, InvalidArgument};

const TYPED_FILTERS: [&str; 4] = ["limit", "severity", "sort", "start"];

/// Filters for the VPSA log listing. Fields hold the caller's raw input and are only checked when
/// the query is turned into request parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LogQuery {
    /// `DESC` lists the newest messages first, `ASC` the oldest.
    pub sort: String,

    /// `None` returns messages of every severity.
    pub severity: Option<i64>,

    pub start: Option<i64>,
    pub limit: Option<i64>,

    /// Forwarded to the appliance as-is for filters this library doesn't know about. The typed
    /// filters can't be set through here, a query carrying one of their keys is rejected.
    pub extra: Parameters,
}

impl LogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn parameters(&self) -> Result<Parameters, InvalidArgument> {
        for field in TYPED_FILTERS {
            if let Some(value) = self.extra.get(field) {
                return Err(InvalidArgument::new(
                    field,
                    value,
                    "must be set through its own filter, not as an extra parameter",
                ));
            }
        }

        let verified =
            verify_start_limit_sort_severity(self.start, self.limit, &self.sort, self.severity)?;

        let mut parameters = self.extra.clone();
        parameters.extend(verified);

        Ok(parameters)
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_severity(mut self, severity: i64) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            sort: "DESC".to_string(),
            severity: None,
            start: None,
            limit: None,
            extra: Parameters::new(),
        }
    }
}
