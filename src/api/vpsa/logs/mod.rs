//! The VPSA event log.

mod log_query;

pub use log_query::LogQuery;

use crate::api::client::{ApiOutput, ReturnType, Transport};
use crate::error::ZadaraResult;

const MESSAGES_PATH: &str = "/api/messages.json";

/// Retrieves log messages matching `query`. An invalid filter fails before anything is sent.
pub async fn get<T: Transport + ?Sized>(
    transport: &T,
    query: &LogQuery,
    return_type: ReturnType,
) -> ZadaraResult<ApiOutput> {
    let parameters = query.parameters()?;

    if !query.extra.is_empty() {
        tracing::debug!(keys = ?query.extra.keys().collect::<Vec<_>>(), "forwarding unvalidated log filters");
    }

    let output = transport
        .get_api(MESSAGES_PATH, parameters, return_type)
        .await?;

    Ok(output)
}
