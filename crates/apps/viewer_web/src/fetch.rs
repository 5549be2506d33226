use formats::{RESULTS_FORMAT, StreetRecord, parse_response, query_params};
use gloo_net::http::Request;
use tracing::info;

use crate::error::ViewerError;

/// One GET against the query endpoint. No retry.
pub async fn fetch_streets(endpoint: &str) -> Result<Vec<StreetRecord>, ViewerError> {
    let resp = Request::get(endpoint)
        .query(query_params())
        .header("Accept", RESULTS_FORMAT)
        .send()
        .await?;
    if !resp.ok() {
        return Err(ViewerError::Status(resp.status()));
    }

    let text = resp.text().await?;
    let records = parse_response(&text)?;
    info!(count = records.len(), "fetched streets");
    Ok(records)
}
