use shared_types::{AppError, SearchQuery};

/// Serialise a query to its one-line JSON record.
pub fn record_json(query: &SearchQuery) -> Result<String, AppError> {
    Ok(serde_json::to_string(&query.to_record()?)?)
}

/// Report a submitted query as a single structured log event.
///
/// Never fails: a not-a-number passenger count is logged as `NaN` and
/// recorded as `null`.
pub fn report(query: &SearchQuery) {
    let record = record_json(query).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Search record could not be serialized");
        String::new()
    });

    tracing::info!(
        departure = %query.departure,
        arrival = %query.arrival,
        date = %query.date,
        passengers = %query.passengers,
        trip_type = %query.trip_type,
        record = %record,
        "Form submitted"
    );
}
