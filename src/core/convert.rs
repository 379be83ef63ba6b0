use super::currency::{
    ConversionError, ConversionRequest, ConversionResult, RateTable, RateTableProvider,
};
use tracing::debug;

/// Converts `request.amount` using the provider's latest table for `request.from`.
///
/// Issues exactly one lookup. Any failure is returned as is; there is no
/// retry and no partial result.
pub async fn convert(
    provider: &(dyn RateTableProvider + Send + Sync),
    request: &ConversionRequest,
) -> Result<(ConversionResult, RateTable), ConversionError> {
    let table = provider.latest_rates(&request.from).await?;
    let result = apply_rate(&table, request)?;
    Ok((result, table))
}

pub fn apply_rate(
    table: &RateTable,
    request: &ConversionRequest,
) -> Result<ConversionResult, ConversionError> {
    let rate = table
        .rate_for(&request.to)
        .ok_or_else(|| ConversionError::MissingRate {
            base: request.from.clone(),
            target: request.to.clone(),
        })?;

    let converted_amount = request.amount * rate;
    debug!(
        from = %request.from,
        to = %request.to,
        rate,
        converted_amount,
        "Applied conversion rate"
    );

    Ok(ConversionResult {
        converted_amount,
        rate,
    })
}
