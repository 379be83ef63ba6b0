use super::{trend, ui};
use crate::core::convert::convert;
use crate::core::{ConversionRequest, ConversionResult, RateTable, RateTableProvider};
use anyhow::Result;
use tracing::{info, warn};

/// Shown for every failed lookup, whatever the cause.
pub const CONVERSION_UNAVAILABLE: &str = "Invalid currency code or API issue.";

/// What the user was shown for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Converted(ConversionResult),
    Unavailable,
}

pub fn render_success(
    request: &ConversionRequest,
    result: &ConversionResult,
    table: &RateTable,
) -> String {
    let headline = format!(
        "{} {} = {:.2} {}",
        request.amount, request.from, result.converted_amount, request.to
    );
    let formula = format!(
        "{} × {:.4} = {:.2}",
        request.amount, result.rate, result.converted_amount
    );

    let mut output = format!(
        "{}\nFormula Used: {}",
        ui::style_text(&headline, ui::StyleType::Success),
        ui::style_text(&formula, ui::StyleType::Formula)
    );
    if let Some(updated) = table.last_updated {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!("Rates as of {}", updated.format("%Y-%m-%d %H:%M UTC")),
                ui::StyleType::Subtle
            )
        ));
    }
    output
}

pub fn render_failure() -> String {
    ui::style_text(CONVERSION_UNAVAILABLE, ui::StyleType::Error)
}

/// Converts and prints the outcome.
///
/// A failed lookup is reported to the user and is not an error for the
/// caller.
pub async fn run(
    provider: &(dyn RateTableProvider + Send + Sync),
    request: &ConversionRequest,
    show_trend: bool,
) -> Result<ConversionOutcome> {
    let pb = ui::new_spinner("Fetching exchange rate...");
    let outcome = convert(provider, request).await;
    pb.finish_and_clear();

    let outcome = match outcome {
        Ok((result, table)) => {
            info!(rate = result.rate, "Conversion succeeded");
            println!("{}", render_success(request, &result, &table));
            ConversionOutcome::Converted(result)
        }
        Err(e) => {
            warn!(error = %e, "Conversion unavailable");
            println!("{}", render_failure());
            ConversionOutcome::Unavailable
        }
    };

    if show_trend {
        ui::print_separator();
        trend::run(&request.to);
    }

    Ok(outcome)
}
