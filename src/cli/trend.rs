use super::ui;
use crate::core::trend::{self, TrendSeries};
use crate::core::CurrencyCode;
use comfy_table::Cell;

const BAR_WIDTH: usize = 30;

fn bar_length(rate: f64, min: f64, max: f64) -> usize {
    let span = max - min;
    if span <= f64::EPSILON {
        return BAR_WIDTH;
    }
    1 + (((rate - min) / span) * (BAR_WIDTH - 1) as f64).round() as usize
}

impl TrendSeries {
    pub fn display_as_chart(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Day"),
            ui::header_cell("Exchange Rate"),
            ui::header_cell("Trend"),
        ]);

        let (min, max) = self.bounds().unwrap_or((0.0, 0.0));
        for point in &self.points {
            table.add_row(vec![
                Cell::new(&point.label),
                ui::rate_cell(point.rate),
                Cell::new("█".repeat(bar_length(point.rate, min, max))),
            ]);
        }

        let mut output = format!("{}\n\n", ui::style_text(&self.title(), ui::StyleType::Title));
        output.push_str(&table.to_string());
        output.push_str(&format!("\n\nLow: {min:.4}  High: {max:.4}\n"));
        output.push_str(&ui::style_text(
            "Sample data for illustration, not historical rates.",
            ui::StyleType::Subtle,
        ));
        output
    }
}

pub fn run(target: &CurrencyCode) {
    println!("{}", trend::trend_for(target).display_as_chart());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_length_scales_between_bounds() {
        assert_eq!(bar_length(0.83, 0.83, 0.89), 1);
        assert_eq!(bar_length(0.89, 0.83, 0.89), BAR_WIDTH);
        assert_eq!(bar_length(0.25, 0.0, 1.0), 1 + 7);
    }

    #[test]
    fn test_flat_series_uses_full_bar() {
        assert_eq!(bar_length(1.0, 1.0, 1.0), BAR_WIDTH);
    }

    #[test]
    fn test_chart_contains_all_days() {
        let series = trend::trend_for(&"EUR".parse().unwrap());
        let chart = console::strip_ansi_codes(&series.display_as_chart()).to_string();

        assert!(chart.contains("Exchange Rate Trend for EUR"));
        for day in 1..=7 {
            assert!(chart.contains(&format!("Day {day}")));
        }
        assert!(chart.contains("0.8900"));
        assert!(chart.contains("0.8300"));
        assert!(chart.contains("Low: 0.8300  High: 0.8900"));
        assert!(chart.contains("not historical rates"));
    }
}
