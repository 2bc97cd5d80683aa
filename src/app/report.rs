//! Presentation edge: currency formatting plus text and JSON rendering.

use crate::core::dataset::CityDataset;
use crate::domain::model::{
    round_to_tenth, CityRecord, ComparisonInput, ComparisonResult, HousingTenure,
};
use crate::domain::ports::ResultSink;
use crate::utils::error::{CompareError, Result};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CompareError::InvalidValue {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "expected 'text' or 'json'".to_string(),
            }),
        }
    }
}

/// US-style whole-dollar formatting: `$72,196`, `-$2,804`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Signed adjustment, e.g. `+$1,250` or `-$2,804`.
pub fn format_adjustment(amount: i64) -> String {
    if amount > 0 {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

/// Sign comes from the unrounded percentage, so a tiny positive gap never
/// reads as "the same cost".
pub fn describe_difference(percent_difference: f64) -> String {
    let shown = round_to_tenth(percent_difference.abs());
    let amount = if shown == 0.0 {
        "less than 0.1%".to_string()
    } else {
        format!("{:.1}%", shown)
    };

    if percent_difference > 0.0 {
        format!("{} more expensive than", amount)
    } else if percent_difference < 0.0 {
        format!("{} less expensive than", amount)
    } else {
        "the same cost as".to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct CityLabel<'a> {
    pub id: &'a str,
    pub display_name: &'a str,
}

impl<'a> From<&'a CityRecord> for CityLabel<'a> {
    fn from(record: &'a CityRecord) -> Self {
        Self {
            id: &record.id,
            display_name: &record.display_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub origin: CityLabel<'a>,
    pub destination: CityLabel<'a>,
    pub annual_salary: f64,
    pub housing_tenure: HousingTenure,
    pub result: &'a ComparisonResult,
}

fn labels<'a>(
    dataset: &'a CityDataset,
    input: &ComparisonInput,
) -> Result<(&'a CityRecord, &'a CityRecord)> {
    Ok((
        dataset.resolve(&input.origin_city_id)?,
        dataset.resolve(&input.destination_city_id)?,
    ))
}

pub fn render_json(
    dataset: &CityDataset,
    input: &ComparisonInput,
    result: &ComparisonResult,
) -> Result<String> {
    let (origin, destination) = labels(dataset, input)?;
    let report = ComparisonReport {
        origin: origin.into(),
        destination: destination.into(),
        annual_salary: input.annual_salary,
        housing_tenure: input.housing_tenure,
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_text(
    dataset: &CityDataset,
    input: &ComparisonInput,
    result: &ComparisonResult,
) -> Result<String> {
    let (origin, destination) = labels(dataset, input)?;
    let mut out = String::new();

    out.push_str(&format!(
        "{} -> {} ({})\n",
        origin.display_name, destination.display_name, input.housing_tenure
    ));
    out.push_str(&format!(
        "{} is {} {}.\n\n",
        destination.display_name,
        describe_difference(result.percent_difference),
        origin.display_name
    ));
    out.push_str(&format!(
        "Estimated monthly spend: {} -> {}\n",
        format_currency(result.origin_monthly_cost),
        format_currency(result.destination_monthly_cost)
    ));
    out.push_str(&format!(
        "Break-even salary:       {} ({})\n\n",
        format_currency(result.required_salary),
        format_adjustment(result.salary_adjustment)
    ));

    // Width in chars; `{:>w$}` pads by chars too.
    let origin_width = origin.display_name.chars().count().max(6);
    let destination_width = destination.display_name.chars().count().max(6);
    out.push_str(&format!(
        "{:<16}{:>ow$}  {:>dw$}\n",
        "Category",
        origin.display_name,
        destination.display_name,
        ow = origin_width,
        dw = destination_width
    ));
    for row in &result.category_breakdown {
        if row.is_total_row {
            out.push_str(&"-".repeat(16 + origin_width + 2 + destination_width));
            out.push('\n');
        }
        out.push_str(&format!(
            "{:<16}{:>ow$}  {:>dw$}\n",
            row.label,
            row.origin_value.round() as i64,
            row.destination_value.round() as i64,
            ow = origin_width,
            dw = destination_width
        ));
    }

    Ok(out)
}

/// Writes every published comparison to `writer`.
pub struct ReportSink<W: Write> {
    dataset: Arc<CityDataset>,
    format: OutputFormat,
    writer: W,
}

impl<W: Write> ReportSink<W> {
    pub fn new(dataset: Arc<CityDataset>, format: OutputFormat, writer: W) -> Self {
        Self {
            dataset,
            format,
            writer,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&self, input: &ComparisonInput, result: &ComparisonResult) -> Result<String> {
        match self.format {
            OutputFormat::Text => render_text(&self.dataset, input, result),
            OutputFormat::Json => render_json(&self.dataset, input, result),
        }
    }
}

impl<W: Write> ResultSink for ReportSink<W> {
    fn publish(&mut self, input: &ComparisonInput, outcome: &Result<ComparisonResult>) {
        // Failed comparisons are reported by whoever owns the session.
        let Ok(result) = outcome else {
            return;
        };

        match self.render(input, result) {
            Ok(rendered) => {
                if let Err(e) = writeln!(self.writer, "{}", rendered.trim_end()) {
                    tracing::error!("Failed to write report: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to render report: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin::BuiltinDataset;
    use crate::core::engine::compare;
    use crate::domain::ports::DatasetSource;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(4347), "$4,347");
        assert_eq!(format_currency(72196), "$72,196");
        assert_eq!(format_currency(-2804), "-$2,804");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
        assert_eq!(format_adjustment(1250), "+$1,250");
        assert_eq!(format_adjustment(0), "$0");
    }

    #[test]
    fn test_describe_difference() {
        assert_eq!(describe_difference(-3.738), "3.7% less expensive than");
        assert_eq!(describe_difference(12.0), "12.0% more expensive than");
        assert_eq!(describe_difference(0.0), "the same cost as");
        assert_eq!(describe_difference(0.04), "less than 0.1% more expensive than");
        assert_eq!(describe_difference(-0.01), "less than 0.1% less expensive than");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text_and_json() {
        let dataset = BuiltinDataset.load().unwrap();
        let input = ComparisonInput::new("chicago", "austin", 75_000.0, HousingTenure::Renting);
        let result = compare(&dataset, &input).unwrap();

        let text = render_text(&dataset, &input, &result).unwrap();
        assert!(text.contains("Austin, TX is 3.7% less expensive than Chicago, IL."));
        assert!(text.contains("$4,347 -> $4,184"));
        assert!(text.contains("$72,196 (-$2,804)"));
        assert!(text.contains("Overall"));

        let json = render_json(&dataset, &input, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["origin"]["display_name"], "Chicago, IL");
        assert_eq!(value["housing_tenure"], "renting");
        assert_eq!(value["result"]["required_salary"], 72196);
        assert_eq!(value["result"]["category_breakdown"][4]["is_total_row"], true);
        assert_eq!(value["result"]["percent_difference"], -3.7);
    }

    #[test]
    fn test_table_aligns_non_ascii_labels() {
        let city = |id: &str, name: &str, cost_index: f64| CityRecord {
            id: id.to_string(),
            display_name: name.to_string(),
            cost_index,
            housing_index: cost_index,
            utilities_index: 100.0,
            transport_index: 100.0,
            groceries_index: 100.0,
        };
        let dataset = CityDataset::new(vec![
            city("montreal", "Montréal, QC", 98.0),
            city("zurich", "Zürich", 171.0),
        ])
        .unwrap();
        let input = ComparisonInput::new("montreal", "zurich", 80_000.0, HousingTenure::Renting);
        let result = compare(&dataset, &input).unwrap();

        let text = render_text(&dataset, &input, &result).unwrap();
        let table: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.starts_with("Category"))
            .collect();
        assert_eq!(table.len(), 7);
        let width = table[0].chars().count();
        for line in &table {
            assert_eq!(line.chars().count(), width, "{:?}", line);
        }
    }

    #[test]
    fn test_report_sink_writes_output() {
        let dataset = Arc::new(BuiltinDataset.load().unwrap());
        let input = ComparisonInput::new("chicago", "austin", 75_000.0, HousingTenure::Renting);
        let outcome = compare(&dataset, &input);

        let mut sink = ReportSink::new(dataset, OutputFormat::Text, Vec::new());
        sink.publish(&input, &outcome);
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.starts_with("Chicago, IL -> Austin, TX (renting)"));
    }

    #[test]
    fn test_report_sink_skips_failed_comparison() {
        let dataset = Arc::new(BuiltinDataset.load().unwrap());
        let input = ComparisonInput::new("chicago", "atlantis", 75_000.0, HousingTenure::Renting);
        let outcome = compare(&dataset, &input);
        assert!(outcome.is_err());

        let mut sink = ReportSink::new(dataset, OutputFormat::Json, Vec::new());
        sink.publish(&input, &outcome);
        assert!(sink.into_inner().is_empty());
    }
}
