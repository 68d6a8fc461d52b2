use crate::core::{OutputFormat, SpecificityResult};
use crate::utils::error::Result;
use std::io::Write;

const TABLE_HEADERS: [&str; 7] = [
    "No. species",
    "No. genera",
    "No. families",
    "No. orders",
    "No. classes",
    "Rank",
    "Index (HS)",
];

const CSV_HEADERS: [&str; 7] = [
    "species",
    "genera",
    "families",
    "orders",
    "classes",
    "host_rank",
    "host_index",
];

fn row(result: &SpecificityResult) -> [String; 7] {
    let input = &result.input;
    [
        input.species.to_string(),
        input.genera.to_string(),
        input.families.to_string(),
        input.orders.to_string(),
        input.classes.to_string(),
        result.output.host_rank.to_string(),
        format!("{:.8}", result.output.host_index),
    ]
}

pub fn write_table<W: Write>(out: &mut W, results: &[SpecificityResult]) -> Result<()> {
    let rows: Vec<[String; 7]> = results.iter().map(row).collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = TABLE_HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| format!("{:>w$}", h, w = *w))
        .collect();
    writeln!(out, "{}", header.join("  "))?;
    let total = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    writeln!(out, "{}", "-".repeat(total))?;

    for cells in &rows {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| format!("{:>w$}", c, w = *w))
            .collect();
        writeln!(out, "{}", line.join("  "))?;
    }
    Ok(())
}

pub fn write_csv<W: Write>(out: &mut W, results: &[SpecificityResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADERS)?;
    for result in results {
        writer.write_record(row(result))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, results: &[SpecificityResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_results<W: Write>(
    out: &mut W,
    results: &[SpecificityResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, results),
        OutputFormat::Csv => write_csv(out, results),
        OutputFormat::Json => write_json(out, results),
    }
}

/// Output of a one-shot calculation.
pub fn write_single<W: Write>(
    out: &mut W,
    result: &SpecificityResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "rank:  {}", result.output.host_rank)?;
            writeln!(out, "index: {:.8}", result.output.host_index)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(out, std::slice::from_ref(result)),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SpecificityInput, SpecificityOutput};

    fn sample() -> Vec<SpecificityResult> {
        vec![
            SpecificityResult::merge(
                SpecificityInput::new(20, 15, 8, 6, 2),
                SpecificityOutput {
                    host_rank: 2629434956,
                    host_index: 9.4198,
                },
            ),
            SpecificityResult::merge(
                SpecificityInput::new(1, 1, 1, 1, 1),
                SpecificityOutput {
                    host_rank: 1,
                    host_index: 0.0,
                },
            ),
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_results(&mut buf, &sample(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_has_headers_and_eight_decimals() {
        let text = render(OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("No. species"));
        assert!(lines[0].ends_with("Index (HS)"));
        assert!(lines[2].contains("2629434956"));
        assert!(lines[2].ends_with("9.41980000"));
        assert!(lines[3].ends_with("0.00000000"));
    }

    #[test]
    fn test_csv_keeps_history_order() {
        let text = render(OutputFormat::Csv);
        let mut reader = csv::Reader::from_reader(text.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "species");
        assert_eq!(&headers[6], "host_index");

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "20");
        assert_eq!(&records[1][5], "1");
    }

    #[test]
    fn test_json_is_a_flat_array() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["orders"], 6);
        assert_eq!(items[0]["host_rank"], 2629434956u64);
    }

    #[test]
    fn test_single_table_output() {
        let mut buf = Vec::new();
        write_single(&mut buf, &sample()[0], OutputFormat::Table).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "rank:  2629434956\nindex: 9.41980000\n"
        );
    }
}
