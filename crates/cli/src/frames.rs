//! Tabular inputs and outputs (CSV or Parquet, chosen by file extension).

use anyhow::{Context, Result};
use polars::prelude::*;
use roman::{decode, encode, Numeral};
use std::fs::File;
use std::path::Path;

/// Value/numeral table for every integer in `min..=max`; both bounds must lie in `1..=3999`.
pub fn numeral_table(min: u16, max: u16) -> Result<DataFrame> {
    let lo = Numeral::new(min)?.value();
    let hi = Numeral::new(max)?.value();
    let values: Vec<u32> = (lo..=hi).map(u32::from).collect();
    let numerals = values
        .iter()
        .map(|&n| encode(i64::from(n)))
        .collect::<roman::Result<Vec<String>>>()?;
    Ok(df!("value" => values, "numeral" => numerals)?)
}

/// Read `column` from a CSV file and decode each cell.
///
/// Missing cells decode as `NullInput`; failures are logged and stored as null values,
/// so the output keeps one row per input row. Returns the frame and the failure count.
pub fn decode_csv_column(input: &Path, column: &str) -> Result<(DataFrame, usize)> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", input.display()))?
        .collect()?;
    let cells = df
        .column(column)
        .with_context(|| format!("column {column} not found in {}", input.display()))?
        .str()
        .with_context(|| format!("column {column} is not a string column"))?;

    let mut texts: Vec<Option<String>> = Vec::with_capacity(df.height());
    let mut values: Vec<Option<u64>> = Vec::with_capacity(df.height());
    let mut failed = 0usize;
    for (row, cell) in cells.into_iter().enumerate() {
        texts.push(cell.map(str::to_owned));
        match decode(&cell) {
            Ok(v) => values.push(Some(v)),
            Err(err) => {
                tracing::warn!(row, cell = ?cell, %err, "decode_failed");
                failed += 1;
                values.push(None);
            }
        }
    }
    let out = df!(column => texts, "value" => values)?;
    Ok((out, failed))
}

/// Write `df` to `out` as Parquet when the extension is `.parquet`, CSV otherwise.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(file).finish(df)?;
    } else {
        CsvWriter::new(file).include_header(true).finish(df)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn table_covers_requested_range() {
        let df = numeral_table(1, 12).unwrap();
        assert_eq!(df.shape(), (12, 2));
        let numerals = df.column("numeral").unwrap().str().unwrap();
        assert_eq!(numerals.get(3), Some("IV"));
        assert_eq!(numerals.get(11), Some("XII"));
    }

    #[test]
    fn table_rejects_out_of_range_bounds() {
        assert!(numeral_table(0, 10).is_err());
        assert!(numeral_table(1, 4000).is_err());
    }

    #[test]
    fn csv_column_decodes_with_failures_kept_as_nulls() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, "id,numeral\n1,XLIX\n2,mim\n3,XIVt\n4,\n").unwrap();
        let (df, failed) = decode_csv_column(&input, "numeral").unwrap();
        assert_eq!(failed, 2);
        assert_eq!(df.height(), 4);
        let values = df.column("value").unwrap().u64().unwrap();
        assert_eq!(values.get(0), Some(49));
        assert_eq!(values.get(1), Some(1999));
        assert_eq!(values.get(2), None);
        assert_eq!(values.get(3), None);
    }

    #[test]
    fn write_frame_picks_format_by_extension() {
        let dir = tempdir().unwrap();
        let mut df = numeral_table(1, 5).unwrap();
        let csv = dir.path().join("nested/table.csv");
        write_frame(&mut df, &csv).unwrap();
        let text = std::fs::read_to_string(&csv).unwrap();
        assert!(text.starts_with("value,numeral"));
        assert!(text.contains("4,IV"));

        let parquet = dir.path().join("table.parquet");
        write_frame(&mut df, &parquet).unwrap();
        let bytes = std::fs::read(&parquet).unwrap();
        assert_eq!(&bytes[..4], b"PAR1");
    }
}
