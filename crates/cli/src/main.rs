use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::cmp::Ordering;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod frames;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Roman numeral conversion, comparison and tables")]
struct Cmd {
    /// Optional free-form label; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Print one JSON object per input instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the canonical numeral for each integer
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print the value of each numeral (lenient: IL and MIM are accepted)
    Decode {
        #[arg(required = true)]
        numerals: Vec<String>,
    },
    /// Print less, equal or greater for two numerals
    Compare { left: String, right: String },
    /// Print numerals sorted by value
    Sort {
        #[arg(required = true)]
        numerals: Vec<String>,
    },
    /// Report whether each numeral is spelled canonically
    Check {
        #[arg(required = true)]
        numerals: Vec<String>,
    },
    /// Write a value/numeral table (CSV or Parquet by extension) with a provenance sidecar
    Table {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = roman::MIN_VALUE)]
        min: u16,
        #[arg(long, default_value_t = roman::MAX_VALUE)]
        max: u16,
    },
    /// Decode one column of a CSV file and write it with a `value` column
    DecodeCsv {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "numeral")]
        column: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// One line of output for per-item commands.
#[derive(Serialize)]
struct Row {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    numeral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Row {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            value: None,
            numeral: None,
            canonical: None,
            error: None,
        }
    }

    fn plain(&self) -> String {
        if let Some(err) = &self.error {
            return format!("{}\terror: {err}", self.input);
        }
        let mut out = self.input.clone();
        if let Some(v) = self.value {
            out.push_str(&format!("\t{v}"));
        }
        if let Some(n) = &self.numeral {
            out.push_str(&format!("\t{n}"));
        }
        if let Some(c) = self.canonical {
            out.push_str(if c { "\tcanonical" } else { "\tnon-canonical" });
        }
        out
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    match cmd.action {
        Action::Encode { values } => encode(values, cmd.json),
        Action::Decode { numerals } => decode(numerals, cmd.json),
        Action::Compare { left, right } => compare(left, right, cmd.json),
        Action::Sort { numerals } => sort(numerals, cmd.json),
        Action::Check { numerals } => check(numerals, cmd.json),
        Action::Table { out, min, max } => table(out, min, max, tag),
        Action::DecodeCsv { input, column, out } => decode_csv(input, column, out, tag),
        Action::Report => report(tag),
    }
}

fn emit(rows: &[Row], as_json: bool) -> Result<()> {
    for row in rows {
        if as_json {
            println!("{}", serde_json::to_string(row)?);
        } else {
            println!("{}", row.plain());
        }
    }
    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        bail!("{failed} of {} inputs failed", rows.len());
    }
    Ok(())
}

fn encode(values: Vec<i64>, as_json: bool) -> Result<()> {
    tracing::info!(count = values.len(), "encode");
    let rows: Vec<Row> = values
        .into_iter()
        .map(|n| {
            let mut row = Row::new(n.to_string());
            match roman::encode(n) {
                Ok(s) => row.numeral = Some(s),
                Err(err) => {
                    tracing::warn!(value = n, %err, "encode_failed");
                    row.error = Some(err.to_string());
                }
            }
            row
        })
        .collect();
    emit(&rows, as_json)
}

fn decode(numerals: Vec<String>, as_json: bool) -> Result<()> {
    tracing::info!(count = numerals.len(), "decode");
    let rows: Vec<Row> = numerals
        .into_iter()
        .map(|s| {
            let result = roman::decode(&s);
            let mut row = Row::new(s);
            match result {
                Ok(v) => row.value = Some(v),
                Err(err) => {
                    tracing::warn!(input = row.input, %err, "decode_failed");
                    row.error = Some(err.to_string());
                }
            }
            row
        })
        .collect();
    emit(&rows, as_json)
}

fn ordering_word(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

fn compare(left: String, right: String, as_json: bool) -> Result<()> {
    tracing::info!(left, right, "compare");
    let ord = roman::compare(&left, &right)
        .with_context(|| format!("comparing {left} with {right}"))?;
    if as_json {
        let obj = json!({"left": left, "right": right, "ordering": ordering_word(ord)});
        println!("{}", serde_json::to_string(&obj)?);
    } else {
        println!("{}", ordering_word(ord));
    }
    Ok(())
}

fn sort(mut numerals: Vec<String>, as_json: bool) -> Result<()> {
    tracing::info!(count = numerals.len(), "sort");
    roman::sort_numerals(&mut numerals).context("sorting numerals")?;
    if as_json {
        println!("{}", serde_json::to_string(&numerals)?);
    } else {
        for s in &numerals {
            println!("{s}");
        }
    }
    Ok(())
}

fn check(numerals: Vec<String>, as_json: bool) -> Result<()> {
    tracing::info!(count = numerals.len(), "check");
    let rows: Vec<Row> = numerals
        .into_iter()
        .map(|s| {
            let result = roman::is_canonical(&s);
            let mut row = Row::new(s);
            match result {
                Ok(c) => row.canonical = Some(c),
                Err(err) => {
                    tracing::warn!(input = row.input, %err, "check_failed");
                    row.error = Some(err.to_string());
                }
            }
            row
        })
        .collect();
    emit(&rows, as_json)
}

fn table(out: PathBuf, min: u16, max: u16, tag: Option<String>) -> Result<()> {
    tracing::info!(out = %out.display(), min, max, tag = ?tag, "table");
    let mut df = frames::numeral_table(min, max)?;
    frames::write_frame(&mut df, &out)?;
    tracing::info!(rows = df.height(), "table_written");
    let payload = provenance::Payload::new(json!({"min": min, "max": max})).with_tag(tag);
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn decode_csv(input: PathBuf, column: String, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), column, out = %out.display(), tag = ?tag, "decode_csv");
    let (mut df, failed) = frames::decode_csv_column(&input, &column)?;
    frames::write_frame(&mut df, &out)?;
    tracing::info!(rows = df.height(), failed, "decode_csv_written");
    let payload = provenance::Payload::new(json!({
        "input": input.to_string_lossy(),
        "column": column,
        "failed": failed
    }))
    .with_tag(tag);
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::document(
        tag.as_deref(),
        json!({"min": roman::MIN_VALUE, "max": roman::MAX_VALUE}),
        &[],
    );
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn negative_values_parse_as_encode_inputs() {
        let cmd = Cmd::try_parse_from(["cli", "encode", "-1", "1999"]).unwrap();
        match cmd.action {
            Action::Encode { values } => assert_eq!(values, [-1, 1999]),
            _ => panic!("expected encode"),
        }
    }

    #[test]
    fn row_plain_formats() {
        let mut row = Row::new("MIM");
        row.value = Some(1999);
        assert_eq!(row.plain(), "MIM\t1999");
        let mut bad = Row::new("XIVt");
        bad.error = Some("'t' is not a valid roman numeral".into());
        assert_eq!(bad.plain(), "XIVt\terror: 't' is not a valid roman numeral");
    }

    #[test]
    fn emit_fails_when_any_row_failed() {
        let mut bad = Row::new("0");
        bad.error = Some("out of range".into());
        assert!(emit(&[Row::new("I"), bad], true).is_err());
    }
}
