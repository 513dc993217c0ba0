use crate::core::file_validator::{self, UploadSource};
use crate::core::record_parser::{parse_row, RawRow};
use crate::domain::model::Record;
use crate::utils::error::{EtlError, Result};
use chrono::NaiveDate;

/// Validates an uploaded file and parses every data line into a record.
///
/// All-or-nothing: the first invalid line aborts the whole file and no
/// partially parsed set is returned. Records keep input order.
pub fn process(source: &UploadSource, today: NaiveDate) -> Result<Vec<Record>> {
    let file = file_validator::validate(source)?;
    tracing::debug!(
        "File {:?} passed validation ({} bytes)",
        source.filename,
        source.bytes.len()
    );

    // Quotes are plain characters and rows may be ragged.
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).quoting(false);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut row = csv::StringRecord::new();

    // Blank lines count toward the line number.
    // The header occupies line 1.
    for (index, text) in file_validator::split_lines(file.body()).into_iter().enumerate() {
        let line = index as u64 + 2;
        let has_cells = builder
            .from_reader(text.as_bytes())
            .read_record(&mut row)
            .map_err(|e| EtlError::invalid_format(format!("Error while reading the CSV: {}", e)))?;
        let cells = if has_cells { row.iter().collect() } else { Vec::new() };
        let raw = RawRow::new(line, cells);

        match parse_row(&raw, today)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    tracing::debug!("Parsed {} records, skipped {} short lines", records.len(), skipped);
    Ok(records)
}
