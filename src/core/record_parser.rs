use crate::core::coercion::{clean_cell, parse_age, parse_sex};
use crate::core::date_corrector::correct_birth_date;
use crate::domain::model::{Record, HEADER_COLUMNS};
use crate::utils::error::{EtlError, Result};
use chrono::NaiveDate;

pub const COLUMN_COUNT: usize = HEADER_COLUMNS.len();

/// Raw cells of one input line, with its 1-based physical line number.
#[derive(Debug, Clone)]
pub struct RawRow<'a> {
    pub line: u64,
    pub cells: Vec<&'a str>,
}

impl<'a> RawRow<'a> {
    pub fn new(line: u64, cells: Vec<&'a str>) -> Self {
        Self { line, cells }
    }

    pub fn is_short(&self) -> bool {
        self.cells.len() < COLUMN_COUNT
    }
}

/// Turns one row into a record.
///
/// Rows with fewer than seven cells yield `Ok(None)` and are skipped by the
/// caller; cells past the seventh are ignored.
pub fn parse_row(row: &RawRow<'_>, today: NaiveDate) -> Result<Option<Record>> {
    if row.is_short() {
        tracing::debug!("Skipping line {} with {} cells", row.line, row.cells.len());
        return Ok(None);
    }

    let cell = |index: usize| clean_cell(row.cells[index]);

    let sex = parse_sex(cell(3)).map_err(|e| EtlError::invalid_line(row.line, e.to_string()))?;
    let age = parse_age(cell(5)).map_err(|e| EtlError::invalid_line(row.line, e.to_string()))?;
    let birth_date = correct_birth_date(cell(6), age, today)
        .map_err(|e| EtlError::invalid_line(row.line, e.to_string()))?;

    Ok(Some(Record {
        first_name: cell(0).to_string(),
        last_name: cell(1).to_string(),
        email: cell(2).to_string(),
        sex,
        access_ip: cell(4).to_string(),
        age,
        birth_date: Some(birth_date),
    }))
}
