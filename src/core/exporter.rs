use crate::domain::model::{Record, HEADER_COLUMNS};
use crate::utils::error::{EtlError, Result};

/// `d/M/yyyy` in chrono terms: no padding on day and month.
pub const EXPORT_DATE_FORMAT: &str = "%-d/%-m/%Y";

/// Serializes records back into the upload format: same header, no quoting,
/// one `\n` terminated row per record.
pub fn export_csv(records: &[Record]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER_COLUMNS)?;

    for record in records {
        let age = record.age.to_string();
        let birth_date = record
            .birth_date
            .map(|d| d.format(EXPORT_DATE_FORMAT).to_string())
            .unwrap_or_default();

        writer.write_record([
            record.first_name.as_str(),
            record.last_name.as_str(),
            record.email.as_str(),
            record.sex.as_str(),
            record.access_ip.as_str(),
            age.as_str(),
            birth_date.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("Exported CSV is not valid UTF-8: {}", e),
    })
}
