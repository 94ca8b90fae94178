use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::query::Query;
use crate::record::Record;

/// `U+XXXX<TAB><glyph><TAB><name>` for one record.
pub fn format_row(record: &Record) -> String {
    format!(
        "U+{:04X}\t{}\t{}",
        record.code_point,
        record.glyph(),
        record.display_name
    )
}

/// Scan database text and write a row for every record matching `query`.
///
/// Rows come out in input order. Returns the number of rows written.
/// A closed output pipe ends the scan early without an error.
pub fn list<R: BufRead, W: Write>(reader: R, query: &Query, out: &mut W) -> Result<usize> {
    let mut matched = 0;
    for line in reader.lines() {
        let line = line.context("Failed to read character database")?;
        if line.trim().is_empty() {
            continue;
        }
        let record = Record::parse(&line);
        if query.matches(&record) {
            if reader_gone(writeln!(out, "{}", format_row(&record)))? {
                log::debug!("output closed after {matched} row(s)");
                return Ok(matched);
            }
            matched += 1;
        }
    }
    reader_gone(out.flush())?;
    log::debug!("{matched} record(s) matched {:?}", query.tokens());
    Ok(matched)
}

/// `Ok(true)` when the write failed because the consumer went away.
fn reader_gone(result: io::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(true),
        Err(e) => Err(e).context("Failed to write result"),
    }
}
