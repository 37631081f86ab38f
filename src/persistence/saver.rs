//! Writing employees to the row format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{RosterError, RosterResult};
use crate::models::Employee;

use super::row::format_row;

/// Writes one row per employee to `writer`, in the given order.
///
/// Every employee is encoded before anything is written, so an employee
/// that cannot be encoded leaves `writer` untouched. Returns the number of
/// rows written.
pub fn save<'a, W, I>(writer: &mut W, employees: I) -> RosterResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Employee>,
{
    let rows = encode_rows(employees)?;
    write_rows("<output>", writer, &rows)
}

/// Writes one row per employee to the file at `path`, replacing it.
///
/// The file is only opened once every employee has been encoded; a failed
/// encode leaves the existing file as it was.
pub fn save_file<'a, P, I>(path: P, employees: I) -> RosterResult<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Employee>,
{
    let rows = encode_rows(employees)?;

    let path = path.as_ref();
    let path_str = path.display().to_string();
    let file = File::create(path).map_err(|e| io_error(&path_str, e))?;
    let mut writer = BufWriter::new(file);
    let written = write_rows(&path_str, &mut writer, &rows)?;
    writer.flush().map_err(|e| io_error(&path_str, e))?;
    Ok(written)
}

fn encode_rows<'a, I>(employees: I) -> RosterResult<Vec<String>>
where
    I: IntoIterator<Item = &'a Employee>,
{
    employees.into_iter().map(format_row).collect()
}

fn write_rows<W: Write>(destination: &str, writer: &mut W, rows: &[String]) -> RosterResult<usize> {
    for row in rows {
        writeln!(writer, "{}", row).map_err(|e| io_error(destination, e))?;
    }

    let written = rows.len();
    info!(destination, written, "Saved employee rows");
    Ok(written)
}

fn io_error(path: &str, error: std::io::Error) -> RosterError {
    RosterError::Io {
        path: path.to_string(),
        message: error.to_string(),
    }
}
