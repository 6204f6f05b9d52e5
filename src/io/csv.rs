//! IO functionality for reading the course list from its CSV representation.

use crate::{derive_tag, Course, NAME_COLUMN, NOTES_COLUMN, NUMBER_COLUMN, TAG_COLUMNS};

/// Positions of the declared columns within the CSV header, resolved once at the start of a run
struct HeaderShape {
    number: usize,
    name: usize,
    notes: usize,
    /// Derived tag name and column position of each declared tag column, in declared order
    tags: Vec<(String, usize)>,
}

impl HeaderShape {
    fn from_header(header: &csv::StringRecord) -> Result<HeaderShape, String> {
        Ok(HeaderShape {
            number: find_column(header, NUMBER_COLUMN)?,
            name: find_column(header, NAME_COLUMN)?,
            notes: find_column(header, NOTES_COLUMN)?,
            tags: TAG_COLUMNS
                .iter()
                .map(|column| Ok((derive_tag(column), find_column(header, column)?)))
                .collect::<Result<Vec<_>, String>>()?,
        })
    }
}

fn find_column(header: &csv::StringRecord, column: &str) -> Result<usize, String> {
    header.iter().position(|h| h == column).ok_or(format!(
        "Missing column '{}' in the course list header.",
        column
    ))
}

/// Read the course list from CSV data
///
/// This function takes a Reader (e.g. an open filehandle), reads its contents and interprets them
/// as a UTF-8 CSV course list. The first record must be a header containing at least the columns
/// `Course Number`, `Course Name`, `Notes` and all tag columns from `TAG_COLUMNS` (exact names);
/// additional columns are ignored.
///
/// For each data row, a tag column counts as present iff its cell is non-empty after trimming
/// leading/trailing whitespace. The course's tag list contains the derived tag names of the
/// present columns, in the order of `TAG_COLUMNS` (not in cell order). `number` and `name` are
/// the trimmed cell values; `notes` is the trimmed cell value or None if it is empty.
///
/// # Errors
///
/// Fails with a string error message to be displayed to the user, if
/// * the data is no valid CSV (the string representation of the csv error is returned)
/// * one of the declared columns is missing from the header
/// * a row has a different number of fields than the header (no ragged-row tolerance)
pub fn read<R: std::io::Read>(reader: R) -> Result<Vec<Course>, String> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let shape = HeaderShape::from_header(csv_reader.headers().map_err(|e| e.to_string())?)?;

    let mut courses = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        courses.push(parse_row(&shape, &record));
    }
    Ok(courses)
}

/// Build a single Course from a CSV record. The record is guaranteed to have as many fields as
/// the header, since the reader rejects ragged rows.
fn parse_row(shape: &HeaderShape, record: &csv::StringRecord) -> Course {
    let cell = |index: usize| record.get(index).unwrap_or("").trim();

    let tags = shape
        .tags
        .iter()
        .filter(|(_, index)| !cell(*index).is_empty())
        .map(|(tag, _)| tag.clone())
        .collect();
    let notes = cell(shape.notes);

    Course {
        number: cell(shape.number).to_owned(),
        name: cell(shape.name).to_owned(),
        tags,
        notes: if notes.is_empty() {
            None
        } else {
            Some(notes.to_owned())
        },
    }
}
