use std::collections::HashMap;
use std::fmt;
use serde_json::{Map, Value};
use thiserror::Error;

const SEPARATOR: char = '.';
const PREVIEW_ROWS: usize = 5;

/// A flat, row-per-entry table built from a sequence of JSON objects
///
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Flattens JSON objects into a table.
    /// Nested objects become dotted column names, and the columns are the union of all keys
    /// in the order they are first seen. Keys missing in an entry give an empty cell.
    ///
    /// # Arguments
    ///
    /// * 'entries' - the JSON objects, one per row
    pub fn from_entries(entries: &[Value]) -> Result<Table, TableError> {
        let mut columns: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut flat_entries: Vec<Vec<(usize, String)>> = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let object = entry.as_object()
                .ok_or(TableError::NotAnObject(i))?;

            let mut flat: Vec<(String, String)> = Vec::new();
            flatten_object(object, None, &mut flat);

            let cells = flat.into_iter()
                .map(|(name, cell)| {
                    let col = *index.entry(name.clone()).or_insert_with(|| {
                        columns.push(name);
                        columns.len() - 1
                    });
                    (col, cell)
                })
                .collect::<Vec<(usize, String)>>();

            flat_entries.push(cells);
        }

        let rows = flat_entries.into_iter()
            .map(|cells| {
                let mut row = vec![String::new(); columns.len()];
                cells.into_iter().for_each(|(col, cell)| row[col] = cell);
                row
            })
            .collect::<Vec<Vec<String>>>();

        Ok(Table { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serializes the table to comma separated text with a header row and no index column.
    /// A table without rows serializes to an empty string. Rows without any column
    /// serialize to an empty header line followed by one empty line per row.
    ///
    pub fn to_csv(&self) -> Result<String, TableError> {
        if self.rows.is_empty() {
            return Ok(String::new());
        }
        if self.columns.is_empty() {
            return Ok("\n".repeat(self.rows.len() + 1));
        }

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(&self.columns)?;
        for row in self.rows.iter() {
            writer.write_record(row)?;
        }

        let bytes = writer.into_inner()
            .map_err(|e| TableError::WriteError(e.to_string()))?;

        String::from_utf8(bytes).map_err(|e| TableError::WriteError(e.to_string()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.columns.join(" | "))?;
        for row in self.rows.iter().take(PREVIEW_ROWS) {
            writeln!(f, "{}", row.join(" | "))?;
        }
        if self.rows.len() > PREVIEW_ROWS {
            writeln!(f, "...")?;
        }
        write!(f, "[{} rows x {} columns]", self.rows.len(), self.columns.len())
    }
}

/// Recursively flattens a JSON object into (dotted name, cell text) pairs
///
/// # Arguments
///
/// * 'object' - the object to flatten
/// * 'prefix' - dotted name of the object itself, None at top level
/// * 'out' - collected pairs, in key order
fn flatten_object(object: &Map<String, Value>, prefix: Option<&str>, out: &mut Vec<(String, String)>) {
    for (key, value) in object {
        let name = match prefix {
            Some(p) => format!("{}{}{}", p, SEPARATOR, key),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) => flatten_object(nested, Some(&name), out),
            _ => out.push((name, cell_text(value))),
        }
    }
}

/// Renders a non-object JSON value as a table cell
///
/// # Arguments
///
/// * 'value' - the value to render
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays (e.g. the forecast "weather" list) are kept whole as compact JSON
        _ => value.to_string(),
    }
}

/// Error depicting errors that occur while building or serializing a table
///
#[derive(Debug, Error)]
pub enum TableError {
    #[error("NotAnObject: entry {0} is not a JSON object")]
    NotAnObject(usize),
    #[error("CsvError: {0}")]
    CsvError(#[from] csv::Error),
    #[error("WriteError: {0}")]
    WriteError(String),
}
