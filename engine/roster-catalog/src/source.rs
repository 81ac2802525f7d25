//! Tabular roster sources (CSV and JSON spreadsheet exports)

use crate::catalog::{CatalogLoad, RosterCatalog};
use crate::error::{CatalogError, Result};
use crate::types::{RawPrice, RosterRow};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const NAME_HEADERS: &[&str] = &["name", "player", "nombre", "jugador"];
const PRICE_HEADERS: &[&str] = &["price", "precio", "value", "cost"];
const POSITION_HEADERS: &[&str] = &["position", "pos", "posicion", "posición"];

/// Load a roster file, picking the reader from the file extension
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<CatalogLoad> {
    let path = path.as_ref();
    info!("Loading roster from: {:?}", path);

    let extension =
        path.extension().and_then(|ext| ext.to_str()).map(str::to_lowercase).unwrap_or_default();

    let rows = match extension.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?)?,
        "json" => read_json(&std::fs::read_to_string(path)?)?,
        _ => return Err(CatalogError::UnsupportedFormat { extension }),
    };

    info!("Read {} roster rows from {:?}", rows.len(), path);
    Ok(RosterCatalog::load(rows))
}

/// Read roster rows from CSV with a header line.
///
/// Cells that are not valid UTF-8 (typical of Windows-1252 exports) are
/// decoded lossily instead of failing the whole file.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RosterRow>> {
    let mut reader =
        csv::ReaderBuilder::new().trim(csv::Trim::All).flexible(true).from_reader(reader);

    let headers: Vec<String> = reader.byte_headers()?.iter().map(decode_cell).collect();
    let name_col = find_column(headers.iter().map(String::as_str), NAME_HEADERS, "name")?;
    let price_col = find_column(headers.iter().map(String::as_str), PRICE_HEADERS, "price")?;
    let position_col =
        find_column(headers.iter().map(String::as_str), POSITION_HEADERS, "position")?;

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        if std::str::from_utf8(record.as_slice()).is_err() {
            warn!("Roster row {} is not valid UTF-8, decoding lossily", rows.len() + 1);
        }

        let cell = |col: usize| record.get(col).map(decode_cell).unwrap_or_default();
        rows.push(RosterRow {
            name: cell(name_col),
            price: RawPrice::Text(cell(price_col)),
            position: cell(position_col),
        });
    }

    Ok(rows)
}

/// Read roster rows from a JSON array of objects.
///
/// Numeric price cells keep their numeric meaning; everything else goes
/// through the text rules. A column is only missing when no row carries it;
/// a row without one of the keys reads it as an empty cell.
pub fn read_json(content: &str) -> Result<Vec<RosterRow>> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(items) = value else {
        return Err(CatalogError::NotAnArray);
    };

    let objects = items
        .into_iter()
        .map(|item| match item {
            Value::Object(object) => Ok(object),
            _ => Err(CatalogError::NotAnArray),
        })
        .collect::<Result<Vec<_>>>()?;

    if !objects.is_empty() {
        for (aliases, column) in
            [(NAME_HEADERS, "name"), (PRICE_HEADERS, "price"), (POSITION_HEADERS, "position")]
        {
            if !objects.iter().any(|object| json_cell(object, aliases).is_some()) {
                return Err(CatalogError::MissingColumn { column });
            }
        }
    }

    let rows = objects
        .iter()
        .map(|object| RosterRow {
            name: json_cell(object, NAME_HEADERS).map(text_of).unwrap_or_default(),
            price: json_cell(object, PRICE_HEADERS)
                .map(raw_price_of)
                .unwrap_or_else(|| RawPrice::Text(String::new())),
            position: json_cell(object, POSITION_HEADERS).map(text_of).unwrap_or_default(),
        })
        .collect();

    Ok(rows)
}

fn is_alias(header: &str, aliases: &[&str]) -> bool {
    let header = header.trim().to_lowercase();
    aliases.iter().any(|alias| *alias == header)
}

fn find_column<'a, I>(mut headers: I, aliases: &[&str], column: &'static str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    headers
        .position(|header| is_alias(header, aliases))
        .ok_or(CatalogError::MissingColumn { column })
}

fn json_cell<'a>(object: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    object.iter().find(|(key, _)| is_alias(key, aliases)).map(|(_, value)| value)
}

fn decode_cell(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn raw_price_of(value: &Value) -> RawPrice {
    match value {
        Value::Number(number) => number
            .as_f64()
            .map(RawPrice::Number)
            .unwrap_or_else(|| RawPrice::Text(number.to_string())),
        Value::String(text) => RawPrice::Text(text.clone()),
        Value::Null => RawPrice::Text(String::new()),
        other => RawPrice::Text(other.to_string()),
    }
}
