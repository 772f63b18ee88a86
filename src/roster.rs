//! Player table loading and cleaning.
//!
//! [`load_players()`] reads the semicolon-delimited CSV into a [`PlayerTable`]
//! and coerces the salary column to a number in the same pass: the literal
//! token `null` and any unparsable text become a missing value, never an
//! error. This is the only mutation in the pipeline; every report downstream
//! is a read-only view over the loaded table.

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::debug;

use crate::{error::PipelineError, io_utils};

pub const DEFAULT_INPUT: &str = "Jogadores.csv";

pub const NAME_COLUMN: &str = "nome_do_jogador";
pub const TEAM_COLUMN: &str = "nome_time_jogador";
pub const STATE_COLUMN: &str = "nome_estado_jogador";
pub const SALARY_COLUMN: &str = "salario_do_jogador";

const NULL_TOKEN: &str = "null";

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub state: String,
    /// `None` is the missing value: `null` in the input or a salary cell
    /// that did not parse as a finite number.
    pub salary: Option<f64>,
}

/// Ordered player rows, input-file order. Immutable after load.
#[derive(Debug, Default, Clone)]
pub struct PlayerTable {
    players: Vec<PlayerRecord>,
}

impl PlayerTable {
    pub fn from_records(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

pub fn load_players(
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
) -> Result<PlayerTable> {
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)?;

    let name_idx = column_index(&headers, NAME_COLUMN)?;
    let team_idx = column_index(&headers, TEAM_COLUMN)?;
    let state_idx = column_index(&headers, STATE_COLUMN)?;
    let salary_idx = column_index(&headers, SALARY_COLUMN)?;
    debug!("Resolved {} header column(s)", headers.len());

    let mut players = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)?;
        players.push(PlayerRecord {
            name: text_field(&decoded, name_idx),
            team: text_field(&decoded, team_idx),
            state: text_field(&decoded, state_idx),
            salary: clean_salary(decoded.get(salary_idx).map(String::as_str).unwrap_or("")),
        });
    }
    Ok(PlayerTable::from_records(players))
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| {
            anyhow::Error::new(PipelineError::MissingColumn {
                name: name.to_string(),
            })
        })
}

fn text_field(record: &[String], index: usize) -> String {
    let raw = record.get(index).map(String::as_str).unwrap_or("");
    normalize_missing(raw).to_string()
}

fn normalize_missing(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed == NULL_TOKEN { "" } else { trimmed }
}

/// Numeric coercion policy for the salary column: any cell that is not a
/// finite number becomes missing. Parse failures are normal data here, not
/// errors.
pub fn clean_salary(raw: &str) -> Option<f64> {
    let text = normalize_missing(raw);
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
