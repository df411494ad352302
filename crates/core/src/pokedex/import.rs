//! Offline import of species data from CSV into the SQLite store.
//!
//! Rows are header-less: `id,name,hp,attack,defense,special_attack,
//! special_defense,speed[,form]`. A repeated id is an alternate form of a
//! species already imported and only contributes an extra stats row.

use std::io::Read;

use rusqlite::{params, OptionalExtension};
use thiserror::Error;
use tracing::{debug, info};

use super::{fold_name, SqliteSpeciesStore};
use crate::pokemon::MAX_STAT;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
}

/// Counts reported after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub species: usize,
    pub alternate_forms: usize,
}

struct ImportRow {
    id: u32,
    name: String,
    evs: [u32; 6],
    form: Option<String>,
}

fn parse_row(record: &csv::StringRecord, line: u64) -> Result<ImportRow, ImportError> {
    let invalid = |reason: String| ImportError::InvalidRow { line, reason };

    if record.len() < 8 {
        return Err(invalid(format!("expected at least 8 columns, got {}", record.len())));
    }

    let id: u32 = record[0]
        .trim()
        .parse()
        .map_err(|_| invalid(format!("invalid id '{}'", &record[0])))?;

    let name = record[1].trim();
    if name.is_empty() {
        return Err(invalid("empty name".to_string()));
    }

    let mut evs = [0u32; 6];
    for (offset, value) in evs.iter_mut().enumerate() {
        let cell = record[2 + offset].trim();
        *value = cell
            .parse()
            .map_err(|_| invalid(format!("invalid EV yield '{}'", cell)))?;
        if *value > MAX_STAT {
            return Err(invalid(format!("EV yield {} exceeds {}", value, MAX_STAT)));
        }
    }

    let form = record
        .get(8)
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(str::to_string);

    Ok(ImportRow {
        id,
        name: name.to_string(),
        evs,
        form,
    })
}

/// Replace the store's contents with every row of `reader`, in a single
/// transaction.
pub fn import_csv<R: Read>(
    store: &mut SqliteSpeciesStore,
    reader: R,
) -> Result<ImportSummary, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let tx = store.connection_mut().transaction()?;
    tx.execute_batch("DELETE FROM stats; DELETE FROM pokemon;")?;
    let mut summary = ImportSummary::default();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);
        let row = parse_row(&record, line)?;

        let exists = tx
            .query_row("SELECT 1 FROM pokemon WHERE id = ?", params![row.id], |_| {
                Ok(())
            })
            .optional()?
            .is_some();

        if exists {
            debug!(id = row.id, name = %row.name, form = ?row.form, "Alternate form");
            summary.alternate_forms += 1;
        } else {
            tx.execute(
                "INSERT INTO pokemon (id, name, name_folded) VALUES (?, ?, ?)",
                params![row.id, &row.name, fold_name(&row.name)],
            )?;
            summary.species += 1;
        }

        let [hp, attack, defense, special_attack, special_defense, speed] = row.evs;
        tx.execute(
            "INSERT INTO stats (pokemon_id, ev_hp, ev_attack, ev_defense, ev_special_attack, ev_special_defense, ev_speed, form)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                row.id,
                hp,
                attack,
                defense,
                special_attack,
                special_defense,
                speed,
                &row.form,
            ],
        )?;
    }

    tx.commit()?;
    info!(
        species = summary.species,
        alternate_forms = summary.alternate_forms,
        "Imported species data"
    );

    Ok(summary)
}
