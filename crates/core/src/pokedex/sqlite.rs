//! SQLite-backed species store.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::{fold_name, PokedexError, Species, SpeciesStore};
use crate::pokemon::EvSet;

const SELECT_SPECIES: &str = "SELECT p.id, p.name, s.ev_hp, s.ev_attack, s.ev_defense,
            s.ev_special_attack, s.ev_special_defense, s.ev_speed
     FROM pokemon AS p
     JOIN stats AS s ON p.id = s.pokemon_id";

/// SQLite-backed species store.
pub struct SqliteSpeciesStore {
    conn: Connection,
}

impl SqliteSpeciesStore {
    /// Open the database file, creating it and its tables if needed.
    pub fn new(path: &Path) -> Result<Self, PokedexError> {
        let conn = Connection::open(path)?;
        Self::initialize_schema(&conn)?;
        debug!(path = %path.display(), "Opened species store");
        Ok(Self { conn })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, PokedexError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), PokedexError> {
        conn.execute_batch(
            r#"
            -- One row per species; name_folded holds fold_name(name)
            CREATE TABLE IF NOT EXISTS pokemon (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                name_folded TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_pokemon_name_folded ON pokemon(name_folded);

            -- EV yields; alternate forms add extra rows tagged with the form
            CREATE TABLE IF NOT EXISTS stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                pokemon_id INTEGER NOT NULL REFERENCES pokemon(id),
                ev_hp INTEGER NOT NULL,
                ev_attack INTEGER NOT NULL,
                ev_defense INTEGER NOT NULL,
                ev_special_attack INTEGER NOT NULL,
                ev_special_defense INTEGER NOT NULL,
                ev_speed INTEGER NOT NULL,
                form TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_stats_pokemon ON stats(pokemon_id);
            "#,
        )?;

        Ok(())
    }

    pub(crate) fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Number of species in the store.
    pub fn count(&self) -> Result<u64, PokedexError> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))?;
        Ok(count)
    }

    fn row_to_species(row: &rusqlite::Row) -> rusqlite::Result<Species> {
        let mut values = [0u32; 6];
        for (offset, value) in values.iter_mut().enumerate() {
            *value = row.get(2 + offset)?;
        }
        Ok(Species {
            id: row.get(0)?,
            name: row.get(1)?,
            evs: EvSet::from_array(values),
        })
    }
}

impl SpeciesStore for SqliteSpeciesStore {
    fn find_by_id(&self, id: u32) -> Result<Option<Species>, PokedexError> {
        debug!(id, "Querying species by id");
        let species = self
            .conn
            .query_row(
                &format!("{} WHERE p.id = ?1 ORDER BY s.id LIMIT 1", SELECT_SPECIES),
                params![id],
                Self::row_to_species,
            )
            .optional()?;
        Ok(species)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Species>, PokedexError> {
        let key = fold_name(name);
        debug!(name = %key, "Querying species by name");
        let species = self
            .conn
            .query_row(
                &format!(
                    "{} WHERE p.name_folded = ?1 ORDER BY s.id LIMIT 1",
                    SELECT_SPECIES
                ),
                params![key],
                Self::row_to_species,
            )
            .optional()?;
        Ok(species)
    }

    fn names(&self) -> Result<Vec<String>, PokedexError> {
        let mut stmt = self.conn.prepare("SELECT name FROM pokemon ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }
}
