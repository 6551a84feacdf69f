use crate::error::StoreError;
use crate::models::Tesis;
use crate::year::annotate_years;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// The session dataset: loaded once from the read-only store, year field
/// derived once, then shared immutably for the rest of the session. Passed
/// explicitly to the filter engine; no global state.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Tesis>,
}

impl Dataset {
    /// Load every row of the `tesis` table from a SQLite database.
    /// The connection is opened read-only; nothing is ever written back.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Self::from_connection(&conn)
    }

    /// Load from an already-open connection (in-memory databases, tests).
    pub fn from_connection(conn: &Connection) -> Result<Self, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT registro_digital, materia, instancia, tipo, rubro, \
             texto_completo, fecha_publicacion FROM tesis",
        )?;

        let filas = stmt.query_map([], |row| {
            Ok(Tesis {
                registro_digital: registro_as_string(row.get_ref(0)?),
                materia: row.get(1)?,
                instancia: row.get(2)?,
                tipo: row.get(3)?,
                rubro: row.get(4)?,
                texto_completo: row.get(5)?,
                fecha_publicacion: row.get(6)?,
                anio: None,
            })
        })?;

        let records = filas.collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_records(records))
    }

    /// Wrap an in-memory record set, deriving the year field the same way
    /// `load` does.
    pub fn from_records(mut records: Vec<Tesis>) -> Self {
        annotate_years(&mut records);
        let sin_anio = records.iter().filter(|t| t.anio.is_none()).count();
        debug!(total = records.len(), sin_anio, "dataset loaded");
        Self { records }
    }

    /// Read-only view of the full record set, in load order.
    pub fn records(&self) -> &[Tesis] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Minimum and maximum derived year, for the range-slider defaults.
    /// `None` when no record has a parseable date.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().filter_map(|t| t.anio).min()?;
        let max = self.records.iter().filter_map(|t| t.anio).max()?;
        Some((min, max))
    }

    /// Sorted distinct subjects (filter widget feed).
    pub fn materias(&self) -> Vec<String> {
        self.distinct(|t| t.materia.as_deref())
    }

    /// Sorted distinct court instances (filter widget feed).
    pub fn instancias(&self) -> Vec<String> {
        self.distinct(|t| t.instancia.as_deref())
    }

    /// Sorted distinct opinion types (filter widget feed).
    pub fn tipos(&self) -> Vec<String> {
        self.distinct(|t| t.tipo.as_deref())
    }

    fn distinct<'a, F>(&'a self, field: F) -> Vec<String>
    where
        F: Fn(&'a Tesis) -> Option<&'a str>,
    {
        self.records
            .iter()
            .filter_map(field)
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// `registro_digital` is stored as INTEGER in some databases and TEXT in
/// others; both load as the canonical string form.
fn registro_as_string(valor: ValueRef<'_>) -> String {
    match valor {
        ValueRef::Integer(n) => n.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_connection() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory sqlite");
        conn.execute_batch(
            r#"
            CREATE TABLE tesis (
                registro_digital INTEGER,
                materia TEXT,
                instancia TEXT,
                tipo TEXT,
                rubro TEXT,
                texto_completo TEXT,
                fecha_publicacion TEXT
            );

            INSERT INTO tesis VALUES
                (2029123, 'Civil', 'Primera Sala', 'Jurisprudencia',
                 'Contrato de arrendamiento', 'El contrato...', '2019-03-10'),
                (2029124, 'Penal', 'Segunda Sala', 'Tesis Aislada',
                 'Delito de fraude', 'El delito...', '2021-07-01'),
                (2029125, NULL, NULL, NULL, NULL, NULL, 'fecha desconocida');
            "#,
        )
        .expect("seed tesis table");
        conn
    }

    #[test]
    fn test_from_connection_loads_and_annotates() {
        let conn = seed_connection();
        let dataset = Dataset::from_connection(&conn).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].registro_digital, "2029123");
        assert_eq!(dataset.records()[0].anio, Some(2019));
        assert_eq!(dataset.records()[1].anio, Some(2021));
        assert_eq!(dataset.records()[2].anio, None);
        assert_eq!(dataset.records()[2].materia, None);
    }

    #[test]
    fn test_year_bounds_and_distinct_values() {
        let conn = seed_connection();
        let dataset = Dataset::from_connection(&conn).unwrap();

        assert_eq!(dataset.year_bounds(), Some((2019, 2021)));
        assert_eq!(dataset.materias(), vec!["Civil", "Penal"]);
        assert_eq!(dataset.instancias(), vec!["Primera Sala", "Segunda Sala"]);
        assert_eq!(dataset.tipos(), vec!["Jurisprudencia", "Tesis Aislada"]);
    }

    #[test]
    fn test_load_from_file_backed_database() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("tesis.db");

        {
            let conn = Connection::open(&ruta).unwrap();
            conn.execute_batch(
                "CREATE TABLE tesis (
                    registro_digital TEXT, materia TEXT, instancia TEXT,
                    tipo TEXT, rubro TEXT, texto_completo TEXT,
                    fecha_publicacion TEXT
                );
                INSERT INTO tesis VALUES
                    ('A-1', 'Civil', 'Pleno', 'Jurisprudencia',
                     'Rubro', 'Texto', '2020-01-15');",
            )
            .unwrap();
        }

        let dataset = Dataset::load(&ruta).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].registro_digital, "A-1");
        assert_eq!(dataset.records()[0].anio, Some(2020));
    }

    #[test]
    fn test_load_missing_database_fails() {
        let dir = tempfile::tempdir().unwrap();
        let resultado = Dataset::load(dir.path().join("no-existe.db"));
        assert!(resultado.is_err());
    }

    #[test]
    fn test_empty_table_yields_empty_dataset() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE tesis (
                registro_digital TEXT, materia TEXT, instancia TEXT,
                tipo TEXT, rubro TEXT, texto_completo TEXT,
                fecha_publicacion TEXT
            );",
        )
        .unwrap();

        let dataset = Dataset::from_connection(&conn).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_bounds(), None);
        assert!(dataset.materias().is_empty());
    }
}
