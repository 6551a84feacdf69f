use serde::{Deserialize, Serialize};

/// One legal-opinion record ("tesis"), immutable once loaded for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tesis {
    /// Unique identifier; the sole key used to re-associate a row with its
    /// full text and metadata across filtering, selection, and export.
    pub registro_digital: String,
    pub materia: Option<String>,
    pub instancia: Option<String>,
    pub tipo: Option<String>,
    pub rubro: Option<String>,
    pub texto_completo: Option<String>,
    /// Free-form publication date text; format not guaranteed consistent.
    pub fecha_publicacion: Option<String>,
    /// Derived once at load time from `fecha_publicacion`; absent when the
    /// date text could not be parsed.
    #[serde(rename = "año")]
    pub anio: Option<i32>,
}

/// Boolean combinator for multi-segment keyword queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanMode {
    #[default]
    And,
    Or,
}

impl BooleanMode {
    /// The literal token the keyword string is split on.
    pub fn token(&self) -> &'static str {
        match self {
            BooleanMode::And => "AND",
            BooleanMode::Or => "OR",
        }
    }
}

/// Sort order applied to the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// By derived year, newest first (default).
    #[default]
    YearDesc,
    /// By derived year, oldest first.
    YearAsc,
    /// Alphabetically by subject.
    Materia,
    /// Alphabetically by opinion type.
    Tipo,
}

/// Filter criteria for one evaluation; rebuilt on every interaction.
#[derive(Debug, Clone)]
pub struct Criteria {
    /// Raw keyword query; may contain AND/OR tokens per `mode`.
    pub keyword: String,
    pub mode: BooleanMode,
    /// Selected subjects; empty means no restriction.
    pub materias: Vec<String>,
    /// Selected court instances; empty means no restriction.
    pub instancias: Vec<String>,
    /// Selected opinion types; empty means no restriction.
    pub tipos: Vec<String>,
    /// Inclusive year range. `None` means unrestricted; any bounded range
    /// excludes records whose derived year is absent.
    pub year_range: Option<(i32, i32)>,
    pub sort_key: SortKey,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            mode: BooleanMode::And,
            materias: Vec::new(),
            instancias: Vec::new(),
            tipos: Vec::new(),
            year_range: None,
            sort_key: SortKey::YearDesc,
        }
    }
}

impl Criteria {
    /// Check whether any restriction beyond the defaults is active.
    pub fn has_filters(&self) -> bool {
        !self.keyword.trim().is_empty()
            || !self.materias.is_empty()
            || !self.instancias.is_empty()
            || !self.tipos.is_empty()
            || self.year_range.is_some()
    }
}
