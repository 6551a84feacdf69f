// Public modules
pub mod aggregation;
pub mod error;
pub mod export;
pub mod filtering;
pub mod models;
pub mod selection;
pub mod sorting;
pub mod store;
pub mod year;

// Re-export commonly used types for convenience
pub use aggregation::{count_by_materia, count_by_tipo, rubro_corpus};
pub use error::{ExportError, StoreError};
pub use export::{
    build_sections, export_rows, render_document, write_csv, write_document, Section, TitlePage,
    EXPORT_COLUMNS,
};
pub use filtering::{apply_criteria, matches_criteria, matches_keyword, split_keyword};
pub use models::{BooleanMode, Criteria, SortKey, Tesis};
pub use selection::Selection;
pub use sorting::{normalize_sort_key, sort_tesis};
pub use store::Dataset;
pub use year::{annotate_years, extract_year};
