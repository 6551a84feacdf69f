use std::fs::File;
use std::path::Path;
use tesex_core::{
    apply_criteria, build_sections, write_csv, write_document, Criteria, Dataset, ExportError,
    Selection, Tesis, TitlePage,
};

/// Session state: the cached dataset plus the current criteria and
/// selection. The dataset is loaded once and never mutated; criteria are
/// rebuilt per interaction and the selection whenever the user edits it.
#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    pub criteria: Criteria,
    pub selection: Selection,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            criteria: Criteria::default(),
            selection: Selection::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// One filter evaluation over the cached record set.
    pub fn filtered(&self) -> Vec<Tesis> {
        apply_criteria(self.dataset.records(), &self.criteria)
    }

    /// Selected records joined back to the filtered set by registro digital.
    pub fn selected<'a>(&self, filtered: &'a [Tesis]) -> Vec<&'a Tesis> {
        self.selection.resolve(filtered)
    }

    /// Export the current selection as a CSV spreadsheet.
    /// Returns the number of records written.
    pub fn export_csv(&self, filtered: &[Tesis], path: &Path) -> Result<usize, ExportError> {
        let selected = self.selected(filtered);
        let file = File::create(path)?;
        write_csv(&selected, file)?;
        Ok(selected.len())
    }

    /// Export the current selection as a plain-text document with a title
    /// page and one section per record.
    pub fn export_document(&self, filtered: &[Tesis], path: &Path) -> Result<usize, ExportError> {
        let selected = self.selected(filtered);
        let portada = TitlePage::today("Explorador de Tesis Jurídicas", "Tesex");
        let sections = build_sections(&selected);
        write_document(&portada, &sections, File::create(path)?)?;
        Ok(selected.len())
    }
}
