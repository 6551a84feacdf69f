use crate::error::ExportError;
use crate::models::Tesis;
use chrono::Local;
use std::io::Write;

/// Column set shared by the comparison view and the spreadsheet export.
/// The interactive selection marker never leaves the UI layer.
pub const EXPORT_COLUMNS: [&str; 6] = [
    "registro_digital",
    "instancia",
    "materia",
    "tipo",
    "rubro",
    "fecha_publicacion",
];

fn cell(valor: Option<&str>) -> String {
    valor.unwrap_or_default().to_string()
}

/// One row per selected record in `EXPORT_COLUMNS` order; absent fields
/// render as empty cells.
pub fn export_rows(selected: &[&Tesis]) -> Vec<Vec<String>> {
    selected
        .iter()
        .map(|t| {
            vec![
                t.registro_digital.clone(),
                cell(t.instancia.as_deref()),
                cell(t.materia.as_deref()),
                cell(t.tipo.as_deref()),
                cell(t.rubro.as_deref()),
                cell(t.fecha_publicacion.as_deref()),
            ]
        })
        .collect()
}

/// Write the selected records as CSV: header plus one row per record.
/// This is the tabular handoff consumed by spreadsheet renderers.
pub fn write_csv<W: Write>(selected: &[&Tesis], writer: W) -> Result<(), ExportError> {
    let mut escritor = csv::Writer::from_writer(writer);
    escritor.write_record(EXPORT_COLUMNS)?;
    for fila in export_rows(selected) {
        escritor.write_record(&fila)?;
    }
    escritor.flush()?;
    Ok(())
}

/// Title-page descriptor for the document export.
#[derive(Debug, Clone)]
pub struct TitlePage {
    pub title: String,
    pub date: String,
    pub producer: String,
}

impl TitlePage {
    /// Title page stamped with today's date as DD/MM/YYYY.
    pub fn today(title: &str, producer: &str) -> Self {
        Self {
            title: title.to_string(),
            date: Local::now().format("%d/%m/%Y").to_string(),
            producer: producer.to_string(),
        }
    }
}

/// One formatted document section per selected record.
#[derive(Debug, Clone)]
pub struct Section {
    pub registro_digital: String,
    pub rubro: String,
    /// Type/subject/instance/date summary line.
    pub summary: String,
    /// Full opinion text, joined back to the record by `registro_digital`.
    pub body: String,
}

/// Build one section per selected record.
pub fn build_sections(selected: &[&Tesis]) -> Vec<Section> {
    selected
        .iter()
        .map(|t| Section {
            registro_digital: t.registro_digital.clone(),
            rubro: cell(t.rubro.as_deref()),
            summary: format!(
                "Tipo: {} - Materia: {} - Instancia: {} - Fecha: {}",
                cell(t.tipo.as_deref()),
                cell(t.materia.as_deref()),
                cell(t.instancia.as_deref()),
                cell(t.fecha_publicacion.as_deref()),
            ),
            body: cell(t.texto_completo.as_deref()),
        })
        .collect()
}

/// Render the document text: title page, then one section per record.
/// A PDF renderer is an external collaborator consuming this contract.
pub fn render_document(portada: &TitlePage, sections: &[Section]) -> String {
    let mut doc = String::new();
    doc.push_str(&portada.title);
    doc.push('\n');
    doc.push_str(&format!("Fecha: {}\n", portada.date));
    doc.push_str(&format!("Elaborado por: {}\n\n", portada.producer));

    for section in sections {
        doc.push_str(&format!("Tesis {}\n", section.registro_digital));
        doc.push_str(&format!("Rubro: {}\n", section.rubro));
        doc.push_str(&section.summary);
        doc.push_str("\n\nTexto completo:\n");
        doc.push_str(&section.body);
        doc.push_str("\n\n");
    }

    doc
}

/// Render and write the document in one shot.
pub fn write_document<W: Write>(
    portada: &TitlePage,
    sections: &[Section],
    mut writer: W,
) -> Result<(), ExportError> {
    writer.write_all(render_document(portada, sections).as_bytes())?;
    Ok(())
}
