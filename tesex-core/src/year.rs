use crate::models::Tesis;
use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Date layouts commonly found in the publication-date column.
const NUMERIC_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Best-effort year extraction from free-form publication-date text.
/// Returns `None` when nothing resembling a date can be found; never panics.
pub fn extract_year(texto: &str) -> Option<i32> {
    let texto = texto.trim();
    if texto.is_empty() {
        return None;
    }

    for formato in NUMERIC_FORMATS {
        if let Ok(fecha) = NaiveDate::parse_from_str(texto, formato) {
            return Some(fecha.year());
        }
    }

    // Spanish long form, e.g. "10 de marzo de 2019"
    let largo = Regex::new(r"(?i)\b(\d{1,2})\s+de\s+([a-záéíóúü]+)\s+(?:de\s+|del\s+)?(\d{4})\b")
        .unwrap();
    if let Some(caps) = largo.captures(texto) {
        let mes = caps[2].to_lowercase();
        if SPANISH_MONTHS.contains(&mes.as_str()) {
            if let Ok(anio) = caps[3].parse() {
                return Some(anio);
            }
        }
    }

    // Last resort: a standalone four-digit year anywhere in the text.
    let suelto = Regex::new(r"\b(1[5-9]\d{2}|20\d{2})\b").unwrap();
    suelto
        .find(texto)
        .and_then(|coincidencia| coincidencia.as_str().parse().ok())
}

/// Populate the derived year on every record from its `fecha_publicacion`.
/// Run once at load time; re-running on an unchanged set is idempotent.
pub fn annotate_years(records: &mut [Tesis]) {
    for tesis in records.iter_mut() {
        tesis.anio = tesis.fecha_publicacion.as_deref().and_then(extract_year);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(extract_year("2019-03-10"), Some(2019));
    }

    #[test]
    fn test_slash_date() {
        assert_eq!(extract_year("01/07/2021"), Some(2021));
        assert_eq!(extract_year("2021/07/01"), Some(2021));
    }

    #[test]
    fn test_dash_date() {
        assert_eq!(extract_year("15-08-2003"), Some(2003));
    }

    #[test]
    fn test_spanish_long_form() {
        assert_eq!(extract_year("10 de marzo de 2019"), Some(2019));
        assert_eq!(extract_year("Viernes 1 de julio del 2021"), Some(2021));
    }

    #[test]
    fn test_bare_year_in_text() {
        assert_eq!(extract_year("Publicada en 2015"), Some(2015));
    }

    #[test]
    fn test_unparseable_returns_none() {
        assert_eq!(extract_year("fecha desconocida"), None);
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("   "), None);
    }

    #[test]
    fn test_out_of_range_number_ignored() {
        // Not a plausible calendar year
        assert_eq!(extract_year("expediente 30123"), None);
    }

    #[test]
    fn test_annotate_years_is_idempotent() {
        let mut records = vec![
            Tesis {
                registro_digital: "1".to_string(),
                materia: None,
                instancia: None,
                tipo: None,
                rubro: None,
                texto_completo: None,
                fecha_publicacion: Some("2019-03-10".to_string()),
                anio: None,
            },
            Tesis {
                registro_digital: "2".to_string(),
                materia: None,
                instancia: None,
                tipo: None,
                rubro: None,
                texto_completo: None,
                fecha_publicacion: Some("fecha desconocida".to_string()),
                anio: None,
            },
            Tesis {
                registro_digital: "3".to_string(),
                materia: None,
                instancia: None,
                tipo: None,
                rubro: None,
                texto_completo: None,
                fecha_publicacion: None,
                anio: None,
            },
        ];

        annotate_years(&mut records);
        assert_eq!(records[0].anio, Some(2019));
        assert_eq!(records[1].anio, None);
        assert_eq!(records[2].anio, None);

        annotate_years(&mut records);
        assert_eq!(records[0].anio, Some(2019));
        assert_eq!(records[1].anio, None);
    }
}
