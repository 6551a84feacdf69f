use crate::models::{BooleanMode, Criteria, Tesis};
use crate::sorting::sort_tesis;

/// Split a raw keyword query into uppercased search segments.
/// The query is split on the mode's literal token and each segment is
/// trimmed. Empty segments (e.g. a trailing `AND`) are dropped so they
/// cannot vacuously match every record.
pub fn split_keyword(query: &str, mode: BooleanMode) -> Vec<String> {
    query
        .to_uppercase()
        .split(mode.token())
        .map(str::trim)
        .filter(|segmento| !segmento.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive substring test; absent fields never match.
fn contains_segment(campo: Option<&str>, segmento: &str) -> bool {
    campo
        .map(|texto| texto.to_uppercase().contains(segmento))
        .unwrap_or(false)
}

/// Check the keyword segments against `texto_completo` and `rubro`.
/// AND requires every segment to hit, OR requires any; an empty segment
/// list is a no-op (every record passes).
pub fn matches_keyword(tesis: &Tesis, segments: &[String], mode: BooleanMode) -> bool {
    if segments.is_empty() {
        return true;
    }

    let acierto = |segmento: &String| {
        contains_segment(tesis.texto_completo.as_deref(), segmento)
            || contains_segment(tesis.rubro.as_deref(), segmento)
    };

    match mode {
        BooleanMode::And => segments.iter().all(acierto),
        BooleanMode::Or => segments.iter().any(acierto),
    }
}

/// Membership test for a categorical field. An empty criterion set means
/// no restriction; an absent field value never matches a non-empty set.
fn in_category(valor: Option<&str>, seleccion: &[String]) -> bool {
    if seleccion.is_empty() {
        return true;
    }
    valor
        .map(|v| seleccion.iter().any(|s| s == v))
        .unwrap_or(false)
}

/// Check a single record against all criteria. All filter categories are
/// conjunctive; `segments` must come from `split_keyword` on the same
/// criteria.
pub fn matches_criteria(tesis: &Tesis, criteria: &Criteria, segments: &[String]) -> bool {
    if !matches_keyword(tesis, segments, criteria.mode) {
        return false;
    }
    if !in_category(tesis.materia.as_deref(), &criteria.materias) {
        return false;
    }
    if !in_category(tesis.instancia.as_deref(), &criteria.instancias) {
        return false;
    }
    if !in_category(tesis.tipo.as_deref(), &criteria.tipos) {
        return false;
    }

    // A bounded range never admits a record without a derived year
    match criteria.year_range {
        None => true,
        Some((desde, hasta)) => tesis
            .anio
            .map(|anio| anio >= desde && anio <= hasta)
            .unwrap_or(false),
    }
}

/// Apply the full criteria to a record set: filter, then stable sort.
/// The input is never mutated; the output preserves all attributes and
/// contains no duplicates.
pub fn apply_criteria(records: &[Tesis], criteria: &Criteria) -> Vec<Tesis> {
    let segments = split_keyword(&criteria.keyword, criteria.mode);

    let mut filtrado: Vec<Tesis> = records
        .iter()
        .filter(|tesis| matches_criteria(tesis, criteria, &segments))
        .cloned()
        .collect();

    sort_tesis(&mut filtrado, criteria.sort_key);
    filtrado
}
