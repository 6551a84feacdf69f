use crate::models::Tesis;
use std::collections::HashMap;

/// Count occurrences of a categorical field over the filtered set.
/// Absent values are skipped; ordering is count descending, name ascending
/// on ties, so chart output is deterministic.
fn count_values<'a, F>(items: &'a [Tesis], field: F) -> Vec<(String, usize)>
where
    F: Fn(&'a Tesis) -> Option<&'a str>,
{
    let mut conteo: HashMap<&str, usize> = HashMap::new();
    for item in items {
        if let Some(valor) = field(item) {
            *conteo.entry(valor).or_insert(0) += 1;
        }
    }

    let mut pares: Vec<(String, usize)> = conteo
        .into_iter()
        .map(|(valor, n)| (valor.to_string(), n))
        .collect();
    pares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pares
}

/// Record counts per opinion type (bar-chart feed).
pub fn count_by_tipo(items: &[Tesis]) -> Vec<(String, usize)> {
    count_values(items, |t| t.tipo.as_deref())
}

/// Record counts per subject, truncated to the `top` most frequent
/// (pie-chart feed; the dashboard shows the top 10).
pub fn count_by_materia(items: &[Tesis], top: usize) -> Vec<(String, usize)> {
    let mut conteo = count_values(items, |t| t.materia.as_deref());
    conteo.truncate(top);
    conteo
}

/// Space-joined headline text of the filtered set (word-cloud feed).
pub fn rubro_corpus(items: &[Tesis]) -> String {
    items
        .iter()
        .filter_map(|t| t.rubro.as_deref())
        .filter(|rubro| !rubro.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
