use crate::models::{SortKey, Tesis};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Stable sort of the filtered set by the selected key. Absent keys sort
/// last regardless of direction; ties keep their original load order.
pub fn sort_tesis(items: &mut [Tesis], key: SortKey) {
    match key {
        SortKey::YearDesc => items.sort_by(|a, b| cmp_year(a.anio, b.anio, true)),
        SortKey::YearAsc => items.sort_by(|a, b| cmp_year(a.anio, b.anio, false)),
        SortKey::Materia => items.sort_by(|a, b| cmp_label(a.materia.as_deref(), b.materia.as_deref())),
        SortKey::Tipo => items.sort_by(|a, b| cmp_label(a.tipo.as_deref(), b.tipo.as_deref())),
    }
}

fn cmp_year(a: Option<i32>, b: Option<i32>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                y.cmp(&x)
            } else {
                x.cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_label(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => normalize_sort_key(x).cmp(&normalize_sort_key(y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Normalize a label for alphabetical ordering: unicode NFD decomposition,
/// lowercase, collapsed whitespace. Keeps accented subjects ("Género") from
/// sorting after every unaccented one.
pub fn normalize_sort_key(s: &str) -> String {
    let normalized: String = s.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}
