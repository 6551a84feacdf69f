use crate::models::Tesis;
use std::collections::HashSet;

/// Interactive selection over the filtered set, keyed by `registro_digital`.
/// Ephemeral: rebuilt whenever the user edits the checkboxes, never
/// persisted, and consumed directly by comparison display and export.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    keys: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, registro: &str) {
        self.keys.insert(registro.to_string());
    }

    pub fn deselect(&mut self, registro: &str) {
        self.keys.remove(registro);
    }

    /// Flip membership; returns the new state.
    pub fn toggle(&mut self, registro: &str) -> bool {
        if self.keys.remove(registro) {
            false
        } else {
            self.keys.insert(registro.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_selected(&self, registro: &str) -> bool {
        self.keys.contains(registro)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Join the selection back to the filtered set by key, preserving the
    /// filtered order. Keys not present in the filtered set (stale after a
    /// filter change) are ignored, never an error.
    pub fn resolve<'a>(&self, filtered: &'a [Tesis]) -> Vec<&'a Tesis> {
        filtered
            .iter()
            .filter(|t| self.keys.contains(&t.registro_digital))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tesis(registro: &str) -> Tesis {
        Tesis {
            registro_digital: registro.to_string(),
            materia: None,
            instancia: None,
            tipo: None,
            rubro: None,
            texto_completo: None,
            fecha_publicacion: None,
            anio: None,
        }
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut seleccion = Selection::new();
        assert!(seleccion.toggle("100"));
        assert!(seleccion.is_selected("100"));
        assert!(!seleccion.toggle("100"));
        assert!(!seleccion.is_selected("100"));
    }

    #[test]
    fn test_resolve_preserves_filtered_order() {
        let filtered = vec![tesis("c"), tesis("a"), tesis("b")];
        let mut seleccion = Selection::new();
        seleccion.select("b");
        seleccion.select("c");

        let resueltos: Vec<&str> = seleccion
            .resolve(&filtered)
            .iter()
            .map(|t| t.registro_digital.as_str())
            .collect();
        assert_eq!(resueltos, vec!["c", "b"]);
    }

    #[test]
    fn test_stale_keys_are_ignored() {
        let filtered = vec![tesis("a")];
        let mut seleccion = Selection::new();
        seleccion.select("a");
        seleccion.select("desaparecida");

        assert_eq!(seleccion.len(), 2);
        assert_eq!(seleccion.resolve(&filtered).len(), 1);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut seleccion = Selection::new();
        seleccion.select("a");
        seleccion.clear();
        assert!(seleccion.is_empty());
    }
}
