use colored::Colorize;
use tesex_core::{count_by_materia, count_by_tipo, rubro_corpus, Tesis};

/// Pie-chart feed shows at most this many subjects.
const TOP_MATERIAS: usize = 10;

fn celda(valor: Option<&str>, ancho: usize) -> String {
    let texto = valor.unwrap_or("");
    let recortado: String = if texto.chars().count() > ancho {
        let mut s: String = texto.chars().take(ancho.saturating_sub(1)).collect();
        s.push('…');
        s
    } else {
        texto.to_string()
    };
    format!("{:<ancho$}", recortado)
}

/// Print the filtered set as a table with the comparison-view column set.
pub fn print_table(filtered: &[Tesis]) {
    if filtered.is_empty() {
        println!("{}", "No hay tesis disponibles para mostrar.".yellow());
        return;
    }

    println!(
        "{}",
        format!("{} tesis encontradas.", filtered.len()).bold()
    );
    println!(
        "{}",
        format!(
            "{:<12} {:<10} {:<18} {:<20} {:<16} {}",
            "registro", "año", "materia", "instancia", "tipo", "rubro"
        )
        .bold()
    );

    for tesis in filtered {
        let anio = tesis.anio.map(|a| a.to_string());
        println!(
            "{} {} {} {} {} {}",
            celda(Some(&tesis.registro_digital), 12),
            celda(anio.as_deref(), 10),
            celda(tesis.materia.as_deref(), 18),
            celda(tesis.instancia.as_deref(), 20),
            celda(tesis.tipo.as_deref(), 16),
            celda(tesis.rubro.as_deref(), 60),
        );
    }
}

/// Print aggregate counts by type and by subject (chart collaborator feed).
pub fn print_counts(filtered: &[Tesis]) {
    println!();
    println!("{}", "Cantidad por tipo de tesis".bold());
    for (tipo, n) in count_by_tipo(filtered) {
        println!("  {:<30} {}", tipo, n);
    }

    println!();
    println!(
        "{}",
        format!("Top {} materias", TOP_MATERIAS).bold()
    );
    for (materia, n) in count_by_materia(filtered, TOP_MATERIAS) {
        println!("  {:<30} {}", materia, n);
    }
}

/// Print the concatenated headline text (word-cloud collaborator feed).
pub fn print_corpus(filtered: &[Tesis]) {
    println!();
    println!("{}", "Corpus de rubros".bold());
    println!("{}", rubro_corpus(filtered));
}

/// Print the side-by-side comparison detail for the selected records.
pub fn print_comparison(selected: &[&Tesis]) {
    println!();
    println!(
        "{}",
        format!("Comparativa de {} tesis seleccionadas", selected.len()).bold()
    );

    for tesis in selected {
        println!();
        println!(
            "{}",
            format!(
                "Tesis {} - {}",
                tesis.registro_digital,
                tesis.rubro.as_deref().unwrap_or("")
            )
            .cyan()
            .bold()
        );
        println!("  Instancia: {}", tesis.instancia.as_deref().unwrap_or(""));
        println!("  Tipo:      {}", tesis.tipo.as_deref().unwrap_or(""));
        println!("  Materia:   {}", tesis.materia.as_deref().unwrap_or(""));
        println!(
            "  Fecha:     {}",
            tesis.fecha_publicacion.as_deref().unwrap_or("")
        );
        if let Some(texto) = tesis.texto_completo.as_deref() {
            println!("  {}", celda(Some(texto), 200));
        }
    }
}

/// Shown instead of running an export when nothing is selected.
pub fn warn_empty_selection() {
    println!(
        "{}",
        "Selecciona al menos una tesis para exportar.".yellow()
    );
}
