//! Content rendering
//!
//! Formats an [`Analysis`] into the Markdown-like body stored with the entry.
//! Section order and field order are fixed; optional fields are emitted only
//! when non-empty.

use std::fmt::Write;

use super::types::Analysis;

/// Render the entry body for an analysis
pub fn render_content(analysis: &Analysis) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_sections(&mut out, analysis);
    out
}

/// Append every section, in order
fn write_sections(out: &mut String, analysis: &Analysis) -> std::fmt::Result {
    write_chiste(out, analysis)?;
    write_premisa(out, analysis)?;
    write_ruptura(out, analysis)?;
    write_remate(out, analysis)
}

fn write_chiste(out: &mut String, analysis: &Analysis) -> std::fmt::Result {
    let joke = &analysis.joke;

    out.push_str("## CHISTE\n\n");
    writeln!(out, "\"{}\"\n", joke.text)?;
    if !joke.comic.is_empty() {
        writeln!(out, "**Cómico:** {}", joke.comic)?;
    }
    if !joke.show.is_empty() {
        writeln!(out, "**Especial:** {}", joke.show)?;
    }
    if !joke.year.is_empty() {
        writeln!(out, "**Año:** {}", joke.year)?;
    }
    out.push_str("\n---\n\n");
    Ok(())
}

fn write_premisa(out: &mut String, analysis: &Analysis) -> std::fmt::Result {
    let premisa = &analysis.premisa;

    out.push_str("## PREMISA\n\n");
    if !premisa.concepto.is_empty() {
        writeln!(out, "**Concepto:** {}\n", premisa.concepto)?;
    }
    if !premisa.diseccion.is_empty() {
        out.push_str("**Disección:**\n");
        for item in &premisa.diseccion {
            writeln!(out, "- {}: {}", item.key, item.value)?;
        }
        out.push('\n');
    }
    if !premisa.elemento_mecanico.is_empty() {
        writeln!(out, "**Elemento mecánico:** \"{}\"\n", premisa.elemento_mecanico)?;
    }
    if !premisa.estructura.is_empty() {
        writeln!(
            out,
            "**Estructura de premisa:** {}\n",
            humanize_technique(&premisa.estructura)
        )?;
    }
    out.push_str("---\n\n");
    Ok(())
}

fn write_ruptura(out: &mut String, analysis: &Analysis) -> std::fmt::Result {
    let ruptura = &analysis.ruptura;

    out.push_str("## RUPTURA\n\n");
    if !ruptura.tecnica.is_empty() {
        writeln!(out, "**Técnica:** {}\n", humanize_technique(&ruptura.tecnica))?;
    }
    if !ruptura.caracteristica.is_empty() {
        writeln!(out, "**Característica alterada:** {}\n", ruptura.caracteristica)?;
    }
    out.push_str("---\n\n");
    Ok(())
}

fn write_remate(out: &mut String, analysis: &Analysis) -> std::fmt::Result {
    let remate = &analysis.remate;

    out.push_str("## REMATE\n\n");
    if !remate.tecnica.is_empty() {
        writeln!(
            out,
            "**Técnica de justificación:** {}\n",
            humanize_technique(&remate.tecnica)
        )?;
    }
    if !remate.situaciones.is_empty() {
        out.push_str("**Situaciones:**\n");
        for (i, situacion) in remate.situaciones.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, situacion)?;
        }
    }
    Ok(())
}

/// Turn a technique slug into a display name.
///
/// `"es-como"` becomes `"Es Como"`. Only the first character of each
/// token is uppercased; the rest is left as written.
pub fn humanize_technique(slug: &str) -> String {
    if slug.is_empty() {
        return String::new();
    }

    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DissectionItem, Joke, Premisa, Remate, Ruptura};

    fn sample() -> Analysis {
        Analysis {
            joke: Joke {
                text: "Mi cámara de seguridad está en el techo".to_string(),
                comic: "Dani Rovira".to_string(),
                show: String::new(),
                year: "2019".to_string(),
            },
            premisa: Premisa {
                concepto: "cámara".to_string(),
                diseccion: vec![DissectionItem::new("tipo", "seguridad")],
                elemento_mecanico: "está en el techo".to_string(),
                estructura: "concepto-simple".to_string(),
                tags: vec!["hogar".to_string()],
            },
            ruptura: Ruptura {
                tecnica: "personificacion".to_string(),
                caracteristica: "vigila".to_string(),
                tags: Vec::new(),
            },
            remate: Remate {
                tecnica: "es-como".to_string(),
                situaciones: vec!["te juzga".to_string(), "cotillea".to_string()],
                tags: Vec::new(),
            },
        }
    }

    #[test]
    fn test_render_full_analysis() {
        let expected = "## CHISTE\n\n\
            \"Mi cámara de seguridad está en el techo\"\n\n\
            **Cómico:** Dani Rovira\n\
            **Año:** 2019\n\
            \n---\n\n\
            ## PREMISA\n\n\
            **Concepto:** cámara\n\n\
            **Disección:**\n\
            - tipo: seguridad\n\
            \n\
            **Elemento mecánico:** \"está en el techo\"\n\n\
            **Estructura de premisa:** Concepto Simple\n\n\
            ---\n\n\
            ## RUPTURA\n\n\
            **Técnica:** Personificacion\n\n\
            **Característica alterada:** vigila\n\n\
            ---\n\n\
            ## REMATE\n\n\
            **Técnica de justificación:** Es Como\n\n\
            **Situaciones:**\n\
            1. te juzga\n\
            2. cotillea\n";

        assert_eq!(render_content(&sample()), expected);
    }

    #[test]
    fn test_render_empty_analysis_keeps_skeleton() {
        let expected = "## CHISTE\n\n\"\"\n\n\n---\n\n## PREMISA\n\n---\n\n## RUPTURA\n\n---\n\n## REMATE\n\n";
        assert_eq!(render_content(&Analysis::default()), expected);
    }

    #[test]
    fn test_sections_append_to_existing_buffer() {
        let mut out = "# Borrador\n\n".to_string();
        write_sections(&mut out, &sample()).unwrap();
        assert_eq!(out, format!("# Borrador\n\n{}", render_content(&sample())));
    }

    #[test]
    fn test_render_is_deterministic() {
        let analysis = sample();
        assert_eq!(render_content(&analysis), render_content(&analysis.clone()));
    }

    #[test]
    fn test_humanize_technique() {
        assert_eq!(humanize_technique("es-como"), "Es Como");
        assert_eq!(humanize_technique("esto-es-peor-que"), "Esto Es Peor Que");
        assert_eq!(humanize_technique("exageracion"), "Exageracion");
        assert_eq!(humanize_technique("ya-Mayus"), "Ya Mayus");
        assert_eq!(humanize_technique("a--b"), "A  B");
        assert_eq!(humanize_technique(""), "");
    }
}
