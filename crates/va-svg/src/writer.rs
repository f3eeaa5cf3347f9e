//! Sérialisation SVG des primitives.
//!
//! La sérialisation est exhaustive sur [`Element`] : chaque variant a son
//! émetteur, il n'existe aucun chemin « non implémenté ».

use std::fmt::{self, Write as _};

use va_core::config::RenderOptions;
use va_core::element::{Element, Marker, Stroke};

/// Feuille de style embarquée : trait noir d'épaisseur 1 pour les lignes
/// et les chemins, pointillés via la classe `dashed`.
const STYLESHEET: &str = "line, path { stroke: black; stroke-width: 1; fill: none; }\n    .dashed { stroke-dasharray: 5 3; }";

/// Définition de la pointe de flèche, émise seulement si un élément la référence.
const ARROW_MARKER: &str = r##"<marker id="arrow" viewBox="0 0 6 6" refX="6" refY="3" markerWidth="6" markerHeight="6" orient="auto"><path d="M 0 0 L 6 3 L 0 6 Z" fill="black" stroke="none"/></marker>"##;

/// Sérialise le document complet : en-tête, feuille de style, éléments.
///
/// # Example
/// ```
/// use va_core::config::RenderOptions;
/// use va_svg::writer::write_document;
///
/// let svg = write_document(&[], 16.0, 16.0, &RenderOptions::default());
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.ends_with("</svg>\n"));
/// ```
#[must_use]
pub fn write_document(
    elements: &[Element],
    width: f32,
    height: f32,
    options: &RenderOptions,
) -> String {
    let mut svg = String::new();
    // fmt::Write sur String n'échoue pas ; la branche reste couverte pour
    // ne jamais émettre de document partiel.
    if write_into(&mut svg, elements, width, height, options).is_err() {
        log::error!("échec d'écriture du document SVG");
        return String::new();
    }
    svg
}

fn write_into(
    out: &mut String,
    elements: &[Element],
    width: f32,
    height: f32,
    options: &RenderOptions,
) -> fmt::Result {
    let compact = options.compact_path;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="font-size:{}px;font-family:monospace">"#,
        num(width, compact),
        num(height, compact),
        num(options.font_size, compact),
    )?;
    writeln!(out, "  <style>\n    {STYLESHEET}\n  </style>")?;

    let needs_arrow = elements.iter().any(|element| {
        matches!(
            element,
            Element::Line {
                marker: Marker::Arrow,
                ..
            }
        )
    });
    if needs_arrow {
        writeln!(out, "  <defs>{ARROW_MARKER}</defs>")?;
    }

    for element in elements {
        write_element(out, element, options)?;
    }
    writeln!(out, "</svg>")
}

/// Émet un élément. Match exhaustif, sans bras fourre-tout : un nouveau
/// variant de [`Element`] ne compile pas tant qu'il n'a pas d'émetteur.
fn write_element(out: &mut String, element: &Element, options: &RenderOptions) -> fmt::Result {
    let compact = options.compact_path;
    match element {
        Element::Line {
            start,
            end,
            stroke,
            marker,
        } => {
            write!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}""#,
                num(start.x, compact),
                num(start.y, compact),
                num(end.x, compact),
                num(end.y, compact),
            )?;
            if *stroke == Stroke::Dashed {
                write!(out, r#" class="dashed""#)?;
            }
            if *marker == Marker::Arrow {
                write!(out, r#" marker-end="url(#arrow)""#)?;
            }
            writeln!(out, "/>")
        }
        Element::Arc {
            start,
            end,
            radius,
            large_arc,
        } => {
            writeln!(
                out,
                r#"  <path d="M {} {} A {} {} 0 {} 0 {} {}"/>"#,
                num(start.x, compact),
                num(start.y, compact),
                num(*radius, compact),
                num(*radius, compact),
                u8::from(*large_arc),
                num(end.x, compact),
                num(end.y, compact),
            )
        }
        Element::Text { at, content } => {
            let x = at.x as f32 * options.cell_width;
            let y = (at.y + 1) as f32 * options.cell_height
                - (options.cell_height - options.font_size) / 2.0;
            writeln!(
                out,
                r#"  <text x="{}" y="{}">{}</text>"#,
                num(x, compact),
                num(y, compact),
                escape_xml(content),
            )
        }
        Element::Path {
            start,
            end: _,
            command,
            stroke,
        } => {
            write!(
                out,
                r#"  <path d="M {} {} {}""#,
                num(start.x, compact),
                num(start.y, compact),
                command,
            )?;
            if *stroke == Stroke::Dashed {
                write!(out, r#" class="dashed""#)?;
            }
            writeln!(out, "/>")
        }
    }
}

/// Formate une coordonnée : deux décimales fixes, ou forme compacte sans
/// zéros traînants. Formatage seulement : la géométrie n'est pas arrondie
/// différemment selon le mode.
fn num(value: f32, compact: bool) -> String {
    let fixed = format!("{value:.2}");
    if !compact {
        return fixed;
    }
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn escape_xml(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use va_core::grid::{Loc, Point};

    fn options() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn compact_numbers_drop_trailing_zeros() {
        assert_eq!(num(8.0, true), "8");
        assert_eq!(num(8.5, true), "8.5");
        assert_eq!(num(8.25, true), "8.25");
        assert_eq!(num(0.0, true), "0");
    }

    #[test]
    fn fixed_numbers_keep_two_decimals() {
        assert_eq!(num(8.0, false), "8.00");
        assert_eq!(num(8.5, false), "8.50");
    }

    #[test]
    fn header_carries_dimensions_and_font_style() {
        let svg = write_document(&[], 24.0, 32.0, &options());
        assert!(svg.contains(r#"width="24" height="32""#));
        assert!(svg.contains("font-size:14px;font-family:monospace"));
        assert!(svg.contains("stroke: black; stroke-width: 1;"));
    }

    #[test]
    fn dashed_line_gets_the_stylesheet_class() {
        let line = Element::Line {
            start: Point::new(0.0, 8.0),
            end: Point::new(8.0, 8.0),
            stroke: Stroke::Dashed,
            marker: Marker::None,
        };
        let svg = write_document(&[line], 8.0, 16.0, &options());
        assert!(svg.contains(r#"<line x1="0" y1="8" x2="8" y2="8" class="dashed"/>"#));
    }

    #[test]
    fn arrow_marker_def_appears_only_when_referenced() {
        let plain = Element::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(8.0, 0.0),
            stroke: Stroke::Solid,
            marker: Marker::None,
        };
        let arrowed = Element::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(8.0, 0.0),
            stroke: Stroke::Solid,
            marker: Marker::Arrow,
        };
        let without = write_document(&[plain], 8.0, 16.0, &options());
        let with = write_document(&[arrowed], 8.0, 16.0, &options());
        assert!(!without.contains("<defs>"));
        assert!(with.contains(r##"marker-end="url(#arrow)""##));
        assert!(with.contains(r#"<marker id="arrow""#));
    }

    #[test]
    fn arc_serializes_as_an_elliptical_path() {
        let arc = Element::Arc {
            start: Point::new(0.0, 0.0),
            end: Point::new(8.0, 8.0),
            radius: 8.0,
            large_arc: true,
        };
        let svg = write_document(&[arc], 8.0, 16.0, &options());
        assert!(svg.contains(r#"<path d="M 0 0 A 8 8 0 1 0 8 8"/>"#));
    }

    #[test]
    fn text_is_positioned_and_escaped() {
        let text = Element::Text {
            at: Loc::new(1, 0),
            content: "a<&>b".to_string(),
        };
        let svg = write_document(&[text], 16.0, 16.0, &options());
        // x = 1×8, y = 16 − (16 − 14)/2 = 15
        assert!(svg.contains(r#"<text x="8" y="15">a&lt;&amp;&gt;b</text>"#));
    }

    #[test]
    fn path_appends_its_command_after_the_move() {
        let path = Element::Path {
            start: Point::new(0.0, 16.0),
            end: Point::new(8.0, 16.0),
            command: "Q 4 8 8 16".to_string(),
            stroke: Stroke::Solid,
        };
        let svg = write_document(&[path], 8.0, 16.0, &options());
        assert!(svg.contains(r#"<path d="M 0 16 Q 4 8 8 16"/>"#));
    }

    #[test]
    fn compact_flag_changes_formatting_only() {
        let line = Element::Line {
            start: Point::new(4.0, 0.0),
            end: Point::new(4.0, 16.0),
            stroke: Stroke::Solid,
            marker: Marker::None,
        };
        let fixed = write_document(
            &[line.clone()],
            8.0,
            16.0,
            &RenderOptions {
                compact_path: false,
                ..RenderOptions::default()
            },
        );
        let compact = write_document(&[line], 8.0, 16.0, &options());
        assert!(fixed.contains(r#"<line x1="4.00" y1="0.00" x2="4.00" y2="16.00"/>"#));
        assert!(compact.contains(r#"<line x1="4" y1="0" x2="4" y2="16"/>"#));
    }
}
