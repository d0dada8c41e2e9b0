//! Chart rendering: pure functions from summary data to an SVG string,
//! surfaced to the pages as base64 `data:` URIs. Nothing in the quality
//! logic depends on this encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::f64::consts::PI;
use std::fmt::Write;

const ACCURACY_PALETTE: [&str; 2] = ["#28a745", "#dc3545"];
const MISSING_PALETTE: [&str; 5] = ["#dc3545", "#fd7e14", "#ffc107", "#6f42c1", "#20c997"];
const BAR_COLOR: &str = "#0d6efd";

/// Accuracy pie: clean vs. dirty share of the table.
pub fn accuracy_chart(accuracy: f64) -> String {
    let slices = [
        ("Clean Data".to_string(), accuracy.max(0.0)),
        ("Duplicates + Missing".to_string(), (100.0 - accuracy).max(0.0)),
    ];
    to_data_uri(&pie_svg("CRM Data Accuracy", &slices, &ACCURACY_PALETTE))
}

/// Bar chart of duplicate counts per customer name.
pub fn duplicate_chart(counts: &[(String, usize)]) -> String {
    to_data_uri(&bar_svg(
        "Duplicate Records in CRM",
        "Customer Name",
        "Duplicate Count",
        counts,
    ))
}

/// Pie of missing cells per column. `None` when nothing is missing, so the
/// caller can drop the chart from the page entirely.
pub fn missing_chart(counts: &[(&'static str, usize)]) -> Option<String> {
    if counts.is_empty() {
        return None;
    }
    let slices: Vec<(String, f64)> = counts
        .iter()
        .map(|&(column, count)| (column.to_string(), count as f64))
        .collect();
    Some(to_data_uri(&pie_svg(
        "Missing Data in CRM",
        &slices,
        &MISSING_PALETTE,
    )))
}

/// Base64-encode an SVG document into an embeddable `data:` URI.
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn polar(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg * PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Render a pie with a legend on the right. Non-positive slices are skipped;
/// a single surviving slice becomes a full circle.
pub fn pie_svg(title: &str, slices: &[(String, f64)], palette: &[&str]) -> String {
    let (cx, cy, r) = (110.0, 120.0, 85.0);
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 240" font-family="sans-serif">"#
    );
    let _ = write!(
        svg,
        r#"<text x="200" y="20" text-anchor="middle" font-size="14">{}</text>"#,
        escape_xml(title)
    );

    let visible: Vec<(&str, f64)> = slices
        .iter()
        .filter(|(_, v)| *v > 0.0)
        .map(|(label, v)| (label.as_str(), *v))
        .collect();
    let total: f64 = visible.iter().map(|(_, v)| v).sum();

    if total > 0.0 {
        if visible.len() == 1 {
            let _ = write!(
                svg,
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#,
                palette[0]
            );
        } else {
            let mut start = -90.0;
            for (idx, &(_, value)) in visible.iter().enumerate() {
                let sweep = value / total * 360.0;
                let end = start + sweep;
                let (x0, y0) = polar(cx, cy, r, start);
                let (x1, y1) = polar(cx, cy, r, end);
                let large_arc = u8::from(sweep > 180.0);
                let color = palette[idx % palette.len()];
                let _ = write!(
                    svg,
                    r#"<path d="M{cx:.2},{cy:.2} L{x0:.2},{y0:.2} A{r:.2},{r:.2} 0 {large_arc},1 {x1:.2},{y1:.2} Z" fill="{color}"/>"#
                );
                start = end;
            }
        }

        // legend with percentage labels
        for (idx, &(label, value)) in visible.iter().enumerate() {
            let y = 60 + idx * 22;
            let color = palette[idx % palette.len()];
            let pct = value / total * 100.0;
            let _ = write!(
                svg,
                r#"<rect x="230" y="{}" width="12" height="12" fill="{color}"/>"#,
                y - 10
            );
            let _ = write!(
                svg,
                r#"<text x="248" y="{y}" font-size="11">{} ({pct:.1}%)</text>"#,
                escape_xml(label)
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Render a vertical bar chart with per-bar value labels.
pub fn bar_svg(title: &str, x_label: &str, y_label: &str, bars: &[(String, usize)]) -> String {
    let bar_width = 40.0;
    let gap = 24.0;
    let left = 60.0;
    let baseline = 190.0;
    let plot_height = 140.0;
    let width = (left + bars.len() as f64 * (bar_width + gap) + 40.0).max(320.0);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width:.0} 250" font-family="sans-serif">"#
    );
    let _ = write!(
        svg,
        r#"<text x="{:.0}" y="20" text-anchor="middle" font-size="14">{}</text>"#,
        width / 2.0,
        escape_xml(title)
    );
    let _ = write!(
        svg,
        r#"<text x="{:.0}" y="240" text-anchor="middle" font-size="11">{}</text>"#,
        width / 2.0,
        escape_xml(x_label)
    );
    let _ = write!(
        svg,
        r#"<text x="14" y="120" font-size="11" transform="rotate(-90 14 120)" text-anchor="middle">{}</text>"#,
        escape_xml(y_label)
    );
    let _ = write!(
        svg,
        r##"<line x1="{left}" y1="{baseline}" x2="{:.0}" y2="{baseline}" stroke="#333"/>"##,
        width - 20.0
    );

    let max = bars.iter().map(|&(_, count)| count).max().unwrap_or(0);
    if max > 0 {
        for (idx, (name, count)) in bars.iter().enumerate() {
            let height = *count as f64 / max as f64 * plot_height;
            let x = left + idx as f64 * (bar_width + gap);
            let y = baseline - height;
            let _ = write!(
                svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_width}" height="{height:.1}" fill="{BAR_COLOR}"/>"#
            );
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11">{count}</text>"#,
                x + bar_width / 2.0,
                y - 4.0
            );
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10">{}</text>"#,
                x + bar_width / 2.0,
                baseline + 14.0,
                escape_xml(name)
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

// ----- Tests -----
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_uri_prefix() {
        let uri = to_data_uri("<svg/>");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_accuracy_chart_is_deterministic() {
        assert_eq!(accuracy_chart(73.5), accuracy_chart(73.5));
    }

    #[test]
    fn test_missing_chart_omitted_when_nothing_missing() {
        assert!(missing_chart(&[]).is_none());
        assert!(missing_chart(&[("Email", 2)]).is_some());
    }

    #[test]
    fn test_pie_handles_single_slice() {
        let svg = pie_svg(
            "t",
            &[("only".to_string(), 100.0), ("gone".to_string(), 0.0)],
            &ACCURACY_PALETTE,
        );
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_bar_chart_escapes_names() {
        let svg = bar_svg(
            "t",
            "x",
            "y",
            &[("A & B <Co>".to_string(), 1)],
        );
        assert!(svg.contains("A &amp; B &lt;Co&gt;"));
        assert!(!svg.contains("A & B <Co>"));
    }

    #[test]
    fn test_bar_chart_renders_no_bars_for_empty_input() {
        let svg = bar_svg("t", "x", "y", &[]);
        assert!(!svg.contains("<rect"));
    }
}
