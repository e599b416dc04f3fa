use crate::pipeline::RunSummary;

/// Human-readable run summary lines.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    let h = &summary.header;
    let e = &h.extent;
    let s = &summary.stats;
    let mut lines = vec![
        "=== Render Summary ===".to_string(),
        format!("Input: {}", summary.input.display()),
        format!("  Grid: {}x{}", h.width, h.height),
        format!("  Generator time: {:.2}s", h.elapsed_seconds),
        format!("  Extent: x [{}, {}], y [{}, {}]", e.x_min, e.x_max, e.y_min, e.y_max),
        format!(
            "  Values: min {}, max {} (range {}), mean {:.2}",
            s.min,
            s.max,
            s.range(),
            s.mean
        ),
        format!(
            "  At max: {} of {} ({:.1}%)",
            s.saturated,
            s.cells,
            s.saturated_fraction() * 100.0
        ),
        format!("Output: {}", summary.output.display()),
        format!(
            "  Canvas: {}x{} px @ {} dpi ({} bytes)",
            summary.canvas.0, summary.canvas.1, summary.dpi, summary.png_bytes
        ),
        format!("  Title: {}", summary.title),
    ];
    if let Some(report) = &summary.report {
        lines.push(format!("Report: {}", report.display()));
    }
    lines
}

pub fn print_summary(summary: &RunSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::GridStats;
    use crate::data::parse_header;
    use std::path::PathBuf;

    #[test]
    fn test_summary_mentions_title_and_canvas() {
        let summary = RunSummary {
            input: PathBuf::from("in.dat"),
            output: PathBuf::from("out.png"),
            header: parse_header("3 2 1.5 -1 1 -1 1").unwrap(),
            stats: GridStats { min: 1, max: 6, mean: 3.5, saturated: 1, cells: 6 },
            canvas: (1200, 1200),
            dpi: 150,
            title: "Fractal de Newton - 3x2 - Tempo: 1.50s".to_string(),
            png_bytes: 1234,
            report: None,
        };
        let lines = format_summary(&summary);
        assert!(lines.iter().any(|l| l.contains("1200x1200 px @ 150 dpi")));
        assert!(lines.iter().any(|l| l.ends_with("Tempo: 1.50s")));
        assert!(lines.iter().any(|l| l.contains("min 1, max 6 (range 5)")));
        assert!(!lines.iter().any(|l| l.starts_with("Report")));
    }
}
