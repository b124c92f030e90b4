//! Overlaid two-group histograms: a terminal rendering and an SVG file.
//!
//! The terminal view bins both groups over one shared range so the bars line
//! up. The SVG view gives each group its own equal-width bins, like a
//! plotting library drawing two independent histograms on one axis.

use crate::error::{CliError, Result};
use colored::Colorize;
use hypotest::analysis::Analysis;
use hypotest::stats::Histogram;
use hypotest::HypotestError;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const TITLE: &str = "Распределение данных";
const X_LABEL: &str = "Значение";
const Y_LABEL: &str = "Частота";
const SERIES: [&str; 2] = ["Группа 1", "Группа 2"];
const BAR_WIDTH: usize = 30;

/// Print both histograms bin by bin, one bar per group.
pub(crate) fn print_overlay(analysis: &Analysis, bins: usize) -> Result<()> {
    let (h1, h2) = analysis.histograms(bins)?;
    let max_count = h1.max_count().max(h2.max_count()).max(1);

    println!("\n{}", format!("=== {TITLE} ===").cyan().bold());
    println!(
        "  {} {}   {} {}",
        "█".blue(),
        SERIES[0],
        "▒".green(),
        SERIES[1]
    );

    for ((start, end, c1), (_, _, c2)) in h1.iter_bins().zip(h2.iter_bins()) {
        let bar1 = "█".repeat(c1 * BAR_WIDTH / max_count);
        let bar2 = "▒".repeat(c2 * BAR_WIDTH / max_count);
        println!(
            "  {} {} {} {}",
            format!("[{start:>10.3}, {end:>10.3}]").dimmed(),
            format!("{bar1:<width$}", width = BAR_WIDTH).blue(),
            format!("{bar2:<width$}", width = BAR_WIDTH).green(),
            format!("{c1:>4} {c2:>4}").white().bold()
        );
    }
    println!("  {}: {X_LABEL}, {}: {Y_LABEL}", "x".dimmed(), "y".dimmed());
    Ok(())
}

/// Write both histograms, each with `bins` bins, to an SVG file.
pub(crate) fn write_svg(analysis: &Analysis, bins: usize, path: &Path) -> Result<()> {
    let h1 = Histogram::new(analysis.group1().as_slice(), bins)?;
    let h2 = Histogram::new(analysis.group2().as_slice(), bins)?;

    let x_min = h1.edges[0].min(h2.edges[0]);
    let x_max = h1.edges[bins].max(h2.edges[bins]);
    if !(x_max - x_min).is_finite() {
        return Err(HypotestError::InvalidInput(format!(
            "plot range [{x_min}, {x_max}] is too wide to draw"
        ))
        .into());
    }
    let y_max = h1.max_count().max(h2.max_count()).max(1) as f64 * 1.1;

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(plot_err)?;

    let colors = [RGBColor(173, 216, 230), RGBColor(144, 238, 144)];
    for ((hist, color), name) in [&h1, &h2].into_iter().zip(colors).zip(SERIES) {
        chart
            .draw_series(hist.iter_bins().map(|(lo, hi, count)| {
                Rectangle::new([(lo, 0.0), (hi, count as f64)], color.mix(0.5).filled())
            }))
            .map_err(plot_err)?
            .label(name)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
        chart
            .draw_series(hist.iter_bins().map(|(lo, hi, count)| {
                Rectangle::new([(lo, 0.0), (hi, count as f64)], BLACK.stroke_width(1))
            }))
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), "histogram plot written");
    Ok(())
}

fn plot_err(err: impl std::fmt::Display) -> CliError {
    CliError::Plot(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_svg() {
        let analysis = Analysis::from_vecs(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![2.0, 4.0, 6.0, 8.0, 100.0],
        )
        .unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        write_svg(&analysis, 20, &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Группа 1"));
    }

    #[test]
    fn test_write_svg_constant_group() {
        let analysis = Analysis::from_vecs(vec![3.0, 3.0], vec![1.0, 5.0]).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        assert!(write_svg(&analysis, 20, &path).is_ok());
    }

    #[test]
    fn test_write_svg_rejects_overflowing_group_range() {
        let analysis = Analysis::from_vecs(vec![-1e308, 1e308], vec![0.0, 1.0]).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let err = write_svg(&analysis, 20, &path).unwrap_err();
        assert!(matches!(err, CliError::Hypotest(HypotestError::InvalidInput(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_svg_rejects_overflowing_shared_range() {
        let analysis = Analysis::from_vecs(vec![-1e308, -1e307], vec![1e307, 1e308]).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let err = write_svg(&analysis, 20, &path).unwrap_err();
        assert!(matches!(err, CliError::Hypotest(HypotestError::InvalidInput(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_print_overlay_rejects_overflowing_range() {
        let analysis = Analysis::from_vecs(vec![-1e308, 1e308], vec![0.0, 1.0]).unwrap();
        assert!(print_overlay(&analysis, 20).is_err());
    }
}
