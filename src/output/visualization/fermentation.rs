//! Two-panel fermentation plot
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Biomass (X) ── Substrate (S)        │  Concentration (g/L)
//! ├──────────────────────────────────────┤
//! │  Ethanol (P)                         │  Ethanol (g/L)
//! └──────────────────────────────────────┘
//!                 Time (hours)
//! ```
//!
//! Both panels share the time axis and start at zero on both axes.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::config::{PlotConfig, NO_TITLE};
use crate::error::FermentationError;
use crate::simulation::SimulationResult;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot biomass and substrate (top) and ethanol (bottom) against time
///
/// The backend is chosen from the file extension: `.svg` gives an SVG
/// document, anything else a PNG bitmap.
///
/// # Errors
///
/// [`FermentationError::Plot`] if the result holds no data or the backend
/// cannot write to `output_path`.
///
/// # Example
///
/// ```rust,no_run
/// use ferment_rs::output::visualization::{plot_fermentation, PlotConfig};
/// use ferment_rs::simulation::{simulate, SimulationInputs};
///
/// let result = simulate(&SimulationInputs::default()).unwrap();
/// plot_fermentation(&result, "run.png", None).unwrap();
///
/// let config = PlotConfig::fermentation("Reference run");
/// plot_fermentation(&result, "run.svg", Some(&config)).unwrap();
/// ```
pub fn plot_fermentation<P: AsRef<Path>>(
    result: &SimulationResult,
    output_path: P,
    config: Option<&PlotConfig>,
) -> Result<(), FermentationError> {
    check_series(result)?;

    let default_config = PlotConfig::fermentation(NO_TITLE);
    let config = config.unwrap_or(&default_config);
    let path = output_path.as_ref();

    let rendered = match path.extension().and_then(|s| s.to_str()) {
        Some("svg") => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_fermentation_impl(backend, result, config)
        }
        _ => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_fermentation_impl(backend, result, config)
        }
    };

    rendered.map_err(|e| FermentationError::Plot(e.to_string()))?;
    log::info!("Plot written to {}", path.display());
    Ok(())
}

fn check_series(result: &SimulationResult) -> Result<(), FermentationError> {
    if result.time.is_empty() {
        return Err(FermentationError::Plot("Empty data: nothing to plot".to_string()));
    }

    let n = result.time.len();
    if result.biomass.len() != n || result.substrate.len() != n || result.ethanol.len() != n {
        return Err(FermentationError::Plot(format!(
            "Data length mismatch: series must have {} points like the time grid",
            n
        )));
    }
    Ok(())
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// A named line of one panel
struct Series<'a> {
    label: &'a str,
    values: &'a [f64],
    color: RGBColor,
}

fn plot_fermentation_impl<DB: DrawingBackend>(
    backend: DB,
    result: &SimulationResult,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.figure_background)?;

    let panels = root.split_evenly((2, 1));

    draw_panel(
        &panels[0],
        Some(&config.title),
        &result.time,
        &[
            Series { label: "Biomass (X)", values: &result.biomass, color: config.biomass_color },
            Series { label: "Substrate (S)", values: &result.substrate, color: config.substrate_color },
        ],
        &config.ylabel_top,
        config,
    )?;

    draw_panel(
        &panels[1],
        None,
        &result.time,
        &[Series { label: "Ethanol (P)", values: &result.ethanol, color: config.ethanol_color }],
        &config.ylabel_bottom,
        config,
    )?;

    root.present()?;
    Ok(())
}

fn hours_label(x: &f64) -> String {
    format!("{:.0}", x)
}

fn concentration_label(y: &f64) -> String {
    format!("{:.1}", y)
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: Option<&str>,
    time: &[f64],
    series: &[Series<'_>],
    ylabel: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let max_time = time.last().copied().unwrap_or(1.0).max(1e-10);
    let max_value = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max)
        .max(1e-10);

    let mut builder = ChartBuilder::on(area);
    builder.margin(15).x_label_area_size(45).y_label_area_size(60);
    if let Some(caption) = caption {
        builder.caption(caption, ("sans-serif", 30).into_font().color(&config.text_color));
    }

    let mut chart = builder.build_cartesian_2d(0.0..max_time, 0.0..(max_value * 1.1))?;
    chart.plotting_area().fill(&config.panel_background)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(ylabel)
        .label_style(("sans-serif", 15).into_font().color(&config.text_color))
        .axis_desc_style(("sans-serif", 16).into_font().color(&config.text_color))
        .axis_style(config.text_color)
        .x_label_formatter(&hours_label)
        .y_label_formatter(&concentration_label);

    if config.show_grid {
        mesh.bold_line_style(config.grid_color.mix(0.3))
            .light_line_style(config.grid_color.mix(0.1));
    } else {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for line in series {
        let color = line.color;
        chart
            .draw_series(LineSeries::new(
                time.iter().copied().zip(line.values.iter().copied()),
                color.stroke_width(config.line_width),
            ))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(config.panel_background.mix(0.8))
        .border_style(config.text_color)
        .label_font(("sans-serif", 15).into_font().color(&config.text_color))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{simulate, SimulationInputs};

    fn run() -> SimulationResult {
        simulate(&SimulationInputs { duration: 12.0, ..SimulationInputs::default() }).unwrap()
    }

    #[test]
    fn test_empty_result_is_rejected() {
        let mut result = run();
        result.time.clear();

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        let err = plot_fermentation(&result, &path, None).unwrap_err();

        assert!(matches!(err, FermentationError::Plot(message) if message.starts_with("Empty data")));
        assert!(!path.exists());
    }

    #[test]
    fn test_mismatched_series_are_rejected() {
        let mut result = run();
        result.ethanol.truncate(3);

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        assert!(matches!(
            plot_fermentation(&result, &path, None),
            Err(FermentationError::Plot(_))
        ));
    }

    // Rendering needs a system font for the axis labels.
    #[test]
    #[ignore = "requires system fonts"]
    fn test_plot_fermentation_svg() {
        let result = run();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");

        plot_fermentation(&result, &path, None).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Ethanol (P)"));
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn test_plot_fermentation_png_light_theme() {
        let result = run();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");

        let mut config = PlotConfig::light();
        config.show_grid = false;
        plot_fermentation(&result, &path, Some(&config)).unwrap();
        assert!(path.exists());
    }
}
