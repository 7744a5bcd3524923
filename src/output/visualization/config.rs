//! Plot configuration for fermentation plots
//!
//! The default theme is dark: a #1e1e1e figure, #2e2e2e panels, white text
//! and a faint grey grid. [`PlotConfig::light`] gives a white theme for
//! printed reports.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Caption above the top panel
/// - `xlabel`: Time axis label (bottom panel)
/// - `ylabel_top`, `ylabel_bottom`: Concentration axis labels
/// - `biomass_color`, `substrate_color`, `ethanol_color`: Series colors
/// - `figure_background`, `panel_background`: Fill colors
/// - `text_color`, `grid_color`: Labels, ticks, legend border and grid
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use ferment_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::fermentation("Run 12");
/// config.width = 1920;
/// config.height = 1080;
/// config.ethanol_color = RED;
/// assert_eq!(config.title, "Run 12");
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1000)
    pub width: u32,

    /// Image height in pixels (default: 800)
    pub height: u32,

    /// Plot title (default: "Batch Fermentation")
    pub title: String,

    /// X-axis label (default: "Time (hours)")
    pub xlabel: String,

    /// Y-axis label of the biomass/substrate panel
    pub ylabel_top: String,

    /// Y-axis label of the ethanol panel
    pub ylabel_bottom: String,

    /// Biomass line (default: limegreen)
    pub biomass_color: RGBColor,

    /// Substrate line (default: dodgerblue)
    pub substrate_color: RGBColor,

    /// Ethanol line (default: orangered)
    pub ethanol_color: RGBColor,

    /// Figure background (default: #1e1e1e)
    pub figure_background: RGBColor,

    /// Panel background (default: #2e2e2e)
    pub panel_background: RGBColor,

    /// Text, ticks and legend border (default: white)
    pub text_color: RGBColor,

    /// Grid lines (default: grey)
    pub grid_color: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

/// limegreen
pub const LIMEGREEN: RGBColor = RGBColor(50, 205, 50);
/// dodgerblue
pub const DODGERBLUE: RGBColor = RGBColor(30, 144, 255);
/// orangered
pub const ORANGERED: RGBColor = RGBColor(255, 69, 0);

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            title: "Batch Fermentation".to_string(),
            xlabel: "Time (hours)".to_string(),
            ylabel_top: "Concentration (g/L)".to_string(),
            ylabel_bottom: "Ethanol (g/L)".to_string(),
            biomass_color: LIMEGREEN,
            substrate_color: DODGERBLUE,
            ethanol_color: ORANGERED,
            figure_background: RGBColor(0x1e, 0x1e, 0x1e),
            panel_background: RGBColor(0x2e, 0x2e, 0x2e),
            text_color: WHITE,
            grid_color: RGBColor(128, 128, 128),
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Dark theme with an optional custom title
    ///
    /// ```rust
    /// use ferment_rs::output::visualization::{PlotConfig, NO_TITLE};
    ///
    /// assert_eq!(PlotConfig::fermentation(NO_TITLE).title, "Batch Fermentation");
    /// assert_eq!(PlotConfig::fermentation(format!("N = {} rpm", 300)).title, "N = 300 rpm");
    /// ```
    pub fn fermentation(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// White theme, same series colors
    pub fn light() -> Self {
        Self {
            figure_background: WHITE,
            panel_background: WHITE,
            text_color: BLACK,
            ..Self::default()
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
