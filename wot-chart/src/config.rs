//! Chart configuration.
//!
//! All fields default to the layout of the published well depth page, so an
//! empty JSON object (`{}`) is a complete configuration. Partial JSON
//! overrides only the fields it names.

use serde::{Deserialize, Serialize};

/// Space reserved around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 290.0,
            right: 77.0,
            bottom: 125.0,
            left: 80.0,
        }
    }
}

/// The decorative image drawn above the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub href: String,
    pub width: f64,
    pub height: f64,
    /// Subtracted from the canvas width before halving to get the image x.
    pub x_inset: f64,
    /// Distance above `padding.top` of the image's top edge.
    pub y_above_plot: f64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            href: "well-image.png".to_string(),
            width: 650.0,
            height: 350.0,
            x_inset: 715.0,
            y_above_plot: 250.0,
        }
    }
}

/// Layout, labels and colors for the well depth bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width as set on the host page.
    pub width: f64,
    /// Canvas height as set on the host page, before `extra_height`.
    pub height: f64,
    /// Added to `height` to make room for the title and image block.
    pub extra_height: f64,
    pub padding: Padding,
    /// Vertical shift applied to the axis and bar layers.
    pub graph_y_offset: f64,
    /// Guide lines start this far below `padding.top`.
    pub guide_offset: f64,
    /// Guide lines end this far below the top of their bar (plus `guide_offset`).
    pub guide_length: f64,
    pub title: String,
    /// Distance of the title baseline above `padding.top`.
    pub title_padding: f64,
    pub image: ImageConfig,
    pub x_axis_title: String,
    /// Distance of the x-axis title baseline above the canvas bottom.
    pub x_axis_title_margin: f64,
    pub y_axis_title: String,
    /// Distance of the rotated y-axis title left of `padding.left`.
    pub y_axis_title_margin: f64,
    /// Extra downward shift of the rotated y-axis title.
    pub y_axis_title_shift: f64,
    /// Inner and outer padding of the year band scale, as a fraction of a step.
    pub band_padding: f64,
    /// Multiplier applied to the station's maximum depth for the y-domain.
    pub headroom: f64,
    /// Requested number of y-axis ticks.
    pub y_ticks: usize,
    /// Start of a bar within its band, as a fraction of the band width.
    pub bar_band_offset: f64,
    /// Width of a bar, as a fraction of the band width.
    pub bar_band_width: f64,
    /// Positions of the left and right guide lines within a band.
    pub guide_fractions: [f64; 2],
    /// `#rrggbb` fill of the bars.
    pub bar_fill: String,
    /// `#rrggbb` stroke of the guide lines.
    pub guide_stroke: String,
    pub guide_stroke_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            extra_height: 550.0,
            padding: Padding::default(),
            graph_y_offset: 70.0,
            guide_offset: 35.0,
            guide_length: 350.0,
            title: "Average Water Depth Over Time by Site".to_string(),
            title_padding: 270.0,
            image: ImageConfig::default(),
            x_axis_title: "Year".to_string(),
            x_axis_title_margin: 5.0,
            y_axis_title: "Average Water Depth (ft)".to_string(),
            y_axis_title_margin: 40.0,
            y_axis_title_shift: 100.0,
            band_padding: 0.1,
            headroom: 1.1,
            y_ticks: 10,
            bar_band_offset: 0.25,
            bar_band_width: 0.5,
            guide_fractions: [0.25, 0.75],
            bar_fill: "#4682b4".to_string(),
            guide_stroke: "#808080".to_string(),
            guide_stroke_width: 1.0,
        }
    }
}

impl ChartConfig {
    /// Parse a JSON configuration; absent fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Full canvas height, including the title and image block.
    pub fn canvas_height(&self) -> f64 {
        self.height + self.extra_height
    }

    /// Pixel y of the bar baseline before `graph_y_offset` is applied.
    pub fn baseline(&self) -> f64 {
        self.canvas_height() - self.padding.bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }
}
