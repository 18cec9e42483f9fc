//! Static SVG output of the well depth chart, drawn with `plotters`.
//!
//! Year `i` of the x-domain is centered on `i` in plot units, with inner and
//! outer padding of `band_padding` steps. Bars and guide lines sit at the
//! configured fractions of their band. The decorative image has no
//! counterpart here.

use anyhow::anyhow;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use wot_chart::{BarDatum, ChartConfig, ChartData, DEFAULT_Y_MAX};

fn draw_error<E: std::fmt::Debug>(err: E) -> anyhow::Error {
    anyhow!("failed to draw chart: {:?}", err)
}

/// Parse a `#rrggbb` color.
pub fn parse_hex_color(text: &str) -> Option<RGBColor> {
    let hex = text.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

fn color(text: &str) -> anyhow::Result<RGBColor> {
    parse_hex_color(text).ok_or_else(|| anyhow!("invalid color {:?}, expected #rrggbb", text))
}

/// Plot-unit span of the x-axis for `years` bands.
fn x_span(years: usize, band_padding: f64) -> Range<f64> {
    let outer = 0.5 + band_padding / 2.0;
    -outer..(years.max(1) as f64 - 1.0 + outer)
}

/// Left edge of the band holding `bar`, in plot units.
fn band_left(years: &[String], bar: &BarDatum, bandwidth: f64) -> Option<f64> {
    let index = years.iter().position(|y| *y == bar.year)?;
    Some(index as f64 - bandwidth / 2.0)
}

fn year_label(years: &[String], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    years.get(index as usize).cloned().unwrap_or_default()
}

/// Draw `data` as a standalone SVG document.
pub fn draw_svg(data: &ChartData, config: &ChartConfig) -> anyhow::Result<String> {
    let width = config.width.max(1.0) as u32;
    let height = config.canvas_height().max(1.0) as u32;
    let shift = config.graph_y_offset;
    let y_max = if data.y_max.is_finite() && data.y_max > 0.0 {
        data.y_max
    } else {
        DEFAULT_Y_MAX
    };
    let bandwidth = 1.0 - config.band_padding;
    let bar_fill = color(&config.bar_fill)?;
    let guide_stroke = color(&config.guide_stroke)?;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin_top((config.padding.top + shift).max(0.0) as u32)
            .margin_right(config.padding.right.max(0.0) as u32)
            .set_label_area_size(LabelAreaPosition::Left, config.padding.left.max(0.0) as u32)
            .set_label_area_size(
                LabelAreaPosition::Bottom,
                (config.padding.bottom - shift).max(0.0) as u32,
            )
            .build_cartesian_2d(x_span(data.years.len(), config.band_padding), 0f64..y_max)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .max_light_lines(0)
            .x_labels(data.years.len().max(1))
            .y_labels(config.y_ticks)
            .x_label_formatter(&|v| year_label(&data.years, *v))
            .x_desc(config.x_axis_title.as_str())
            .y_desc(config.y_axis_title.as_str())
            .draw()
            .map_err(draw_error)?;

        let drawable: Vec<(f64, &BarDatum)> = data
            .bars
            .iter()
            .filter(|bar| bar.is_drawable())
            .filter_map(|bar| band_left(&data.years, bar, bandwidth).map(|left| (left, bar)))
            .collect();
        log::debug!(
            "drawing {} of {} bars",
            drawable.len(),
            data.bars.len()
        );

        chart
            .draw_series(drawable.iter().map(|(left, bar)| {
                let x0 = left + bandwidth * config.bar_band_offset;
                let x1 = x0 + bandwidth * config.bar_band_width;
                Rectangle::new([(x0, 0.0), (x1, bar.depth)], bar_fill.filled())
            }))
            .map_err(draw_error)?;

        let guide_style = guide_stroke.stroke_width(config.guide_stroke_width.max(1.0) as u32);
        let guide_top = (config.padding.top + config.guide_offset) as i32;
        for (left, bar) in &drawable {
            for fraction in config.guide_fractions {
                let (x, bar_top) = chart.backend_coord(&(left + bandwidth * fraction, bar.depth));
                let bottom = bar_top - shift as i32
                    + (config.guide_offset + config.guide_length) as i32;
                root.draw(&PathElement::new(vec![(x, guide_top), (x, bottom)], guide_style))
                    .map_err(draw_error)?;
            }
        }

        let title_style = TextStyle::from(("sans-serif", 20).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let title_at = (
            ((config.padding.left + config.width - config.padding.right) / 2.0) as i32,
            (config.padding.top - config.title_padding) as i32,
        );
        root.draw(&Text::new(config.title.as_str(), title_at, title_style))
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wot_chart::render_chart;
    use wot_data::{Dataset, FilterEvent, FilterState, WellDepth};

    fn sample() -> Dataset {
        vec![
            WellDepth::new("A", "2020", 10.0),
            WellDepth::new("A", "2021", 12.0),
            WellDepth::new("A", "2021", 11.0),
            WellDepth::new("B", "2020", f64::NAN),
        ]
        .into()
    }

    fn bar_count(svg: &str) -> usize {
        svg.to_lowercase().matches("fill=\"#4682b4\"").count()
    }

    #[test]
    fn parse_colors() {
        assert_eq!(parse_hex_color("#4682b4"), Some(RGBColor(70, 130, 180)));
        assert_eq!(parse_hex_color("#FFFFFF"), Some(RGBColor(255, 255, 255)));
        assert_eq!(parse_hex_color("steelblue"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#12345g"), None);
    }

    #[test]
    fn x_span_matches_band_layout() {
        let span = x_span(1, 0.1);
        assert!((span.start + 0.55).abs() < 1e-9);
        assert!((span.end - 0.55).abs() < 1e-9);
        // n bands plus padding steps
        let span = x_span(3, 0.1);
        assert!((span.end - span.start - 3.1).abs() < 1e-9);
        assert_eq!(x_span(0, 0.1), x_span(1, 0.1));
    }

    #[test]
    fn labels_only_on_band_centers() {
        let years = vec!["2020".to_string(), "2021".to_string()];
        assert_eq!(year_label(&years, 0.0), "2020");
        assert_eq!(year_label(&years, 1.0), "2021");
        assert_eq!(year_label(&years, 0.5), "");
        assert_eq!(year_label(&years, 2.0), "");
        assert_eq!(year_label(&years, -1.0), "");
    }

    #[test]
    fn draws_one_rect_per_bar() {
        let ds = sample();
        let config = ChartConfig::default();
        let filter = FilterState::initial(&ds).apply(&ds, FilterEvent::YearChanged("2021".into()));
        let svg = draw_svg(&render_chart(&ds, &filter, &config), &config).unwrap();

        assert!(svg.starts_with("<svg"));
        assert_eq!(bar_count(&svg), 2);
        assert!(svg.contains(">2021</text>"));
        assert!(svg.contains("Average Water Depth Over Time by Site"));
        assert!(svg.contains("Average Water Depth (ft)"));
    }

    #[test]
    fn nan_bar_is_not_drawn() {
        let ds = sample();
        let config = ChartConfig::default();
        let filter = FilterState::initial(&ds).apply(&ds, FilterEvent::StationChanged("B".into()));
        let data = render_chart(&ds, &filter, &config);
        assert_eq!(data.bars.len(), 1);

        let svg = draw_svg(&data, &config).unwrap();
        assert_eq!(bar_count(&svg), 0);
    }

    #[test]
    fn empty_selection_draws_axes_only() {
        let ds = sample();
        let config = ChartConfig::default();
        let filter = FilterState::initial(&ds).apply(&ds, FilterEvent::StationChanged("Z".into()));
        let svg = draw_svg(&render_chart(&ds, &filter, &config), &config).unwrap();
        assert_eq!(bar_count(&svg), 0);
        assert!(svg.contains("Year"));
    }

    #[test]
    fn invalid_color_is_an_error() {
        let ds = sample();
        let config = ChartConfig {
            bar_fill: "steelblue".into(),
            ..ChartConfig::default()
        };
        let data = render_chart(&ds, &FilterState::initial(&ds), &config);
        let err = draw_svg(&data, &config).unwrap_err();
        assert!(err.to_string().contains("invalid color"));
    }
}
