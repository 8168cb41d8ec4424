use std::io::Cursor;
use std::path::Path;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use log::info;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use crate::analysis::series::min_max;
use crate::analysis::{AnalysisError, ResolvedSpan};
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub font: &'static str,
    pub line: RGBColor,
    pub background: RGBColor,
    pub grid: RGBColor,
    pub annotation: RGBColor,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            font: "sans-serif",
            line: RGBColor(0x1f, 0x77, 0xb4),
            background: RGBColor(0xf5, 0xf5, 0xf5),
            grid: RGBColor(0xe0, 0xe0, 0xe0),
            annotation: RGBColor(0x2c, 0x3e, 0x50),
        }
    }
}
/// Everything drawn on the peak plot. `curve` is indexed like `voltage`;
/// `peaks` are `(voltage, current)` marker positions.
#[derive(Clone, Copy, Debug)]
pub struct PlotData<'a> {
    pub voltage: &'a [f64],
    pub curve: &'a [f64],
    pub peaks: &'a [(f64, f64)],
    pub spans: &'a [ResolvedSpan],
}
const GUIDE_DASHES: usize = 30;
const ARROW_HEAD: (i32, i32) = (8, 4);
/// Draws the curve, peak markers, dashed guides and ΔV arrows, returning PNG bytes.
pub fn render_peaks_png(data: &PlotData<'_>, style: &PlotStyle) -> Result<Vec<u8>, AnalysisError> {
    if data.voltage.len() != data.curve.len() {
        return Err(AnalysisError::LengthMismatch {
            voltage: data.voltage.len(),
            current: data.curve.len(),
        });
    }
    let (x_min, x_max) = min_max(data.voltage)
        .ok_or_else(|| AnalysisError::Plot("curve has no samples".into()))?;
    let x_range = if x_max - x_min < f64::EPSILON {
        (x_min - 0.5)..(x_max + 0.5)
    } else {
        x_min..x_max
    };
    let curve_max = data
        .curve
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let curve_max = if curve_max > 0.0 { curve_max } else { 1.0 };
    let arrow_y = curve_max * 1.10;
    let line = style.line;
    let annotation = style.annotation;
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .caption(
                "Current vs Accelerating Voltage of Mercury (Hg)",
                (style.font, 20, FontStyle::Bold)
                    .into_font()
                    .color(&annotation),
            )
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(x_range.clone(), 0f64..curve_max * 1.15)?;
        chart.plotting_area().fill(&style.background)?;
        chart
            .configure_mesh()
            .bold_line_style(style.grid.stroke_width(1))
            .light_line_style(&TRANSPARENT)
            .axis_style(annotation.stroke_width(1))
            .x_desc("Accelerating Voltage V_G2K (V)")
            .y_desc("Current I_A (×10⁻¹¹ A)")
            .axis_desc_style((style.font, 15).into_font().color(&annotation))
            .label_style((style.font, 12).into_font().color(&annotation))
            .draw()?;
        chart
            .draw_series(LineSeries::new(
                data.voltage.iter().copied().zip(data.curve.iter().copied()),
                line.stroke_width(2),
            ))?
            .label("Smoothed curve")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line.stroke_width(2)));
        chart
            .draw_series(
                data.peaks
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, line.filled())),
            )?
            .label("Peaks")
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, line.filled()));
        for span in data.spans {
            let (lo, hi) = if span.start_voltage <= span.end_voltage {
                (span.start_voltage, span.end_voltage)
            } else {
                (span.end_voltage, span.start_voltage)
            };
            for x in [lo, hi] {
                chart.draw_series(
                    dashed_segments(x, 0.0, curve_max, GUIDE_DASHES)
                        .into_iter()
                        .map(|dash| PathElement::new(dash, line.mix(0.5).stroke_width(1))),
                )?;
            }
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(lo, arrow_y), (hi, arrow_y)],
                annotation.stroke_width(1),
            )))?;
            let (len, half) = ARROW_HEAD;
            chart.draw_series([
                EmptyElement::at((lo, arrow_y))
                    + Polygon::new(vec![(0, 0), (len, -half), (len, half)], annotation.filled()),
                EmptyElement::at((hi, arrow_y))
                    + Polygon::new(vec![(0, 0), (-len, -half), (-len, half)], annotation.filled()),
            ])?;
            let label = span.span.label();
            let half_width = label.chars().count() as i32 * 7 / 2 + 6;
            let corners = [(-half_width, -24), (half_width, -4)];
            chart.draw_series(std::iter::once(
                EmptyElement::at((span.mid_voltage(), arrow_y))
                    + Rectangle::new(corners, WHITE.mix(0.7).filled())
                    + Rectangle::new(corners, annotation.stroke_width(1))
                    + Text::new(
                        label,
                        (0, -14),
                        (style.font, 11)
                            .into_font()
                            .color(&annotation)
                            .pos(Pos::new(HPos::Center, VPos::Center)),
                    ),
            ))?;
        }
        // frame on all four sides
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_range.start, 0.0), (x_range.end, curve_max * 1.15)],
            annotation.stroke_width(1),
        )))?;
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE)
            .border_style(&annotation)
            .label_font((style.font, 12).into_font().color(&annotation))
            .draw()?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
pub fn write_png(path: impl AsRef<Path>, png: &[u8]) -> Result<(), AnalysisError> {
    let path = path.as_ref();
    std::fs::write(path, png)?;
    info!("Wrote {} ({} bytes)", path.display(), png.len());
    Ok(())
}
/// Splits the vertical line at `x` from `y0` to `y1` into `count` dashes.
fn dashed_segments(x: f64, y0: f64, y1: f64, count: usize) -> Vec<Vec<(f64, f64)>> {
    let period = (y1 - y0) / count.max(1) as f64;
    (0..count.max(1))
        .map(|i| {
            let start = y0 + i as f64 * period;
            vec![(x, start), (x, start + period * 0.6)]
        })
        .collect()
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AnalysisError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| AnalysisError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::annotate::PeakSpan;
    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    fn wave() -> (Vec<f64>, Vec<f64>) {
        let voltage: Vec<f64> = (0..200).map(|i| 5.0 + i as f64 * 0.15).collect();
        let curve = voltage
            .iter()
            .map(|v| 1.0 + (v * 1.3).sin() + v / 10.0)
            .collect();
        (voltage, curve)
    }
    #[test]
    fn empty_peak_list_still_renders() {
        let (voltage, curve) = wave();
        let data = PlotData {
            voltage: &voltage,
            curve: &curve,
            peaks: &[],
            spans: &[],
        };
        let style = PlotStyle::default();
        let png = render_peaks_png(&data, &style).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (style.width, style.height));
    }
    #[test]
    fn renders_spans_and_writes_file() {
        let (voltage, curve) = wave();
        let peaks = [(10.0, 3.0), (14.8, 3.5)];
        let spans = [ResolvedSpan {
            span: PeakSpan::new(0, 1, 4.80),
            start_voltage: 10.0,
            end_voltage: 14.8,
        }];
        let data = PlotData {
            voltage: &voltage,
            curve: &curve,
            peaks: &peaks,
            spans: &spans,
        };
        let png = render_peaks_png(&data, &PlotStyle::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peaks.png");
        write_png(&path, &png).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), png);
    }
    #[test]
    fn rejects_empty_or_mismatched_curve() {
        let data = PlotData {
            voltage: &[],
            curve: &[],
            peaks: &[],
            spans: &[],
        };
        assert!(matches!(
            render_peaks_png(&data, &PlotStyle::default()),
            Err(AnalysisError::Plot(_))
        ));
        let data = PlotData {
            voltage: &[1.0, 2.0],
            curve: &[1.0],
            peaks: &[],
            spans: &[],
        };
        assert!(matches!(
            render_peaks_png(&data, &PlotStyle::default()),
            Err(AnalysisError::LengthMismatch { .. })
        ));
    }
    #[test]
    fn dashes_stay_on_the_guide() {
        let dashes = dashed_segments(3.0, 0.0, 10.0, 5);
        assert_eq!(dashes.len(), 5);
        assert_eq!(dashes[0], vec![(3.0, 0.0), (3.0, 1.2)]);
        assert!(dashes.iter().flatten().all(|&(x, y)| x == 3.0 && y <= 10.0));
    }
}
