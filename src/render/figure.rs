//! Pure figure construction: grid in, titled RGB canvas out.

use super::font;
use super::palette::{Colormap, Normalize};
use super::title::format_title;
use crate::analysis::GridStats;
use crate::config::FigureConfig;
use crate::data::GridData;
use image::{Rgb, RgbImage};

/// Title cap height in points, converted to pixels at the figure dpi.
const TITLE_POINTS: f64 = 12.0;
/// Margin around the title and plot area, in inches.
const PAD_INCHES: f64 = 0.1;

/// A rendered figure that has not been written anywhere yet.
#[derive(Debug, Clone)]
pub struct Figure {
    pub image: RgbImage,
    pub title: String,
    pub dpi: u32,
}

impl Figure {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixels packed as `0x00RRGGBB`, row-major, for framebuffer viewers.
    pub fn to_rgb_u32(&self) -> Vec<u32> {
        self.image
            .pixels()
            .map(|Rgb([r, g, b])| ((*r as u32) << 16) | ((*g as u32) << 8) | *b as u32)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Where the title and the raster go on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
    pub canvas: (u32, u32),
    pub title_scale: u32,
    pub title_origin: (u32, u32),
    pub plot: Rect,
}

impl FigureLayout {
    /// Tight layout: title centered at the top, plot the largest rectangle of
    /// `data_aspect` (width / height) that fits below it.
    pub fn compute(config: &FigureConfig, title: &str, data_aspect: f64) -> Self {
        let (cw, ch) = config.canvas_size();
        let dpi = config.dpi as f64;
        let pad = ((dpi * PAD_INCHES).round() as u32).max(1);

        let target_px = TITLE_POINTS / 72.0 * dpi;
        let mut title_scale = ((target_px / font::GLYPH_HEIGHT as f64).round() as u32).max(1);
        let max_title_width = cw.saturating_sub(2 * pad);
        while title_scale > 1 && font::text_width(title, title_scale) > max_title_width {
            title_scale -= 1;
        }
        let title_width = font::text_width(title, title_scale);
        let title_origin = (cw.saturating_sub(title_width) / 2, pad);

        let plot_top = pad + font::text_height(title_scale) + pad;
        let avail_w = cw.saturating_sub(2 * pad).max(1);
        let avail_h = ch.saturating_sub(plot_top + pad).max(1);

        let aspect = if data_aspect.is_finite() && data_aspect > 0.0 {
            data_aspect
        } else {
            1.0
        };
        let (width, height) = if avail_w as f64 / avail_h as f64 > aspect {
            (((avail_h as f64 * aspect).round() as u32).clamp(1, avail_w), avail_h)
        } else {
            (avail_w, ((avail_w as f64 / aspect).round() as u32).clamp(1, avail_h))
        };

        let plot = Rect {
            x: pad + (avail_w - width) / 2,
            y: plot_top.min(ch.saturating_sub(1)) + (avail_h - height) / 2,
            width,
            height,
        };

        Self {
            canvas: (cw, ch),
            title_scale,
            title_origin,
            plot,
        }
    }
}

/// Build the titled, color-mapped figure for a validated grid.
///
/// Axes are not drawn. Row 0 of the grid is the top of the plot.
pub fn build_figure(data: &GridData, stats: &GridStats, config: &FigureConfig) -> Figure {
    let header = &data.header;
    let title = format_title(&config.title_prefix, header.width, header.height, header.elapsed_seconds);
    let (rows, cols) = data.grid.dim();

    let layout = FigureLayout::compute(config, &title, plot_aspect(data));
    tracing::debug!(?layout, "figure layout");

    let (cw, ch) = layout.canvas;
    let mut image = RgbImage::from_pixel(cw, ch, Rgb(config.background));

    if rows > 0 && cols > 0 {
        let cmap = Colormap::twilight_shifted();
        let norm = Normalize::from_stats(stats);
        let plot = layout.plot;
        let col_index = sample_indices(plot.width, cols);
        let row_index = sample_indices(plot.height, rows);

        for (dy, &r) in row_index.iter().enumerate() {
            let y = plot.y + dy as u32;
            if y >= ch {
                break;
            }
            for (dx, &c) in col_index.iter().enumerate() {
                let x = plot.x + dx as u32;
                if x >= cw {
                    break;
                }
                image.put_pixel(x, y, cmap.map(norm.apply(data.grid[[r, c]])));
            }
        }
    }

    let (tx, ty) = layout.title_origin;
    font::draw_text(&mut image, tx, ty, &title, layout.title_scale, Rgb(config.title_color));

    Figure {
        image,
        title,
        dpi: config.dpi,
    }
}

/// Width over height of the plot area.
///
/// The extent only sets the aspect; its direction never reorders cells. A
/// degenerate or non-finite extent falls back to columns over rows.
pub fn plot_aspect(data: &GridData) -> f64 {
    let (rows, cols) = data.grid.dim();
    data.header
        .extent
        .aspect_ratio()
        .unwrap_or(cols.max(1) as f64 / rows.max(1) as f64)
}

/// Nearest-neighbour source index for each of `out` destination pixels.
fn sample_indices(out: u32, source: usize) -> Vec<usize> {
    (0..out)
        .map(|i| (((i as f64 + 0.5) * source as f64 / out as f64) as usize).min(source - 1))
        .collect()
}
