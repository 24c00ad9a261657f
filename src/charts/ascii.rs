pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_OFFSET: usize = 3;
pub const DEFAULT_PRECISION: usize = 2;

/// Upper bounds on chart geometry; larger requests are clamped.
pub const MAX_WIDTH: usize = 1_000;
pub const MAX_HEIGHT: usize = 200;
pub const MAX_OFFSET: usize = 64;

/// Magnitude (log10) above which axis labels drop their decimals.
const INTEGER_LABEL_LOG10: f64 = 2.0;

const AXIS: char = '┤';
const AXIS_ORIGIN: char = '┼';
const FLAT: char = '─';
const VERTICAL: char = '│';
const UP_FROM: char = '╯';
const UP_TO: char = '╭';
const DOWN_FROM: char = '╮';
const DOWN_TO: char = '╰';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotOptions {
    pub caption: Option<String>,
    /// Number of plotted columns; the series is linearly resampled to fit.
    /// `0` plots the series as-is.
    pub width: usize,
    pub height: usize,
    /// Columns reserved left of the plot for axis labels, axis included.
    pub offset: usize,
    pub precision: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            caption: None,
            width: 0,
            height: DEFAULT_HEIGHT,
            offset: DEFAULT_OFFSET,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_owned());
        self
    }

    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub const fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub const fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Render `series` as a multi-line ASCII line chart.
///
/// The output is a pure function of its inputs. An empty series renders as
/// an empty string; non-finite values are plotted as zero.
#[must_use]
pub fn plot(series: &[f64], options: &PlotOptions) -> String {
    let cleaned: Vec<f64> = series
        .iter()
        .map(|value| if value.is_finite() { *value } else { 0.0 })
        .collect();
    let width = options.width.min(MAX_WIDTH);
    let data = if width > 0 && width != cleaned.len() {
        interpolate(&cleaned, width)
    } else {
        cleaned
    };
    let Some(first) = data.first().copied() else {
        return String::new();
    };

    let (minimum, maximum) = data
        .iter()
        .fold((first, first), |(lo, hi), value| (lo.min(*value), hi.max(*value)));
    let interval = maximum - minimum;
    let height = options.height.clamp(1, MAX_HEIGHT);
    let ratio = if interval > 0.0 {
        height as f64 / interval
    } else {
        1.0
    };
    let min_scaled = (minimum * ratio).round() as i64;
    let max_scaled = (maximum * ratio).round() as i64;
    let rows = usize::try_from(max_scaled.saturating_sub(min_scaled)).unwrap_or(0);

    let precision = label_precision(minimum, maximum, options.precision);
    let label_width = format_label(maximum, precision, 0)
        .len()
        .max(format_label(minimum, precision, 0).len());
    let margin = options
        .offset
        .min(MAX_OFFSET)
        .saturating_sub(1)
        .max(label_width);

    let level = |value: f64| -> usize {
        let scaled = ((value * ratio).round() as i64).saturating_sub(min_scaled);
        usize::try_from(scaled).unwrap_or(0).min(rows)
    };

    let columns = data.len().saturating_sub(1);
    let mut grid = vec![vec![' '; columns]; rows.saturating_add(1)];
    for (x, pair) in data.windows(2).enumerate() {
        let (Some(&from), Some(&to)) = (pair.first(), pair.get(1)) else {
            continue;
        };
        let (y0, y1) = (level(from), level(to));
        if y0 == y1 {
            put(&mut grid, rows - y0, x, FLAT);
            continue;
        }
        if y0 > y1 {
            put(&mut grid, rows - y1, x, DOWN_TO);
            put(&mut grid, rows - y0, x, DOWN_FROM);
        } else {
            put(&mut grid, rows - y1, x, UP_TO);
            put(&mut grid, rows - y0, x, UP_FROM);
        }
        for y in (y0.min(y1) + 1)..y0.max(y1) {
            put(&mut grid, rows - y, x, VERTICAL);
        }
    }

    let origin_row = rows - level(first);
    let mut lines = Vec::with_capacity(grid.len().saturating_add(1));
    for (row, cells) in grid.iter().enumerate() {
        let magnitude = if rows > 0 {
            maximum - (row as f64 * interval / rows as f64)
        } else {
            minimum
        };
        let axis = if row == origin_row { AXIS_ORIGIN } else { AXIS };
        let mut line = format_label(magnitude, precision, margin);
        line.push(axis);
        line.extend(cells.iter());
        lines.push(line.trim_end().to_owned());
    }

    if let Some(caption) = options.caption.as_deref().filter(|caption| !caption.is_empty()) {
        let caption_len = caption.chars().count();
        let centering = columns.saturating_sub(caption_len) / 2;
        let indent = margin.saturating_add(1).saturating_add(centering);
        lines.push(format!("{}{}", " ".repeat(indent), caption));
    }

    lines.join("\n")
}

/// Linearly resample `data` to exactly `fit_count` points, keeping both ends.
///
/// `fit_count` is capped at [`MAX_WIDTH`].
#[must_use]
pub fn interpolate(data: &[f64], fit_count: usize) -> Vec<f64> {
    let fit_count = fit_count.min(MAX_WIDTH);
    let (Some(&first), Some(&last)) = (data.first(), data.last()) else {
        return Vec::new();
    };
    match fit_count {
        0 => return Vec::new(),
        1 => return vec![first],
        _ => {}
    }
    let spring_factor = data.len().saturating_sub(1) as f64 / fit_count.saturating_sub(1) as f64;
    let mut out = Vec::with_capacity(fit_count);
    out.push(first);
    for index in 1..fit_count.saturating_sub(1) {
        let spring = index as f64 * spring_factor;
        let before = spring.floor();
        let after = spring.ceil();
        let at_point = spring - before;
        let lower = data.get(before as usize).copied().unwrap_or(last);
        let upper = data.get(after as usize).copied().unwrap_or(last);
        out.push(lower + (upper - lower) * at_point);
    }
    out.push(last);
    out
}

fn label_precision(minimum: f64, maximum: f64, base: usize) -> usize {
    let largest = maximum.abs().max(minimum.abs());
    let log_maximum = if largest > 0.0 { largest.log10() } else { -1.0 };
    if log_maximum < 0.0 {
        let extra = if log_maximum.fract() == 0.0 {
            log_maximum.abs() - 1.0
        } else {
            log_maximum.abs()
        };
        base.saturating_add(extra as usize)
    } else if log_maximum > INTEGER_LABEL_LOG10 {
        0
    } else {
        base
    }
}

fn format_label(value: f64, precision: usize, width: usize) -> String {
    format!("{:>width$.precision$}", value, width = width, precision = precision)
}

fn put(grid: &mut [Vec<char>], row: usize, column: usize, glyph: char) {
    if let Some(cell) = grid.get_mut(row).and_then(|cells| cells.get_mut(column)) {
        *cell = glyph;
    }
}
