//! Fixed-precision rendering of display values.
//!
//! Every cell is rounded to `precision` fractional digits with trailing zeros
//! blanked out, so at precision 3 the array `[1, 2, 3]` prints as
//! `[1.   2.   3.  ]`. Cells share a single layout across an array or grid:
//! the integer part is right-aligned, the fraction left-aligned and padded to
//! the longest fraction (at least `precision - 1` columns). Scientific notation
//! is never used and a value that rounds to zero prints as positive zero.
use crate::config::PrintOptions;
use crate::math::{Array1, Array2};

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Finite { int: String, frac: String },
    NonFinite(&'static str),
}

impl Cell {
    fn new(value: f64, precision: usize) -> Self {
        if value.is_nan() {
            return Cell::NonFinite("nan");
        }
        if value.is_infinite() {
            return Cell::NonFinite(if value > 0.0 { "inf" } else { "-inf" });
        }

        let mut text = format!("{:.*}", precision, value);
        if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
            text.remove(0);
        }
        let (int, frac) = match text.split_once('.') {
            Some((int, frac)) => (int.to_string(), frac.trim_end_matches('0').to_string()),
            None => (text, String::new()),
        };
        Cell::Finite { int, frac }
    }

    fn int_width(&self) -> usize {
        match self {
            Cell::Finite { int, .. } => int.len(),
            Cell::NonFinite(_) => 0,
        }
    }

    fn frac_width(&self) -> usize {
        match self {
            Cell::Finite { frac, .. } => frac.len(),
            Cell::NonFinite(_) => 0,
        }
    }

    fn render(&self, layout: &Layout) -> String {
        match self {
            Cell::Finite { int, frac } => format!(
                "{:>iw$}.{:<fw$}",
                int,
                frac,
                iw = layout.int_width,
                fw = layout.frac_width
            ),
            Cell::NonFinite(text) => format!("{:>w$}", text, w = layout.width()),
        }
    }
}

struct Layout {
    int_width: usize,
    frac_width: usize,
}

impl Layout {
    fn fit(cells: &[Cell], precision: usize) -> Self {
        let mut layout = Self {
            int_width: cells.iter().map(Cell::int_width).max().unwrap_or(0),
            frac_width: cells
                .iter()
                .map(Cell::frac_width)
                .max()
                .unwrap_or(0)
                .max(precision.saturating_sub(1)),
        };
        let special = cells
            .iter()
            .filter_map(|c| match c {
                Cell::NonFinite(text) => Some(text.len()),
                Cell::Finite { .. } => None,
            })
            .max()
            .unwrap_or(0);
        if layout.width() < special {
            layout.int_width += special - layout.width();
        }
        layout
    }

    fn width(&self) -> usize {
        self.int_width + 1 + self.frac_width
    }
}

fn render_cells(values: &[f64], options: &PrintOptions) -> Vec<String> {
    let cells: Vec<Cell> = values
        .iter()
        .map(|v| Cell::new(*v, options.precision))
        .collect();
    let layout = Layout::fit(&cells, options.precision);
    cells.iter().map(|c| c.render(&layout)).collect()
}

/// Formats a single value on its own, e.g. `-0.25`.
pub fn format_value(value: f64, options: &PrintOptions) -> String {
    render_cells(&[value], options).remove(0)
}

/// Formats a vector as `[a b c]`.
pub fn format_array(array: &Array1<f64>, options: &PrintOptions) -> String {
    format!("[{}]", render_cells(array.as_slice(), options).join(" "))
}

/// Formats a matrix as `[[a b]\n [c d]]`, one line per row.
pub fn format_grid(grid: &Array2<f64>, options: &PrintOptions) -> String {
    let cells = render_cells(grid.as_slice(), options);
    let (rows, cols) = grid.shape();
    let lines: Vec<String> = (0..rows)
        .map(|row| format!("[{}]", cells[row * cols..(row + 1) * cols].join(" ")))
        .collect();
    format!("[{}]", lines.join("\n "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> PrintOptions {
        PrintOptions::default()
    }

    #[test]
    fn whole_numbers_keep_padding() {
        let arr = Array1::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(format_array(&arr, &opts()), "[1.   2.   3.  ]");
    }

    #[test]
    fn mixed_widths_align() {
        let arr = Array1::from_vec(vec![1.5, -20.25, 0.125]);
        assert_eq!(format_array(&arr, &opts()), "[  1.5   -20.25    0.125]");
    }

    #[test]
    fn tiny_negative_is_zero() {
        assert_eq!(format_value(-0.0000004, &opts()), "0.  ");
        assert_eq!(format_value(-0.0, &opts()), "0.  ");
    }

    #[test]
    fn large_values_stay_positional() {
        assert_eq!(format_value(1.0e9, &opts()), "1000000000.  ");
    }

    #[test]
    fn non_finite_values() {
        let arr = Array1::from_vec(vec![f64::NAN, 1.0]);
        assert_eq!(format_array(&arr, &opts()), "[ nan 1.  ]");
    }
}
