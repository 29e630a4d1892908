//! Text rendering of the maxima distribution
//!
//! Turns the empirical distribution into an aligned terminal histogram with
//! one bar per observed maximum.

use shiftrisk_core::MaximaDistribution;

/// Render the distribution as a text histogram, `width` columns at the
/// tallest bar. Bars scale linearly; non-empty bins always get at least one
/// cell.
pub fn render_histogram(dist: &MaximaDistribution, width: usize) -> String {
    let peak = dist.counts.iter().copied().max().unwrap_or(0).max(1);

    let mut out = String::new();
    for (value, count) in dist.frequencies() {
        let bar_len = if count == 0 {
            0
        } else {
            (count * width).div_ceil(peak)
        };
        let bar = "█".repeat(bar_len);
        let pct = 100.0 * count as f64 / dist.runs as f64;
        out.push_str(&format!(
            "{value:>4} │ {bar:<width$} {count:>6}  {pct:>5.1}%\n"
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_one_line_per_value() {
        let dist = MaximaDistribution::from_maxima(&[2, 4, 2, 2, 5]).unwrap();
        let rendered = render_histogram(&dist, 10);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4, "one line per value in 2..=5");
        assert!(lines[0].starts_with("   2 │"));
        assert!(lines[3].starts_with("   5 │"));
    }

    #[test]
    fn test_histogram_scales_to_peak() {
        let dist = MaximaDistribution::from_maxima(&[1, 1, 1, 1, 2]).unwrap();
        let rendered = render_histogram(&dist, 8);
        let lines: Vec<&str> = rendered.lines().collect();

        let bar_cells = |line: &str| line.chars().filter(|&c| c == '█').count();
        assert_eq!(bar_cells(lines[0]), 8, "peak bin fills the full width");
        assert_eq!(bar_cells(lines[1]), 2, "quarter-height bin rounds up");
    }

    #[test]
    fn test_zero_count_bins_have_no_bar() {
        let dist = MaximaDistribution::from_maxima(&[1, 3]).unwrap();
        let rendered = render_histogram(&dist, 10);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(
            !lines[1].contains('█'),
            "the empty bin for value 2 must render no bar"
        );
    }
}
