//! Text histogram rendering
//!
//! A generic proportional bar chart over parallel label/value sequences,
//! rendered to a string so callers decide where it goes.

/// Render a histogram of `values` keyed by `labels`
///
/// One row per entry: the label right-aligned to the widest label, a bar of
/// `*` scaled against the maximum value and capped at `width`, and the value
/// to two decimals. Any positive value gets at least one star so small
/// entries stay visible.
///
/// Labels and values are parallel sequences; extra entries in the longer one
/// are ignored.
///
/// # Examples
/// ```
/// use anagram_toolkit::output::histogram::render;
///
/// let chart = render(&[2, 3], &[4.0, 2.0], 10);
/// assert_eq!(chart, "2 | ********** 4.00\n3 | ***** 2.00\n");
/// ```
#[must_use]
pub fn render(labels: &[usize], values: &[f64], width: usize) -> String {
    let field_width = labels
        .iter()
        .map(|label| label.to_string().len())
        .max()
        .unwrap_or(0);
    let max = values.iter().copied().fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (label, &value) in labels.iter().zip(values) {
        let mut stars = if max > 0.0 {
            ((value / max) * width as f64) as usize
        } else {
            0
        };
        stars = stars.min(width);
        if value > 0.0 && stars == 0 {
            stars = 1;
        }

        out.push_str(&format!(
            "{label:>field_width$} | {} {value:.2}\n",
            "*".repeat(stars)
        ));
    }
    out
}
