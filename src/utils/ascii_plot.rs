use crate::prelude::Real;

/// ASCII plot of a sequence of non-negative values.
///
/// Each point becomes a column filled with '*'s up to the maximum height.
/// Returns the rendered plot; callers decide where to print it.
pub fn plot_vbars(values: &[Real], height: usize) -> String {
    if values.is_empty() || height == 0 {
        return String::new();
    }
    let max = values
        .iter()
        .cloned()
        .fold(Real::NEG_INFINITY, |x, y| x.max(y));
    if max <= 0.0 {
        return String::new();
    }
    let step = max / height as Real;

    let mut out = String::new();
    for i in 0..height + 1 {
        let h = (height - i) as Real * step;
        for &x in values {
            out.push(if x >= h { '*' } else { ' ' });
        }
        out.push('\n');
    }
    return out;
}
