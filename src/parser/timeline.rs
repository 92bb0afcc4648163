// Absolute timestamps -> zero-based elapsed seconds

/// Subtracts the first timestamp from every timestamp. Empty in, empty out.
/// Order is preserved; a non-monotonic input yields a non-monotonic timeline.
pub fn normalize(timestamps: &[f64]) -> Vec<f64> {
    let Some(&begin) = timestamps.first() else {
        return Vec::new();
    };
    timestamps.iter().map(|t| t - begin).collect()
}
