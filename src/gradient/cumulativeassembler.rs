/// Turns segment integrals into function values anchored at `initial`.
///
/// The result has one more entry than `segment_integrals`: entry `k` is
/// `initial` plus the sum of the first `k` integrals, accumulated in
/// ascending order.
pub fn assemble(initial: f64, segment_integrals: &[f64]) -> Vec<f64> {
    let mut values = Vec::with_capacity(segment_integrals.len() + 1);
    values.push(initial);

    let mut running_sum = 0.0;
    for integral in segment_integrals {
        running_sum += integral;
        values.push(initial + running_sum);
    }
    values
}
