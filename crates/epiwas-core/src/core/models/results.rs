/// The significance verdict for one amino-acid position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionResult {
    pub position: i64,
    /// First case value observed at this position, or 0 when there was no evidence.
    pub representative_value: f64,
    pub z_score: f64,
    pub p_value: f64,
}

impl PositionResult {
    /// The neutral result for a position lacking case or control data.
    pub fn no_evidence(position: i64) -> Self {
        Self {
            position,
            representative_value: 0.0,
            z_score: 0.0,
            p_value: 1.0,
        }
    }
}
