//! Axis-aligned bounds for position accessors

use crate::error::BuildError;

/// Compute the component-wise minimum and maximum corner of a position list.
///
/// Empty input is rejected rather than yielding infinite sentinels, since
/// the result is written verbatim into the POSITION accessor.
pub fn compute_bounds(positions: &[[f32; 3]]) -> Result<([f32; 3], [f32; 3]), BuildError> {
    if positions.is_empty() {
        return Err(BuildError::InvalidInput(
            "cannot compute bounds of an empty position list".into(),
        ));
    }

    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    Ok((min, max))
}
