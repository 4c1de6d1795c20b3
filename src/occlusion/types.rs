//! Options and tuning constants for the occlusion solver.
use crate::core::traits::Real;

/// Struct to hold options parameters when solving line occlusion.
#[derive(Debug, Clone)]
pub struct OcclusionOptions<T>
where
    T: Real,
{
    /// If true then segments from the same source multiline may occlude each other (subject to
    /// [OcclusionOptions::self_proximity_min_distance]). If false then a multiline never trims
    /// itself.
    pub handle_self_proximity: bool,
    /// Minimum circular index distance between two segments of the same multiline before they are
    /// allowed to occlude each other. Index distance is measured with wrap-around
    /// (`min(|i - j|, n - |i - j|)` for `n` segments in the multiline) so that closed shapes are
    /// handled. Keeping this above 1 preserves the continuity of curves approximated by many
    /// short segments.
    pub self_proximity_min_distance: usize,
    /// Fuzzy comparison epsilon used for determining if two positions are equal (segments sharing
    /// an endpoint within this epsilon are connected, never mutually occluding).
    pub pos_equal_eps: T,
}

impl<T> OcclusionOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            handle_self_proximity: true,
            self_proximity_min_distance: 3,
            pos_equal_eps: T::from_f64(1e-5),
        }
    }
}

impl<T> Default for OcclusionOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Empirically tuned constants carried over from the original solver. Their exact values were
// chosen visually, not derived; changing any of them changes visual output.

/// Crossings closer together than this multiple of the clearance distance merge into one group.
pub const GROUP_MERGE_FACTOR: f64 = 0.75;

/// Multiple of the clearance distance used for the stricter endpoint checks: the same-origin
/// short-segment drop test and the suppression of gap boundary points near a segment's own tip.
pub const ENDPOINT_CLEARANCE_FACTOR: f64 = 0.8;

/// Segments shorter than this multiple of the clearance distance are classified as short and
/// dropped whole (or kept whole) by the proximity stage instead of being sampled.
pub const SHORT_SEGMENT_FACTOR: f64 = 1.5;

/// Cap on the clearance gap half-length as a multiple of the clearance distance, bounding the
/// gap produced by very shallow crossings.
pub const MAX_GAP_FACTOR: f64 = 3.0;

/// Kept sub-ranges from proximity sampling are expanded by this multiple of the clearance
/// distance on each side to avoid visible notches.
pub const KEEP_BUFFER_FACTOR: f64 = 0.2;

/// A grouped crossing wins on priority only when its occluder z-index beats every other member
/// of the group by more than this amount.
pub const PRIORITY_WIN_GAP: f64 = 5.0;

/// Minimum crossing angle in radians; below this the lines are effectively parallel at the
/// crossing and no clearance gap is cut.
pub const MIN_CROSSING_ANGLE: f64 = 0.15;

/// Fragments shorter than this length (in drawing units) are discarded as noise.
pub const MIN_FRAGMENT_LENGTH: f64 = 1.0;

/// Maximum endpoint distance (in drawing units) for the reconstructor to join two fragments.
pub const JOIN_DISTANCE: f64 = 1.0;

/// Tolerance for the sum-of-distances collinearity test deciding whether a gap boundary point
/// still lies between a segment's endpoints.
pub const ON_SEGMENT_TOLERANCE: f64 = 0.1;
