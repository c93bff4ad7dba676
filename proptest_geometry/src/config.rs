//! Default size floors and generation limits.

/// Minimum vertex count of a polyline.
pub const MIN_POLYLINE_SIZE: usize = 2;

/// Minimum vertex count of any contour.
pub const MIN_CONTOUR_SIZE: usize = 3;

/// Minimum vertex count of a concave contour (a triangle is always convex).
pub const MIN_CONCAVE_CONTOUR_SIZE: usize = 4;

/// Vertex count of a triangular contour.
pub const TRIANGULAR_CONTOUR_SIZE: usize = 3;

/// Vertex count of a rectangular contour.
pub const RECTANGULAR_CONTOUR_SIZE: usize = 4;

/// Minimum number of elements in multi-geometries and hole lists.
pub const MIN_MULTI_SIZE: usize = 0;

/// Number of extra elements above the minimum drawn when no maximum size is given.
pub const DEFAULT_SIZE_SPAN: usize = 8;

/// Number of candidate draws a single generation may make before giving up.
pub const DEFAULT_RETRY_BUDGET: usize = 100;

/// Number of raw candidate points drawn per requested distinct point.
pub const CANDIDATE_OVERSAMPLING: usize = 2;

/// Extra raw candidate points drawn on top of [CANDIDATE_OVERSAMPLING].
pub const CANDIDATE_SLACK: usize = 8;

/// Domains holding at most this many points per requested distinct point are enumerated and
/// shuffled instead of sampled.
pub const DENSE_DOMAIN_FACTOR: usize = 4;

/// Number of drawn indexes used to pick edges during indentation.
pub const INDENT_PICKS: usize = 8;
