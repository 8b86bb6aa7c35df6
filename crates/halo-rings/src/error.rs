use std::fmt;

/// Precondition violation reported by the ring entry points.
///
/// Ring inputs are defensively clamped wherever a clamp is meaningful
/// (negative completion renders as zero, interpolation parameters clamp to
/// [0, 1]); these variants cover the geometric preconditions that have no
/// meaningful clamp and fail fast instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RingError {
    /// Bounds width and height differ; rings render into squares only.
    NonSquareBounds { width: f32, height: f32 },
    /// Ring thickness must be finite and positive.
    InvalidThickness { thickness: f32 },
    /// The stroke centerline radius came out non-positive for these bounds.
    DegenerateRadius { radius: f32 },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::NonSquareBounds { width, height } => {
                write!(f, "ring bounds must be square, got {width}×{height}")
            }
            RingError::InvalidThickness { thickness } => {
                write!(f, "ring thickness must be finite and positive, got {thickness}")
            }
            RingError::DegenerateRadius { radius } => {
                write!(f, "ring radius {radius} is not positive; bounds too small for thickness")
            }
        }
    }
}

impl std::error::Error for RingError {}
