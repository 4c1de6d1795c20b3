//! 2D line-occlusion solver for layered line drawings.
//!
//! Given a collection of polylines ("multilines") drawn with an implicit depth/priority order,
//! [solve] removes or shortens the portions of each line that pass too close to, or behind, a
//! line with higher drawing priority. The result is the visual effect of foreground strokes
//! occluding background strokes, as on a pen plotter or layered line drawing.
//!
//! The solver is a pure function over in-memory data: no rendering, no I/O, no state held
//! between calls. Callers are responsible for drawing the returned polylines.
//!
//! # Example
//!
//! ```
//! use line_occlusion::{solve, MultilinePoint, OcclusionOptions};
//!
//! // horizontal line drawn first (in front), vertical line drawn second (behind)
//! let front = vec![MultilinePoint::from((0.0, 0.0)), MultilinePoint::from((100.0, 0.0))];
//! let back = vec![MultilinePoint::from((50.0, -50.0)), MultilinePoint::from((50.0, 50.0))];
//!
//! let result = solve(&[front, back], 10.0, &OcclusionOptions::new());
//!
//! // the back line is split into two visible pieces around the crossing,
//! // the front line passes through untouched
//! assert_eq!(result.len(), 3);
//! ```

pub mod core;
pub mod occlusion;

pub use crate::occlusion::{solve, MultilinePoint, OcclusionOptions};
