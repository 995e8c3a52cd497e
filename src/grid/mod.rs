// grid/ - Coordinate sequences and the meshgrid built from them
//
// Pure construction, no state.

mod axis;
mod mesh;

pub use axis::{AxisSpec, linspace};
pub use mesh::CoordinateGrid;
