// field/ - Leeway model and its evaluation over a grid

mod leeway;
mod model;

pub use leeway::LeewayField;
pub use model::{KNOTS_PER_METRE_PER_SECOND, LeewayModel, to_degrees, to_knots};
