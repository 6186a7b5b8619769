pub mod breakpoint;
pub mod constants;
pub mod form;
pub mod geometry;
pub mod state;

pub use breakpoint::*;
pub use constants::*;
pub use form::*;
pub use geometry::*;
pub use state::*;
