pub mod compartment;
pub mod params;
pub mod variants;

pub use compartment::*;
pub use params::*;
pub use variants::*;
