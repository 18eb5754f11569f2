pub use crate::epidemic::{Compartment, Config, ModelKind, Params};
pub use crate::geometry::Rect;
pub use crate::render::{compartment_color, Color, RecordingSurface, Surface, Viewport};
pub use crate::sim::{
    Agent, AgentSimulation, CompartmentCounts, EpicurveTracker, IsolationZones, Runner,
    SPREAD_RADIUS,
};

/// Basic representation of time. This crate measures time in simulation
/// ticks; countdown timers may run below zero while a guarded transition
/// keeps failing its draw.
pub type Time = i32;

/// Base Real type used by this crate. Uses an alias to easily change
/// precision if necessary.
pub type Real = f64;
