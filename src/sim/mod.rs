//! Match simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the DOM or
//! the GPU:
//! - Fixed timestep only
//! - Bodies are reached through the `PhysicsBody` port
//! - No rendering or platform dependencies beyond `Viewport`

pub mod arcade;
pub mod body;
pub mod goal;
pub mod session;
pub mod tick;

pub use arcade::{collide_world_bounds, integrate, overlaps, velocity_toward};
pub use body::{Aabb, ArcadeBody, PhysicsBody};
pub use goal::{next_goal_velocity, oscillation_band, step_goal};
pub use session::{BallState, MatchSession, SessionEvent};
pub use tick::{FrameClock, TickInput, tick};
