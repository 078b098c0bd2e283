//! Per-agent behaviour rules.
//!
//! Each rule reads neighbour lists and writes only to the agent it is called
//! on. Effects on other agents (a predator fed by a kill, a prey fed by a
//! grass patch) are returned to the scheduler, which applies them.

pub mod grass;
pub mod predator;
pub mod prey;

pub use grass::GrassLogic;
pub use predator::PredatorLogic;
pub use prey::{PreyFate, PreyLogic};

use crate::config::WorldConfig;
use predprey_data::{Position, Steering, Velocity};

/// Applies steering, caps speed at 1.0, advances position by
/// `velocity * delta_time * displacement_scale` and clamps it into bounds.
pub(crate) fn integrate(
    position: &mut Position,
    velocity: &mut Velocity,
    steering: Steering,
    world: &WorldConfig,
    displacement_scale: f64,
) {
    velocity.vx += steering.x;
    velocity.vy += steering.y;

    let speed = velocity.speed();
    if speed > 1.0 {
        velocity.vx /= speed;
        velocity.vy /= speed;
    }

    position.x += velocity.vx * world.delta_time * displacement_scale;
    position.y += velocity.vy * world.delta_time * displacement_scale;

    position.x = world.clamp(position.x);
    position.y = world.clamp(position.y);
}

/// Repulsion along `(dx, dy)` scaled by `radius / distance`, i.e. a vector
/// of length `radius` pointing along the offset. Callers must exclude
/// `distance == 0`.
#[inline]
pub(crate) fn repulsion(radius: f64, dx: f64, dy: f64, distance: f64) -> Steering {
    debug_assert!(distance > 0.0);
    Steering::new((radius / distance) * dx, (radius / distance) * dy)
}
