use serde::{Deserialize, Serialize};

/// Location of an agent inside the square world.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise offset `self - other` together with its length.
    #[must_use]
    pub fn offset_from(&self, other: &Position) -> (f64, f64, f64) {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx, dy, (dx * dx + dy * dy).sqrt())
    }
}

/// Velocity of a mobile agent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    #[must_use]
    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

/// Per-step steering accumulator. Summed influences are folded into the
/// velocity on `move` and cleared again by the next avoidance pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Steering {
    pub x: f64,
    pub y: f64,
}

impl Steering {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    pub fn add(&mut self, other: Steering) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// The two mobile species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Prey,
    Predator,
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Prey => write!(f, "prey"),
            AgentKind::Predator => write!(f, "predator"),
        }
    }
}

/// A grazing agent that flocks and flees predators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prey {
    pub id: u64,
    pub position: Position,
    pub velocity: Velocity,
    pub steering: Steering,
    pub life: f64,
}

/// A hunting agent that pursues the nearest prey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predator {
    pub id: u64,
    pub position: Position,
    pub velocity: Velocity,
    pub steering: Steering,
    pub life: f64,
}

/// A fixed grass patch. Grass is never created or destroyed after
/// initialisation; only `available` and `dead_cycles` change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grass {
    pub position: Position,
    pub available: bool,
    pub dead_cycles: u32,
}

impl Grass {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            available: true,
            dead_cycles: 0,
        }
    }
}

/// Attributes sampled for a newborn before it is assigned an id and a
/// population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offspring {
    pub position: Position,
    pub velocity: Velocity,
    pub life: f64,
}
