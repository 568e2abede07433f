//! Mountain-car dynamics.
use super::{Dynamics, Transition};

const MIN_POSITION: f64 = -1.2;
const MAX_POSITION: f64 = 0.6;
const MAX_SPEED: f64 = 0.07;
const GOAL_POSITION: f64 = 0.5;
const GOAL_VELOCITY: f64 = 0.0;
const FORCE: f64 = 0.001;
const GRAVITY: f64 = 0.0025;

/// An underpowered car in a valley that has to build up momentum to reach
/// the flag on the right hill. Every step costs a reward of -1.
pub(crate) struct MountainCar {
    /// `[position, velocity]`.
    state: [f64; 2],
}

impl MountainCar {
    pub(crate) fn new() -> Self {
        Self { state: [0.0; 2] }
    }

    fn obs(&self) -> Vec<f32> {
        self.state.iter().map(|v| *v as f32).collect()
    }
}

impl Dynamics for MountainCar {
    fn reset(&mut self, rng: &mut fastrand::Rng) -> Vec<f32> {
        self.state = [rng.f64() * 0.2 - 0.6, 0.0];
        self.obs()
    }

    fn step(&mut self, act: u8) -> Transition {
        let [mut position, mut velocity] = self.state;

        velocity += (act as f64 - 1.0) * FORCE + (3.0 * position).cos() * (-GRAVITY);
        velocity = velocity.clamp(-MAX_SPEED, MAX_SPEED);
        position += velocity;
        position = position.clamp(MIN_POSITION, MAX_POSITION);
        // The left wall is inelastic.
        if position == MIN_POSITION && velocity < 0.0 {
            velocity = 0.0;
        }
        self.state = [position, velocity];

        Transition {
            obs: self.obs(),
            reward: -1.0,
            is_terminated: position >= GOAL_POSITION && velocity >= GOAL_VELOCITY,
        }
    }

    fn n_acts(&self) -> u8 {
        3
    }

    fn frame(&self) -> String {
        const COLS: usize = 61;
        let position = self.state[0];

        let col_of = |p: f64| {
            let col = (((p - MIN_POSITION) / (MAX_POSITION - MIN_POSITION)) * (COLS - 1) as f64)
                .round()
                .max(0.0) as usize;
            col.min(COLS - 1)
        };

        let mut row = vec!['_'; COLS];
        row[col_of(GOAL_POSITION)] = '⚑';
        row[col_of(position)] = 'O';

        format!(
            "{}\nposition = {:+.3}  velocity = {:+.4}",
            row.into_iter().collect::<String>(),
            self.state[0],
            self.state[1],
        )
    }
}
