//! Cart-pole dynamics.
use super::{Dynamics, Transition};
use log::warn;
use std::f64::consts::PI;

const GRAVITY: f64 = 9.8;
const MASS_CART: f64 = 1.0;
const MASS_POLE: f64 = 0.1;
const TOTAL_MASS: f64 = MASS_CART + MASS_POLE;
// Half the pole length.
const LENGTH: f64 = 0.5;
const POLE_MASS_LENGTH: f64 = MASS_POLE * LENGTH;
const FORCE_MAG: f64 = 10.0;
// Seconds between state updates.
const TAU: f64 = 0.02;
const THETA_THRESHOLD: f64 = 12.0 * 2.0 * PI / 360.0;
const X_THRESHOLD: f64 = 2.4;

/// A pole balanced on a cart moving along a frictionless track.
///
/// The episode terminates when the cart leaves the track section or the
/// pole tilts more than 12 degrees off vertical. Stepping past termination
/// is allowed; the step after the terminating one warns once and the reward
/// drops to zero from then on.
pub(crate) struct CartPole {
    /// `[x, x_dot, theta, theta_dot]`.
    state: [f64; 4],
    steps_beyond_terminated: Option<usize>,
}

impl CartPole {
    pub(crate) fn new() -> Self {
        Self {
            state: [0.0; 4],
            steps_beyond_terminated: None,
        }
    }

    fn obs(&self) -> Vec<f32> {
        self.state.iter().map(|v| *v as f32).collect()
    }
}

impl Dynamics for CartPole {
    fn reset(&mut self, rng: &mut fastrand::Rng) -> Vec<f32> {
        for v in self.state.iter_mut() {
            *v = rng.f64() * 0.1 - 0.05;
        }
        self.steps_beyond_terminated = None;
        self.obs()
    }

    fn step(&mut self, act: u8) -> Transition {
        let [x, x_dot, theta, theta_dot] = self.state;
        let force = if act == 1 { FORCE_MAG } else { -FORCE_MAG };
        let cos_theta = theta.cos();
        let sin_theta = theta.sin();

        let temp = (force + POLE_MASS_LENGTH * theta_dot * theta_dot * sin_theta) / TOTAL_MASS;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (LENGTH * (4.0 / 3.0 - MASS_POLE * cos_theta * cos_theta / TOTAL_MASS));
        let x_acc = temp - POLE_MASS_LENGTH * theta_acc * cos_theta / TOTAL_MASS;

        self.state = [
            x + TAU * x_dot,
            x_dot + TAU * x_acc,
            theta + TAU * theta_dot,
            theta_dot + TAU * theta_acc,
        ];

        let is_terminated = self.state[0] < -X_THRESHOLD
            || self.state[0] > X_THRESHOLD
            || self.state[2] < -THETA_THRESHOLD
            || self.state[2] > THETA_THRESHOLD;

        let reward = if !is_terminated {
            1.0
        } else {
            match self.steps_beyond_terminated {
                None => {
                    // The pole just fell.
                    self.steps_beyond_terminated = Some(0);
                    1.0
                }
                Some(n) => {
                    if n == 0 {
                        warn!("step() called on a terminated episode; reward is zero from now on");
                    }
                    self.steps_beyond_terminated = Some(n + 1);
                    0.0
                }
            }
        };

        Transition {
            obs: self.obs(),
            reward,
            is_terminated,
        }
    }

    fn n_acts(&self) -> u8 {
        2
    }

    fn frame(&self) -> String {
        const COLS: usize = 61;
        let x = self.state[0];
        let theta = self.state[2];

        let col = (((x + X_THRESHOLD) / (2.0 * X_THRESHOLD)) * (COLS - 1) as f64)
            .round()
            .max(0.0) as usize;
        let col = col.min(COLS - 1);

        let tilt = if theta > 0.05 {
            '/'
        } else if theta < -0.05 {
            '\\'
        } else {
            '|'
        };
        let mut pole_row = vec![' '; COLS];
        pole_row[col] = tilt;

        let mut cart_row = vec!['-'; COLS];
        let lo = col.saturating_sub(1);
        let hi = (col + 1).min(COLS - 1);
        for c in cart_row.iter_mut().take(hi + 1).skip(lo) {
            *c = '█';
        }

        format!(
            "{}\n{}\nx = {:+.3}  theta = {:+.3} rad",
            pole_row.into_iter().collect::<String>(),
            cart_row.into_iter().collect::<String>(),
            x,
            theta,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_three_rows_and_shows_the_cart() {
        let mut dynamics = CartPole::new();
        let mut rng = fastrand::Rng::with_seed(1);
        dynamics.reset(&mut rng);

        let frame = dynamics.frame();
        assert_eq!(frame.lines().count(), 3);
        assert!(frame.contains('█'));
    }

    #[test]
    fn an_upright_pole_stays_up_for_a_few_steps() {
        let mut dynamics = CartPole::new();
        // Perfectly upright and at rest; alternating pushes keep it balanced
        // for a while.
        for (ix, act) in [0u8, 1, 0, 1, 0, 1].iter().enumerate() {
            let t = dynamics.step(*act);
            assert!(!t.is_terminated, "terminated at step {}", ix);
            assert_eq!(t.reward, 1.0);
        }
    }
}
