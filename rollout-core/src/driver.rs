//! Episode driver.
//!
//! This module provides [`EpisodeDriver`], which runs a single episode of a
//! fixed number of uniformly random steps against an environment and reports
//! the transition of the last step.
mod config;

use crate::{error::RolloutError, Env, Step};
use anyhow::Result;
use log::{info, trace};
use std::ops::{Deref, DerefMut};

pub use config::EpisodeDriverConfig;

/// Closes the wrapped environment when dropped.
///
/// The guard is taken at the top of [`EpisodeDriver::run`], so `close` runs
/// exactly once whichever way the step loop exits.
struct CloseGuard<E: Env>(E);

impl<E: Env> Deref for CloseGuard<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.0
    }
}

impl<E: Env> DerefMut for CloseGuard<E> {
    fn deref_mut(&mut self) -> &mut E {
        &mut self.0
    }
}

impl<E: Env> Drop for CloseGuard<E> {
    fn drop(&mut self) {
        self.0.close();
    }
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Runs a fixed-length episode with uniformly random actions.
///
/// One call of [`run`](Self::run) drives a single episode: the environment
/// is reset once, then stepped [`max_steps`](EpisodeDriverConfig::max_steps)
/// times with actions sampled from its action space, rendering after every
/// step. The step budget is independent of episode completion: the loop
/// does not stop or reset when a step reports that the episode is done.
/// What stepping past termination means is defined by the environment.
///
/// ```mermaid
/// graph LR
///     Uninitialized --> Reset
///     Reset --> Stepping
///     Stepping --> Stepping
///     Stepping --> Reported
///     Reported --> Closed
/// ```
pub struct EpisodeDriver {
    config: EpisodeDriverConfig,
}

impl EpisodeDriver {
    /// Constructs an [`EpisodeDriver`].
    pub fn new(config: EpisodeDriverConfig) -> Self {
        Self { config }
    }

    /// Runs one episode and returns the transition of the last step.
    ///
    /// The environment must be constructed and not yet reset. It is closed
    /// on every exit path, including an error propagated from one of its
    /// `reset`/`step`/`render` calls; such errors abort the run without
    /// retry.
    ///
    /// A step budget of zero is rejected with
    /// [`RolloutError::EmptyStepBudget`].
    pub fn run<E: Env>(&mut self, env: E) -> Result<Step<E>> {
        let mut env = CloseGuard(env);

        let _ = env.reset()?;
        info!("episode started, step budget = {}", self.config.max_steps);

        let mut last: Option<Step<E>> = None;
        for count in 0..self.config.max_steps {
            trace!("step {}", count);
            let act = env.sample_action();
            let step = env.step(&act)?;
            env.render()?;
            last = Some(step);
        }

        let last = last.ok_or(RolloutError::EmptyStepBudget)?;
        info!(
            "episode finished, reward = {}, done = {}",
            last.reward,
            last.is_done()
        );
        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Act, Obs};
    use anyhow::anyhow;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Debug)]
    struct StubObs(usize);

    impl Obs for StubObs {}

    #[derive(Clone, Debug)]
    struct StubAct(u8);

    impl Act for StubAct {}

    #[derive(Default)]
    struct CallLog {
        events: Vec<&'static str>,
        acts: Vec<u8>,
    }

    impl CallLog {
        fn count(&self, event: &str) -> usize {
            self.events.iter().filter(|e| **e == event).count()
        }
    }

    /// Emits a scripted sequence of transitions and records every call.
    struct StubEnv {
        log: Rc<RefCell<CallLog>>,
        rewards: Vec<f32>,
        dones: Vec<bool>,
        fail_on_step: Option<usize>,
        next_act: u8,
        count: usize,
    }

    impl StubEnv {
        fn new(log: &Rc<RefCell<CallLog>>, rewards: Vec<f32>, dones: Vec<bool>) -> Self {
            Self {
                log: Rc::clone(log),
                rewards,
                dones,
                fail_on_step: None,
                next_act: 7,
                count: 0,
            }
        }
    }

    impl Env for StubEnv {
        type Config = ();
        type Obs = StubObs;
        type Act = StubAct;
        type Info = ();

        fn build(_config: &Self::Config, _seed: i64) -> Result<Self> {
            unimplemented!();
        }

        fn reset(&mut self) -> Result<StubObs> {
            self.log.borrow_mut().events.push("reset");
            self.count = 0;
            Ok(StubObs(0))
        }

        fn step(&mut self, a: &StubAct) -> Result<Step<Self>> {
            {
                let mut log = self.log.borrow_mut();
                log.events.push("step");
                log.acts.push(a.0);
            }
            self.count += 1;
            if self.fail_on_step == Some(self.count) {
                return Err(anyhow!("scripted step failure"));
            }
            Ok(Step::new(
                StubObs(self.count),
                a.clone(),
                self.rewards[self.count - 1],
                self.dones[self.count - 1],
                false,
                (),
            ))
        }

        fn sample_action(&mut self) -> StubAct {
            self.log.borrow_mut().events.push("sample");
            StubAct(self.next_act)
        }

        fn render(&mut self) -> Result<()> {
            self.log.borrow_mut().events.push("render");
            Ok(())
        }

        fn close(&mut self) {
            self.log.borrow_mut().events.push("close");
        }
    }

    #[test]
    fn runs_the_full_step_budget_despite_done() -> Result<()> {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let env = StubEnv::new(&log, vec![1.0, 1.0, 1.0], vec![false, true, false]);

        let mut driver = EpisodeDriver::new(EpisodeDriverConfig::default().max_steps(3));
        let step = driver.run(env)?;

        let log = log.borrow();
        assert_eq!(log.count("reset"), 1);
        assert_eq!(log.count("step"), 3);
        assert_eq!(log.count("render"), 3);
        assert_eq!(log.count("close"), 1);
        assert!(!step.is_done());
        Ok(())
    }

    #[test]
    fn reports_the_last_transition() -> Result<()> {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let env = StubEnv::new(&log, vec![1.0, 2.0, 3.0], vec![false, true, false]);

        let mut driver = EpisodeDriver::new(EpisodeDriverConfig::default().max_steps(3));
        let step = driver.run(env)?;

        assert_eq!(step.reward, 3.0);
        assert_eq!(step.obs.0, 3);
        assert!(!step.is_terminated);
        Ok(())
    }

    #[test]
    fn calls_each_capability_in_order() -> Result<()> {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let env = StubEnv::new(&log, vec![0.0, 0.0], vec![false, false]);

        let mut driver = EpisodeDriver::new(EpisodeDriverConfig::default().max_steps(2));
        driver.run(env)?;

        assert_eq!(
            log.borrow().events,
            vec![
                "reset", "sample", "step", "render", "sample", "step", "render", "close",
            ]
        );
        Ok(())
    }

    #[test]
    fn samples_an_action_every_iteration() -> Result<()> {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let mut env = StubEnv::new(&log, vec![0.0; 4], vec![false; 4]);
        env.next_act = 1;

        let mut driver = EpisodeDriver::new(EpisodeDriverConfig::default().max_steps(4));
        driver.run(env)?;

        let log = log.borrow();
        assert_eq!(log.count("sample"), 4);
        assert_eq!(log.acts, vec![1, 1, 1, 1]);
        Ok(())
    }

    #[test]
    fn step_failure_propagates_and_still_closes() {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let mut env = StubEnv::new(&log, vec![0.0; 5], vec![false; 5]);
        env.fail_on_step = Some(2);

        let mut driver = EpisodeDriver::new(EpisodeDriverConfig::default().max_steps(5));
        let result = driver.run(env);

        assert!(result.is_err());
        let log = log.borrow();
        assert_eq!(log.count("step"), 2);
        assert_eq!(log.count("render"), 1);
        assert_eq!(log.count("close"), 1);
    }

    #[test]
    fn empty_step_budget_is_an_error() {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let env = StubEnv::new(&log, vec![], vec![]);

        let mut driver = EpisodeDriver::new(EpisodeDriverConfig::default().max_steps(0));
        let result = driver.run(env);

        assert!(matches!(
            result.unwrap_err().downcast_ref::<RolloutError>(),
            Some(RolloutError::EmptyStepBudget)
        ));
        assert_eq!(log.borrow().count("close"), 1);
    }
}
