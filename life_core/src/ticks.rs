use std::time::Duration;

use getset::CopyGetters;

use crate::prelude::*;

pub const DEFAULT_TICKS: u32 = 10;
pub const MIN_TICKS: u32 = 2;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Step sizes for changing the tick budget between runs
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TickAdjustment {
    IncreaseByTen,
    /// Refused unless the budget is at least 20
    DecreaseByTen,
    IncreaseByOne,
    /// Refused unless the budget is above the minimum of 2
    DecreaseByOne,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running {
        remaining: u32,
    },
}

/// Outcome of a pause between generations
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pace {
    Continue,
    Cancel,
}

/// Paces a run. Called once after every generation.
pub trait Pacer {
    fn pause(&mut self, interval: Duration) -> Pace;
}

/// Blocks the thread for the whole interval. Runs cannot be cancelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, interval: Duration) -> Pace {
        std::thread::sleep(interval);
        Pace::Continue
    }
}

/// Never waits. Counts how many pauses were requested.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay {
    pub pauses: usize,
}

impl Pacer for NoDelay {
    fn pause(&mut self, _interval: Duration) -> Pace {
        self.pauses += 1;
        Pace::Continue
    }
}

/// Counters visible to a generation while a run is in progress
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickStatus {
    pub remaining: u32,
    pub total: u64,
}

#[derive(Clone, CopyGetters, Debug)]
pub struct TickScheduler {
    /// Ticks per run
    #[get_copy = "pub"]
    configured: u32,
    /// Generations advanced since start or the last clear
    #[get_copy = "pub"]
    total: u64,
    #[get_copy = "pub"]
    interval: Duration,
    #[get_copy = "pub"]
    state: SchedulerState,
}

impl Default for TickScheduler {
    fn default() -> Self {
        TickScheduler::new(DEFAULT_TICKS, DEFAULT_TICK_INTERVAL)
    }
}

impl TickScheduler {
    pub fn new(configured: u32, interval: Duration) -> Self {
        let configured = if configured < MIN_TICKS {
            log::warn!("Tick budget {configured} is below the minimum, using {MIN_TICKS}");
            MIN_TICKS
        } else {
            configured
        };
        TickScheduler {
            configured,
            total: 0,
            interval,
            state: SchedulerState::Idle,
        }
    }

    /// Ticks left in the current run, or the budget for the next one when idle.
    pub fn remaining(&self) -> u32 {
        match self.state {
            SchedulerState::Idle => self.configured,
            SchedulerState::Running { remaining } => remaining,
        }
    }

    /// Returns whether the budget changed.
    pub fn adjust(&mut self, adjustment: TickAdjustment) -> bool {
        let adjusted = match adjustment {
            TickAdjustment::IncreaseByTen => self.configured.checked_add(10),
            TickAdjustment::DecreaseByTen if self.configured >= 20 => Some(self.configured - 10),
            TickAdjustment::IncreaseByOne => self.configured.checked_add(1),
            TickAdjustment::DecreaseByOne if self.configured > MIN_TICKS => {
                Some(self.configured - 1)
            },
            TickAdjustment::DecreaseByTen | TickAdjustment::DecreaseByOne => None,
        };
        match adjusted {
            Some(configured) => {
                self.configured = configured;
                true
            },
            None => false,
        }
    }

    pub fn reset_total(&mut self) {
        self.total = 0;
    }

    /// Runs `configured` generations. For each one `generation` is called with
    /// the counters as they stand before that tick is counted, then the pacer
    /// pauses for the interval. A cancelling pacer stops the run after the
    /// generation it interrupted has been counted.
    ///
    /// Returns the number of generations advanced. The budget itself is never
    /// consumed, so the next run gets the same number of ticks.
    pub fn run<P, F>(&mut self, pacer: &mut P, generation: F) -> Result<u32>
    where
        P: Pacer + ?Sized,
        F: FnMut(TickStatus) -> Result<()>,
    {
        self.state = SchedulerState::Running {
            remaining: self.configured,
        };
        log::debug!("Starting run of {} ticks", self.configured);
        let result = self.run_until_done(pacer, generation);
        self.state = SchedulerState::Idle;
        result
    }

    fn run_until_done<P, F>(&mut self, pacer: &mut P, mut generation: F) -> Result<u32>
    where
        P: Pacer + ?Sized,
        F: FnMut(TickStatus) -> Result<()>,
    {
        let mut advanced = 0;
        while let SchedulerState::Running { remaining } = self.state {
            if remaining == 0 {
                break;
            }
            generation(TickStatus {
                remaining,
                total: self.total,
            })?;
            let pace = pacer.pause(self.interval);
            self.state = SchedulerState::Running {
                remaining: remaining - 1,
            };
            self.total += 1;
            advanced += 1;
            if pace == Pace::Cancel {
                log::info!("Run cancelled with {} ticks remaining", remaining - 1);
                break;
            }
        }
        Ok(advanced)
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    struct CancelAfter(usize);

    impl Pacer for CancelAfter {
        fn pause(&mut self, _interval: Duration) -> Pace {
            self.0 = self.0.saturating_sub(1);
            if self.0 == 0 {
                Pace::Cancel
            } else {
                Pace::Continue
            }
        }
    }

    #[test]
    fn defaults() {
        let scheduler = TickScheduler::default();
        assert_eq!(scheduler.configured(), 10);
        assert_eq!(scheduler.total(), 0);
        assert_eq!(scheduler.interval(), Duration::from_millis(100));
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert_eq!(scheduler.remaining(), 10);
    }

    #[test]
    fn budget_below_minimum_is_raised() {
        assert_eq!(TickScheduler::new(0, Duration::ZERO).configured(), 2);
        assert_eq!(TickScheduler::new(1, Duration::ZERO).configured(), 2);
        assert_eq!(TickScheduler::new(2, Duration::ZERO).configured(), 2);
    }

    #[test]
    fn decrement_by_one_floors_at_two() {
        let mut scheduler = TickScheduler::new(2, Duration::ZERO);
        for _ in 0..3 {
            assert!(!scheduler.adjust(TickAdjustment::DecreaseByOne));
        }
        assert_eq!(scheduler.configured(), 2);

        let mut scheduler = TickScheduler::new(4, Duration::ZERO);
        for _ in 0..3 {
            scheduler.adjust(TickAdjustment::DecreaseByOne);
        }
        assert_eq!(scheduler.configured(), 2);
    }

    #[test]
    fn decrement_by_ten_needs_twenty() {
        let mut scheduler = TickScheduler::new(19, Duration::ZERO);
        assert!(!scheduler.adjust(TickAdjustment::DecreaseByTen));
        assert_eq!(scheduler.configured(), 19);
        assert!(scheduler.adjust(TickAdjustment::IncreaseByOne));
        assert!(scheduler.adjust(TickAdjustment::DecreaseByTen));
        assert_eq!(scheduler.configured(), 10);
        assert!(!scheduler.adjust(TickAdjustment::DecreaseByTen));
        assert_eq!(scheduler.configured(), 10);
    }

    #[test]
    fn increments() {
        let mut scheduler = TickScheduler::default();
        assert!(scheduler.adjust(TickAdjustment::IncreaseByTen));
        assert!(scheduler.adjust(TickAdjustment::IncreaseByOne));
        assert_eq!(scheduler.configured(), 21);
        let mut scheduler = TickScheduler::new(u32::MAX, Duration::ZERO);
        assert!(!scheduler.adjust(TickAdjustment::IncreaseByOne));
        assert_eq!(scheduler.configured(), u32::MAX);
    }

    #[test]
    fn run_counts_down_without_consuming_the_budget() {
        let mut scheduler = TickScheduler::new(3, Duration::from_secs(10));
        let mut pacer = NoDelay::default();
        let mut seen = Vec::new();
        let advanced = scheduler
            .run(&mut pacer, |status| {
                seen.push(status);
                Ok(())
            })
            .unwrap();
        assert_eq!(advanced, 3);
        assert_eq!(pacer.pauses, 3);
        assert_eq!(
            seen,
            vec![
                TickStatus {
                    remaining: 3,
                    total: 0
                },
                TickStatus {
                    remaining: 2,
                    total: 1
                },
                TickStatus {
                    remaining: 1,
                    total: 2
                },
            ]
        );
        assert_eq!(scheduler.configured(), 3);
        assert_eq!(scheduler.total(), 3);
        assert_eq!(scheduler.state(), SchedulerState::Idle);

        scheduler.run(&mut pacer, |_| Ok(())).unwrap();
        assert_eq!(scheduler.total(), 6);
    }

    #[test]
    fn nothing_remaining_advances_nothing() {
        let mut scheduler = TickScheduler::new(5, Duration::ZERO);
        scheduler.state = SchedulerState::Running { remaining: 0 };
        let mut calls = 0;
        let advanced = scheduler
            .run_until_done(&mut NoDelay::default(), |_| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(advanced, 0);
        assert_eq!(calls, 0);
        assert_eq!(scheduler.total(), 0);
    }

    #[test]
    fn cancelled_run_stops_early() {
        let mut scheduler = TickScheduler::new(10, Duration::ZERO);
        let advanced = scheduler.run(&mut CancelAfter(4), |_| Ok(())).unwrap();
        assert_eq!(advanced, 4);
        assert_eq!(scheduler.total(), 4);
        assert_eq!(scheduler.configured(), 10);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[test]
    fn failed_generation_returns_to_idle() {
        let mut scheduler = TickScheduler::new(5, Duration::ZERO);
        let mut calls = 0;
        let result = scheduler.run(&mut NoDelay::default(), |_| {
            calls += 1;
            if calls == 2 {
                Err(LifeError::Render(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "gone",
                )))
            } else {
                Ok(())
            }
        });
        assert!(matches!(result, Err(LifeError::Render(_))));
        assert_eq!(scheduler.total(), 1);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }
}
