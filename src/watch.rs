//! Periodic recomputation against a moving "now".
//!
//! Every tick reads the clock afresh and rebuilds the whole profile; there
//! is no state carried between ticks beyond the tick counter.

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::profile::{AgeProfile, ProfileError};

pub struct Refresher<C> {
    birth: NaiveDateTime,
    period: Duration,
    clock: C,
}

impl<C> Refresher<C>
where
    C: Fn() -> NaiveDateTime,
{
    pub fn new(birth: NaiveDateTime, period: Duration, clock: C) -> Self {
        Self {
            birth,
            period,
            clock,
        }
    }

    /// Runs until `shutdown` resolves or `max_ticks` ticks have fired.
    ///
    /// The first tick fires immediately. Returns the number of ticks
    /// delivered to `on_tick`.
    pub async fn run<F, S>(&self, max_ticks: Option<u64>, shutdown: S, mut on_tick: F) -> u64
    where
        F: FnMut(Result<AgeProfile, ProfileError>),
        S: Future<Output = ()>,
    {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        info!(period_secs = self.period.as_secs(), "refreshing age profile");

        let mut ticks = 0u64;
        loop {
            if max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }

            tokio::select! {
                _ = &mut shutdown => {
                    debug!(ticks, "refresh stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let reference = (self.clock)();
                    on_tick(AgeProfile::compute(self.birth, reference));
                    ticks += 1;
                }
            }
        }

        ticks
    }
}
