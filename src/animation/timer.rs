// SPDX-License-Identifier: MPL-2.0
//! Repeating timers on the tokio runtime.
//!
//! Each timer is a spawned task ticking on a [`tokio::time::Interval`].
//! Firings of one timer never overlap and arrive in increasing time order.
//! [`TimerHandle::cancel`] is synchronous: once it returns, the callback
//! does not run again, however far the clock is advanced. Dropping the
//! handle cancels the timer too.
//!
//! Spawning requires a tokio runtime context with the time driver enabled.

use crate::domain::animation::{
    AnimationConfig, FrameIndex, TimerId, MAX_TICK_INTERVAL, MIN_TICK_INTERVAL,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Shortest period a timer will tick at.
pub const MIN_PERIOD: Duration = MIN_TICK_INTERVAL;

/// Longest period a timer will tick at.
pub const MAX_PERIOD: Duration = MAX_TICK_INTERVAL;

/// Ids handed to timers started without a cycler.
static NEXT_STANDALONE_ID: AtomicU64 = AtomicU64::new(1);

/// Owner of one running timer.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    live: Arc<AtomicBool>,
    task: Option<AbortHandle>,
}

impl TimerHandle {
    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Returns true until the timer is cancelled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Stops future firings. Calling it again has no effect.
    pub fn cancel(&mut self) {
        self.live.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
            log::trace!("timer {} cancelled", self.id.value());
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Calls `on_fire(id)` every `period`, first after one full period.
pub fn every<F>(id: TimerId, period: Duration, mut on_fire: F) -> TimerHandle
where
    F: FnMut(TimerId) + Send + 'static,
{
    let period = period.clamp(MIN_PERIOD, MAX_PERIOD);
    let live = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&live);

    let task = tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if !flag.load(Ordering::Acquire) {
                break;
            }
            on_fire(id);
        }
    });

    log::trace!("timer {} spawned with period {:?}", id.value(), period);
    TimerHandle {
        id,
        live,
        task: Some(task.abort_handle()),
    }
}

/// Starts a frame timer without a cycler.
///
/// Every firing advances from `from` by one frame modulo the configured
/// frame count and passes the new index to `on_tick`.
pub fn start<F>(config: &AnimationConfig, from: FrameIndex, mut on_tick: F) -> TimerHandle
where
    F: FnMut(FrameIndex) + Send + 'static,
{
    let id = TimerId::new(NEXT_STANDALONE_ID.fetch_add(1, Ordering::Relaxed));
    let count = config.frame_count();
    let mut current = from;
    every(id, config.interval(), move |_| {
        current = current.next(count);
        on_tick(current);
    })
}

/// Cancels `handle`. Equivalent to [`TimerHandle::cancel`].
pub fn cancel(handle: &mut TimerHandle) {
    handle.cancel();
}
