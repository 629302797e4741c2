// SPDX-License-Identifier: MPL-2.0
//! Timer-driven frame cycling.
//!
//! A [`FrameCycler`] owns the frame index of one animation and the identity
//! of the single timer allowed to advance it. The timer itself is provided
//! by a driver: the Iced runtime through [`FrameCycler::subscription`], or a
//! tokio task from [`crate::animation::timer`] in headless mode. Drivers
//! report every firing through [`FrameCycler::tick`] with the [`TimerId`]
//! they were started with, so a firing from a timer that was cancelled in
//! the meantime never moves the index.
//!
//! Two variants are built from the same type:
//! - **pausable**: the caller owns an `is_playing` flag and forwards it via
//!   [`FrameCycler::set_playing`]. Resuming continues from the current frame.
//! - **reset-on-change**: the caller forwards its resource key via
//!   [`FrameCycler::set_resource`]. A new key forces the index back to 0
//!   without touching the timer.

use crate::domain::animation::{AnimationConfig, FrameIndex, Phase, TimerId};
use crate::domain::error::AnimationError;
use std::time::Duration;

/// Options for one cycler instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclerOptions<K> {
    pub animation: AnimationConfig,
    /// Whether playback can be toggled by the caller.
    pub pausable: bool,
    /// Initial resource key. `Some` enables reset-on-change.
    pub reset_key: Option<K>,
}

impl<K> CyclerOptions<K> {
    /// A cycler that always plays while mounted.
    #[must_use]
    pub fn always_on(animation: AnimationConfig) -> Self {
        Self {
            animation,
            pausable: false,
            reset_key: None,
        }
    }

    /// A cycler whose playback is toggled by the caller.
    #[must_use]
    pub fn pausable(animation: AnimationConfig) -> Self {
        Self {
            animation,
            pausable: true,
            reset_key: None,
        }
    }

    /// A cycler that restarts from frame 0 whenever its resource changes.
    #[must_use]
    pub fn reset_on_change(animation: AnimationConfig, initial: K) -> Self {
        Self {
            animation,
            pausable: false,
            reset_key: Some(initial),
        }
    }
}

/// Frame index plus the lifecycle of the timer that advances it.
#[derive(Debug, Clone)]
pub struct FrameCycler<K = ()> {
    animation: AnimationConfig,
    pausable: bool,
    reset_key: Option<K>,
    frame: FrameIndex,
    phase: Phase,
    last_timer: TimerId,
}

impl<K: PartialEq> FrameCycler<K> {
    #[must_use]
    pub fn new(options: CyclerOptions<K>) -> Self {
        Self {
            animation: options.animation,
            pausable: options.pausable,
            reset_key: options.reset_key,
            frame: FrameIndex::ZERO,
            phase: Phase::Idle,
            last_timer: TimerId::new(0),
        }
    }

    /// Component activation: rewinds to frame 0 and starts ticking unless
    /// this is a pausable cycler whose caller is not playing.
    pub fn activate(&mut self, playing: bool) -> Result<Option<TimerId>, AnimationError> {
        if self.phase.is_torn_down() {
            return Err(AnimationError::TornDown);
        }
        self.cancel();
        self.frame = FrameIndex::ZERO;
        if self.pausable && !playing {
            log::debug!("cycler activated paused");
            return Ok(None);
        }
        self.start().map(Some)
    }

    /// Starts a fresh timer, cancelling the previous one first.
    ///
    /// The frame index is left untouched.
    pub fn start(&mut self) -> Result<TimerId, AnimationError> {
        if self.phase.is_torn_down() {
            return Err(AnimationError::TornDown);
        }
        if let Phase::Running(previous) = self.phase {
            log::debug!("restarting cycler, cancelling timer {}", previous.value());
        }
        let id = self.last_timer.successor();
        self.last_timer = id;
        self.phase = Phase::Running(id);
        log::info!(
            "cycler started: timer {} every {:?} from frame {}",
            id.value(),
            self.interval(),
            self.frame
        );
        Ok(id)
    }

    /// Stops the active timer. Returns false when nothing was running.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            Phase::Running(id) => {
                self.phase = Phase::Idle;
                log::info!("cycler stopped at frame {} (timer {})", self.frame, id.value());
                true
            }
            Phase::Idle | Phase::TornDown => false,
        }
    }

    /// Forwards the caller's playback flag.
    ///
    /// `true` starts a timer from the current frame unless one is already
    /// running; `false` cancels immediately and freezes the frame.
    pub fn set_playing(&mut self, playing: bool) -> Result<Option<TimerId>, AnimationError> {
        if !self.pausable {
            log::warn!("ignoring playback toggle on a cycler without pause control");
            return Ok(self.phase.timer());
        }
        if playing {
            match self.phase {
                Phase::Running(id) => Ok(Some(id)),
                Phase::Idle | Phase::TornDown => self.start().map(Some),
            }
        } else {
            self.cancel();
            Ok(None)
        }
    }

    /// Forwards the caller's resource key.
    ///
    /// On a reset-on-change cycler a different key rewinds to frame 0
    /// synchronously. The timer keeps its cadence. Returns whether a reset
    /// happened.
    pub fn set_resource(&mut self, key: K) -> bool {
        match &mut self.reset_key {
            Some(current) if *current == key => false,
            Some(current) => {
                *current = key;
                self.frame = FrameIndex::ZERO;
                log::debug!("resource changed, frame reset to 0");
                true
            }
            None => {
                log::warn!("ignoring resource change on a cycler without reset-on-change");
                false
            }
        }
    }

    /// Applies one firing of `timer`.
    ///
    /// Returns the new frame, or `None` if `timer` is not the active timer.
    pub fn tick(&mut self, timer: TimerId) -> Option<FrameIndex> {
        if self.phase.timer() != Some(timer) {
            log::trace!("dropping stale tick from timer {}", timer.value());
            return None;
        }
        self.frame = self.frame.next(self.animation.frame_count());
        log::trace!("tick {} -> frame {}", timer.value(), self.frame);
        Some(self.frame)
    }

    /// Ends the lifecycle. No timer can run after this.
    pub fn teardown(&mut self) {
        if !self.phase.is_torn_down() {
            self.cancel();
            self.phase = Phase::TornDown;
            log::info!("cycler torn down");
        }
    }
}

impl<K> FrameCycler<K> {
    #[must_use]
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    #[must_use]
    pub fn is_pausable(&self) -> bool {
        self.pausable
    }

    /// The key a reset-on-change cycler is currently showing.
    #[must_use]
    pub fn resource(&self) -> Option<&K> {
        self.reset_key.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.animation
    }

    /// Tick period shared by the Iced subscription and tokio timers.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.animation.interval()
    }

    /// Timer subscription for the Iced runtime.
    ///
    /// The subscription is keyed by the active [`TimerId`]: starting a new
    /// timer replaces the old recurring task, and an idle cycler yields
    /// none, which stops it.
    pub fn subscription(&self) -> iced::Subscription<TimerId> {
        match self.phase {
            Phase::Running(id) => iced::time::every(self.interval())
                .with(id)
                .map(|(id, _instant)| id),
            Phase::Idle | Phase::TornDown => iced::Subscription::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(frames: i64) -> AnimationConfig {
        AnimationConfig::new(frames, 8.0).expect("valid config")
    }

    fn pausable(frames: i64) -> FrameCycler {
        FrameCycler::new(CyclerOptions::pausable(config(frames)))
    }

    fn tick_n<K: PartialEq>(cycler: &mut FrameCycler<K>, timer: TimerId, n: usize) {
        for _ in 0..n {
            cycler.tick(timer);
        }
    }

    #[test]
    fn new_cycler_is_idle_on_first_frame() {
        let cycler = pausable(7);
        assert_eq!(cycler.phase(), Phase::Idle);
        assert_eq!(cycler.frame(), FrameIndex::ZERO);
    }

    #[test]
    fn n_ticks_return_to_first_frame() {
        let mut cycler: FrameCycler = FrameCycler::new(CyclerOptions::always_on(config(7)));
        let timer = cycler.activate(true).expect("start").expect("timer");
        for _ in 0..7 {
            let frame = cycler.tick(timer).expect("live timer");
            assert!(frame.value() < 7);
        }
        assert_eq!(cycler.frame(), FrameIndex::ZERO);
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let mut cycler = pausable(7);
        let timer = cycler.activate(true).expect("start").expect("timer");
        tick_n(&mut cycler, timer, 3);
        assert_eq!(cycler.frame().value(), 3);

        assert_eq!(cycler.set_playing(false), Ok(None));
        assert!(cycler.phase().is_idle());
        // Late firings of the cancelled timer are ignored.
        for _ in 0..10 {
            assert!(cycler.tick(timer).is_none());
        }
        assert_eq!(cycler.frame().value(), 3);

        let resumed = cycler.set_playing(true).expect("resume").expect("timer");
        assert_ne!(resumed, timer);
        assert_eq!(cycler.frame().value(), 3);
        assert_eq!(cycler.tick(resumed).map(FrameIndex::value), Some(4));
    }

    #[test]
    fn paused_activation_starts_no_timer() {
        let mut cycler = pausable(7);
        assert_eq!(cycler.activate(false), Ok(None));
        assert!(cycler.phase().is_idle());
    }

    #[test]
    fn playing_while_running_keeps_the_same_timer() {
        let mut cycler = pausable(7);
        let timer = cycler.activate(true).expect("start").expect("timer");
        assert_eq!(cycler.set_playing(true), Ok(Some(timer)));
    }

    #[test]
    fn rapid_toggling_leaves_exactly_one_live_timer() {
        let mut cycler = pausable(7);
        let mut seen = vec![cycler.activate(true).expect("start").expect("timer")];
        for _ in 0..5 {
            cycler.set_playing(false).expect("pause");
            seen.push(cycler.set_playing(true).expect("play").expect("timer"));
        }
        let live: Vec<_> = seen
            .iter()
            .filter(|&&id| cycler.phase().timer() == Some(id))
            .collect();
        assert_eq!(live.len(), 1);
        assert_eq!(*live[0], *seen.last().expect("timer"));
    }

    #[test]
    fn starting_twice_replaces_the_first_timer() {
        let mut cycler = pausable(7);
        let first = cycler.start().expect("start");
        let second = cycler.start().expect("restart");
        assert_ne!(first, second);
        assert!(cycler.tick(first).is_none());
        assert!(cycler.tick(second).is_some());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut cycler = pausable(7);
        cycler.start().expect("start");
        assert!(cycler.cancel());
        assert!(!cycler.cancel());
        assert!(!cycler.cancel());
        assert_eq!(cycler.phase(), Phase::Idle);
    }

    #[test]
    fn resource_change_resets_frame_without_restarting_timer() {
        let mut cycler = FrameCycler::new(CyclerOptions::reset_on_change(config(8), "down"));
        let timer = cycler.activate(true).expect("start").expect("timer");
        tick_n(&mut cycler, timer, 5);
        assert_eq!(cycler.frame().value(), 5);

        assert!(cycler.set_resource("left"));
        assert_eq!(cycler.frame(), FrameIndex::ZERO);
        assert_eq!(cycler.phase(), Phase::Running(timer));
        assert_eq!(cycler.resource(), Some(&"left"));
        assert_eq!(cycler.tick(timer).map(FrameIndex::value), Some(1));
    }

    #[test]
    fn same_resource_does_not_reset() {
        let mut cycler = FrameCycler::new(CyclerOptions::reset_on_change(config(8), "down"));
        let timer = cycler.activate(true).expect("start").expect("timer");
        tick_n(&mut cycler, timer, 2);
        assert!(!cycler.set_resource("down"));
        assert_eq!(cycler.frame().value(), 2);
    }

    #[test]
    fn reset_on_change_variant_ignores_playback_toggle() {
        let mut cycler = FrameCycler::new(CyclerOptions::reset_on_change(config(8), 1_u8));
        let timer = cycler.activate(false).expect("start").expect("timer");
        assert_eq!(cycler.set_playing(false), Ok(Some(timer)));
        assert!(cycler.is_running());
    }

    #[test]
    fn activation_rewinds_to_first_frame() {
        let mut cycler = pausable(7);
        let timer = cycler.activate(true).expect("start").expect("timer");
        tick_n(&mut cycler, timer, 4);
        let again = cycler.activate(true).expect("start").expect("timer");
        assert_eq!(cycler.frame(), FrameIndex::ZERO);
        assert!(cycler.tick(timer).is_none());
        assert!(cycler.tick(again).is_some());
    }

    #[test]
    fn subscription_period_stays_within_timer_bounds() {
        use crate::domain::animation::{MAX_TICK_INTERVAL, MIN_TICK_INTERVAL};

        for fps in [1e300, 1e-300, 8.0] {
            let animation = AnimationConfig::new(7, fps).expect("valid config");
            let mut cycler: FrameCycler = FrameCycler::new(CyclerOptions::always_on(animation));
            cycler.activate(true).expect("start").expect("timer");

            let period = cycler.interval();
            assert!(
                (MIN_TICK_INTERVAL..=MAX_TICK_INTERVAL).contains(&period),
                "fps {fps} gave {period:?}"
            );
            let _subscription = cycler.subscription();
        }
    }

    #[test]
    fn teardown_is_terminal() {
        let mut cycler = pausable(7);
        let timer = cycler.activate(true).expect("start").expect("timer");
        cycler.tick(timer);
        cycler.teardown();
        cycler.teardown();

        assert_eq!(cycler.phase(), Phase::TornDown);
        assert!(cycler.tick(timer).is_none());
        assert_eq!(cycler.frame().value(), 1);
        assert_eq!(cycler.start(), Err(AnimationError::TornDown));
        assert_eq!(cycler.activate(true), Err(AnimationError::TornDown));
        assert_eq!(cycler.set_playing(true), Err(AnimationError::TornDown));
        assert!(!cycler.cancel());
    }
}
