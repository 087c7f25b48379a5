//! Carousel autoplay engine.
//!
//! Advances a fixed slide sequence on a timer. Pausing and resuming keep
//! the progress of the current slide: only the remaining part of the slide
//! budget is re-armed on resume. Manual navigation always restarts the
//! budget. All methods take the current instant so callers own the clock.

use std::time::{Duration, Instant};

use crate::constants::MIN_SLIDE_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("slide {index} out of range (have {count})")]
    OutOfRange { index: usize, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
}

/// A countdown that can be suspended without losing progress.
///
/// While running, `armed_at` marks when the current `remaining` budget
/// started draining.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    budget: Duration,
    remaining: Duration,
    armed_at: Option<Instant>,
}

impl Countdown {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            remaining: budget,
            armed_at: None,
        }
    }

    /// Start draining the remaining budget. No-op when already running.
    pub fn arm(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    /// Stop draining and keep whatever is left
    pub fn suspend(&mut self, now: Instant) {
        if let Some(armed_at) = self.armed_at.take() {
            let elapsed = now.saturating_duration_since(armed_at);
            self.remaining = self.remaining.saturating_sub(elapsed);
        }
    }

    /// Refill to the full budget, keeping the running/suspended state
    pub fn reset(&mut self, now: Instant) {
        self.remaining = self.budget;
        if self.armed_at.is_some() {
            self.armed_at = Some(now);
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed_at.map(|armed_at| armed_at + self.remaining)
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        match self.armed_at {
            Some(armed_at) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(armed_at)),
            None => self.remaining,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

#[derive(Debug, Clone)]
pub struct CarouselEngine {
    slide_count: usize,
    active: usize,
    state: PlayState,
    countdown: Countdown,
    reduced_motion: bool,
}

impl CarouselEngine {
    /// Start on slide 0. Plays immediately unless `reduced_motion` is set,
    /// in which case the engine stays paused for good.
    ///
    /// `slide_duration` is raised to `MIN_SLIDE_DURATION_MS` if shorter.
    pub fn new(slide_count: usize, slide_duration: Duration, reduced_motion: bool, now: Instant) -> Self {
        let slide_duration = slide_duration.max(Duration::from_millis(MIN_SLIDE_DURATION_MS));
        let mut countdown = Countdown::new(slide_duration);
        let state = if reduced_motion {
            PlayState::Paused
        } else {
            countdown.arm(now);
            PlayState::Playing
        };

        Self {
            slide_count: slide_count.max(1),
            active: 0,
            state,
            countdown,
            reduced_motion,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn pause(&mut self, now: Instant) {
        if self.state == PlayState::Playing {
            self.countdown.suspend(now);
            self.state = PlayState::Paused;
        }
    }

    /// Re-arm for exactly the remaining budget. Ignored under reduced motion.
    pub fn resume(&mut self, now: Instant) {
        if self.reduced_motion || self.state == PlayState::Playing {
            return;
        }
        self.state = PlayState::Playing;
        self.countdown.arm(now);
    }

    pub fn next(&mut self, now: Instant) {
        self.active = (self.active + 1) % self.slide_count;
        self.countdown.reset(now);
    }

    pub fn prev(&mut self, now: Instant) {
        self.active = (self.active + self.slide_count - 1) % self.slide_count;
        self.countdown.reset(now);
    }

    pub fn go_to(&mut self, index: usize, now: Instant) -> Result<(), CarouselError> {
        if index >= self.slide_count {
            return Err(CarouselError::OutOfRange {
                index,
                count: self.slide_count,
            });
        }
        self.active = index;
        self.countdown.reset(now);
        Ok(())
    }

    /// When the pending advance fires, if one is armed
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            PlayState::Playing => self.countdown.deadline(),
            PlayState::Paused => None,
        }
    }

    /// Advance if the budget ran out. Returns true when the slide changed.
    ///
    /// A late tick advances once; the new slide gets a full budget from `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != PlayState::Playing || !self.countdown.is_expired(now) {
            return false;
        }
        self.next(now);
        true
    }

    /// Fraction of the current slide's budget already used (0.0..=1.0)
    pub fn progress(&self, now: Instant) -> f32 {
        let budget = self.countdown.budget().as_secs_f32();
        if budget <= 0.0 {
            return 1.0;
        }
        let remaining = self.countdown.remaining(now).as_secs_f32();
        (1.0 - remaining / budget).clamp(0.0, 1.0)
    }
}
