//! Autoplay/navigation controller for the testimonial carousel.
//!
//! [`CarouselState`] is the bare state machine. [`Carousel`] wraps it with the
//! two timers it needs (the recurring autoplay tick and the one-shot resume
//! after a manual navigation) on top of a [`Scheduler`].

pub mod hook;
pub mod scheduler;

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::config;
use scheduler::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    Empty,
    #[error("slide {index} is out of range for a carousel of {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Autoplaying,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub active_index: usize,
    pub mode: Mode,
}

impl Snapshot {
    pub fn initial() -> Self {
        Self {
            active_index: 0,
            mode: Mode::Autoplaying,
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.mode == Mode::Autoplaying
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTimings {
    pub autoplay_interval_ms: u32,
    pub quiet_period_ms: u32,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: config::autoplay_interval_ms(),
            quiet_period_ms: config::quiet_period_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: NonZeroUsize,
    active: usize,
    mode: Mode,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        let len = NonZeroUsize::new(len).ok_or(CarouselError::Empty)?;
        Ok(Self {
            len,
            active: 0,
            mode: Mode::Autoplaying,
        })
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active_index: self.active,
            mode: self.mode,
        }
    }

    /// Autoplay tick. Returns false (and changes nothing) while paused.
    pub fn advance(&mut self) -> bool {
        if self.mode != Mode::Autoplaying {
            return false;
        }
        self.active = (self.active + 1) % self.len();
        true
    }

    /// Manual jump. Always pauses autoplay.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.active = index;
        self.mode = Mode::Paused;
        Ok(())
    }

    pub fn next_index(&self) -> usize {
        (self.active + 1) % self.len()
    }

    pub fn previous_index(&self) -> usize {
        (self.active + self.len() - 1) % self.len()
    }

    pub fn resume(&mut self) {
        self.mode = Mode::Autoplaying;
    }
}

type Listener = Rc<dyn Fn(Snapshot)>;

struct Inner<S: Scheduler> {
    state: CarouselState,
    timings: CarouselTimings,
    scheduler: S,
    autoplay: Option<S::Handle>,
    resume: Option<S::Handle>,
    listener: Option<Listener>,
}

/// Carousel state plus its timers. Dropping it cancels both timers; a timer
/// callback that still fires afterwards finds nothing to act on.
pub struct Carousel<S: Scheduler + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler + 'static> Carousel<S> {
    /// Starts in `Autoplaying` on slide 0 with the tick already scheduled.
    pub fn new(len: usize, timings: CarouselTimings, scheduler: S) -> Result<Self, CarouselError> {
        let state = CarouselState::new(len)?;
        let inner = Rc::new(RefCell::new(Inner {
            state,
            timings,
            scheduler,
            autoplay: None,
            resume: None,
            listener: None,
        }));
        start_autoplay(&inner);
        Ok(Self { inner })
    }

    /// Called with the new snapshot after every transition.
    pub fn set_listener(&self, listener: impl Fn(Snapshot) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.borrow().state.snapshot()
    }

    pub fn go_to(&self, index: usize) -> Result<(), CarouselError> {
        let quiet = {
            let mut inner = self.inner.borrow_mut();
            inner.state.go_to(index)?;
            inner.autoplay = None;
            inner.resume = None;
            inner.timings.quiet_period_ms
        };

        let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(&self.inner);
        let handle = self.inner.borrow().scheduler.after(
            quiet,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    resume(&inner);
                }
            }),
        );
        self.inner.borrow_mut().resume = Some(handle);

        notify(&self.inner);
        Ok(())
    }

    pub fn next(&self) {
        let index = self.inner.borrow().state.next_index();
        self.navigate(index);
    }

    pub fn previous(&self) {
        let index = self.inner.borrow().state.previous_index();
        self.navigate(index);
    }

    fn navigate(&self, index: usize) {
        // wrapped indices are always in range
        if let Err(err) = self.go_to(index) {
            log::warn!("carousel navigation rejected: {}", err);
        }
    }
}

fn start_autoplay<S: Scheduler + 'static>(inner: &Rc<RefCell<Inner<S>>>) {
    let weak = Rc::downgrade(inner);
    let period = inner.borrow().timings.autoplay_interval_ms;
    let handle = inner.borrow().scheduler.every(
        period,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                tick(&inner);
            }
        }),
    );
    inner.borrow_mut().autoplay = Some(handle);
}

fn tick<S: Scheduler + 'static>(inner: &Rc<RefCell<Inner<S>>>) {
    let moved = inner.borrow_mut().state.advance();
    if moved {
        notify(inner);
    }
}

fn resume<S: Scheduler + 'static>(inner: &Rc<RefCell<Inner<S>>>) {
    // The spent handle stays in `resume`: this runs inside its own callback,
    // so it is released by the next navigation or by drop instead.
    inner.borrow_mut().state.resume();
    start_autoplay(inner);
    notify(inner);
}

fn notify<S: Scheduler + 'static>(inner: &Rc<RefCell<Inner<S>>>) {
    let (listener, snapshot) = {
        let guard = inner.borrow();
        (guard.listener.clone(), guard.state.snapshot())
    };
    if let Some(listener) = listener {
        listener(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::scheduler::ManualScheduler;
    use super::*;
    use std::cell::RefCell;

    const TIMINGS: CarouselTimings = CarouselTimings {
        autoplay_interval_ms: 5,
        quiet_period_ms: 10,
    };

    fn carousel(len: usize) -> (Carousel<ManualScheduler>, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let carousel = Carousel::new(len, TIMINGS, scheduler.clone()).unwrap();
        (carousel, scheduler)
    }

    #[test]
    fn test_state_rejects_empty_collection() {
        assert_eq!(CarouselState::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn test_state_advance_cycles_and_wraps() {
        let mut state = CarouselState::new(4).unwrap();
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                state.advance();
                state.snapshot().active_index
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_state_advance_is_noop_when_paused() {
        let mut state = CarouselState::new(3).unwrap();
        state.go_to(1).unwrap();
        assert!(!state.advance());
        assert_eq!(state.snapshot().active_index, 1);
    }

    #[test]
    fn test_state_go_to_out_of_range_leaves_state() {
        let mut state = CarouselState::new(3).unwrap();
        let err = state.go_to(3).unwrap_err();
        assert_eq!(err, CarouselError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(state.snapshot().active_index, 0);
        assert_eq!(state.snapshot().mode, Mode::Autoplaying);
    }

    #[test]
    fn test_state_next_previous_wrap() {
        let mut state = CarouselState::new(3).unwrap();
        assert_eq!(state.previous_index(), 2);
        state.go_to(2).unwrap();
        assert_eq!(state.next_index(), 0);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut state = CarouselState::new(1).unwrap();
        state.advance();
        assert_eq!(state.snapshot().active_index, 0);
        assert_eq!(state.next_index(), 0);
        assert_eq!(state.previous_index(), 0);
    }

    #[test]
    fn test_autoplay_ticks_through_every_slide() {
        let (carousel, scheduler) = carousel(3);
        let mut seen = vec![carousel.snapshot().active_index];
        for _ in 0..3 {
            scheduler.advance(5);
            seen.push(carousel.snapshot().active_index);
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
        assert!(carousel.snapshot().is_autoplaying());
    }

    #[test]
    fn test_go_to_pauses_immediately() {
        let (carousel, scheduler) = carousel(3);
        carousel.go_to(2).unwrap();
        assert_eq!(carousel.snapshot().active_index, 2);
        assert!(!carousel.snapshot().is_autoplaying());

        scheduler.advance(9);
        assert_eq!(carousel.snapshot().active_index, 2);
        assert!(!carousel.snapshot().is_autoplaying());
    }

    #[test]
    fn test_resume_after_quiet_period_scenario() {
        let (carousel, scheduler) = carousel(3);

        scheduler.advance(5);
        assert_eq!(carousel.snapshot().active_index, 1);

        carousel.go_to(2).unwrap();
        assert_eq!(carousel.snapshot().active_index, 2);
        assert!(!carousel.snapshot().is_autoplaying());

        scheduler.advance(10);
        assert!(carousel.snapshot().is_autoplaying());
        assert_eq!(carousel.snapshot().active_index, 2);

        scheduler.advance(5);
        assert_eq!(carousel.snapshot().active_index, 0);
    }

    #[test]
    fn test_repeated_navigation_pushes_resume_out() {
        let (carousel, scheduler) = carousel(5);
        carousel.go_to(1).unwrap();
        scheduler.advance(8);
        carousel.next();
        assert_eq!(carousel.snapshot().active_index, 2);

        // the first resume would have fired at t=10
        scheduler.advance(8);
        assert!(!carousel.snapshot().is_autoplaying());

        scheduler.advance(2);
        assert!(carousel.snapshot().is_autoplaying());
        // only the autoplay tick remains scheduled
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let (carousel, _scheduler) = carousel(3);
        carousel.previous();
        assert_eq!(carousel.snapshot().active_index, 2);
        carousel.next();
        assert_eq!(carousel.snapshot().active_index, 0);
    }

    #[test]
    fn test_go_to_out_of_range_is_rejected() {
        let (carousel, scheduler) = carousel(3);
        assert!(carousel.go_to(7).is_err());
        assert!(carousel.snapshot().is_autoplaying());
        scheduler.advance(5);
        assert_eq!(carousel.snapshot().active_index, 1);
    }

    #[test]
    fn test_drop_cancels_all_timers() {
        let (carousel, scheduler) = carousel(3);
        carousel.go_to(1).unwrap();
        assert_eq!(scheduler.pending(), 1);
        drop(carousel);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(100);
    }

    #[test]
    fn test_listener_sees_every_transition() {
        let (carousel, scheduler) = carousel(3);
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        carousel.set_listener(move |snap| sink.borrow_mut().push(snap));

        scheduler.advance(5);
        carousel.go_to(0).unwrap();
        scheduler.advance(10);

        let expected = vec![
            Snapshot { active_index: 1, mode: Mode::Autoplaying },
            Snapshot { active_index: 0, mode: Mode::Paused },
            Snapshot { active_index: 0, mode: Mode::Autoplaying },
        ];
        assert_eq!(*log.borrow(), expected);
    }
}
