use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use super::scheduler::BrowserScheduler;
use super::{Carousel, CarouselTimings, Snapshot};

type Slot = Rc<RefCell<Option<Carousel<BrowserScheduler>>>>;

/// Handle returned by [`use_carousel`]. Cheap to clone into callbacks.
#[derive(Clone)]
pub struct UseCarouselHandle {
    snapshot: Snapshot,
    carousel: Slot,
}

impl UseCarouselHandle {
    pub fn active_index(&self) -> usize {
        self.snapshot.active_index
    }

    pub fn is_autoplaying(&self) -> bool {
        self.snapshot.is_autoplaying()
    }

    pub fn go_to(&self, index: usize) {
        if let Some(carousel) = self.carousel.borrow().as_ref() {
            if let Err(err) = carousel.go_to(index) {
                warn!("{}", err);
            }
        }
    }

    pub fn next(&self) {
        if let Some(carousel) = self.carousel.borrow().as_ref() {
            carousel.next();
        }
    }

    pub fn previous(&self) {
        if let Some(carousel) = self.carousel.borrow().as_ref() {
            carousel.previous();
        }
    }
}

/// Mounts a [`Carousel`] over `len` slides for the lifetime of the component.
/// The carousel (and with it both timers) is dropped on unmount or when
/// `len`/`timings` change.
#[hook]
pub fn use_carousel(len: usize, timings: CarouselTimings) -> UseCarouselHandle {
    let snapshot = use_state(Snapshot::initial);
    let carousel: Slot = use_mut_ref(|| None);

    {
        let snapshot = snapshot.clone();
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |&(len, timings)| {
                match Carousel::new(len, timings, BrowserScheduler) {
                    Ok(mounted) => {
                        snapshot.set(mounted.snapshot());
                        let on_change = snapshot.clone();
                        mounted.set_listener(move |next| on_change.set(next));
                        *carousel.borrow_mut() = Some(mounted);
                    }
                    Err(err) => warn!("testimonial carousel disabled: {}", err),
                }
                move || {
                    carousel.borrow_mut().take();
                }
            },
            (len, timings),
        );
    }

    UseCarouselHandle {
        snapshot: *snapshot,
        carousel,
    }
}
