use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::carousel::scheduler::{BrowserScheduler, Scheduler};
use crate::config;
use crate::content::{Stat, STATS};
use crate::utils::dom::use_in_view;
use crate::utils::format::format_number;
use crate::utils::motion::{count_up_value, reveal_style, stagger_delay};

const FRAME_MS: u32 = 16;

/// A count from 0 to `target`, one value per frame. The frame interval
/// cancels itself once the target has been reported; dropping the `CountUp`
/// cancels it early.
pub struct CountUp<S: Scheduler> {
    _frames: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler> CountUp<S> {
    pub fn start(
        scheduler: &S,
        target: u64,
        duration_ms: u32,
        on_value: impl Fn(u64) + 'static,
    ) -> Self {
        let frames: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));
        let slot = Rc::downgrade(&frames);
        let mut elapsed = 0u32;
        let handle = scheduler.every(
            FRAME_MS,
            Box::new(move || {
                elapsed = elapsed.saturating_add(FRAME_MS).min(duration_ms);
                on_value(count_up_value(target, elapsed, duration_ms));
                if elapsed >= duration_ms {
                    if let Some(frames) = slot.upgrade() {
                        let finished = frames.borrow_mut().take();
                        drop(finished);
                    }
                }
            }),
        );
        *frames.borrow_mut() = Some(handle);
        Self { _frames: frames }
    }
}

/// Counts from 0 to `target` the first time `running` turns true. The count
/// is started once per mount and never restarted.
#[hook]
fn use_count_up(target: u64, running: bool) -> u64 {
    let value = use_state_eq(|| 0u64);
    let count: Rc<RefCell<Option<CountUp<BrowserScheduler>>>> = use_mut_ref(|| None);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&running| {
                if running && count.borrow().is_none() {
                    let started = CountUp::start(
                        &BrowserScheduler,
                        target,
                        config::count_up_duration_ms(),
                        move |next| value.set(next),
                    );
                    *count.borrow_mut() = Some(started);
                }
                || ()
            },
            running,
        );
    }

    *value
}

#[derive(Properties, PartialEq)]
struct CounterProps {
    index: usize,
    visible: bool,
}

#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let stat: &Stat = &STATS[props.index];
    let value = use_count_up(stat.value, props.visible);

    html! {
        <div class="stat-card" style={reveal_style(props.visible, stagger_delay(props.index, 0.1), 0.8, 20.0)}>
            <div class="stat-label">
                <span class="stat-bar"></span>
                <h3>{stat.label}</h3>
            </div>
            <div class="stat-value gradient-text">
                <span>{format_number(value)}</span>
                <span class="stat-unit">{stat.unit}</span>
            </div>
            <p>{stat.description}</p>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let section = use_node_ref();
    let visible = use_in_view(section.clone(), 0.3);

    html! {
        <section class="stats" ref={section}>
            <div class="stats-backdrop"></div>
            <div class="container stats-grid">
                { for (0..STATS.len()).map(|index| html! {
                    <Counter key={index} {index} {visible} />
                })}
            </div>
            <style>
                {r#"
    .stats {
        position: relative;
        padding: 5rem 0;
    }
    .stats-backdrop {
        position: absolute;
        inset: 0;
        background: rgba(224, 42, 164, 0.05);
        transform: skewY(3deg) translateY(-50%);
    }
    .stats-grid {
        position: relative;
        max-width: 56rem;
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2.5rem;
    }
    .stat-card {
        background: #fff;
        border-radius: 0.75rem;
        padding: 2rem;
        border: 1px solid #f3f4f6;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .stat-label {
        display: flex;
        align-items: center;
        margin-bottom: 0.75rem;
    }
    .stat-label h3 {
        font-size: 1.125rem;
        font-weight: 500;
        color: #6b7280;
        margin: 0;
    }
    .stat-bar {
        width: 6px;
        height: 2rem;
        border-radius: 999px;
        background: var(--brand);
        margin-right: 1rem;
    }
    .stat-value {
        font-size: 3rem;
        font-weight: 700;
    }
    .stat-unit {
        margin-left: 0.25rem;
    }
    .stat-card p {
        color: #6b7280;
    }
    @media (max-width: 768px) {
        .stats-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::scheduler::ManualScheduler;
    use std::cell::Cell;

    fn counting(target: u64, duration_ms: u32) -> (CountUp<ManualScheduler>, ManualScheduler, Rc<Cell<u64>>) {
        let scheduler = ManualScheduler::new();
        let shown = Rc::new(Cell::new(0));
        let sink = shown.clone();
        let count = CountUp::start(&scheduler, target, duration_ms, move |v| sink.set(v));
        (count, scheduler, shown)
    }

    #[test]
    fn test_count_up_reaches_target_and_stops() {
        let (count, scheduler, shown) = counting(89, 2000);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(1000);
        let midway = shown.get();
        assert!(midway > 0 && midway < 89, "got {}", midway);

        scheduler.advance(1000);
        assert_eq!(shown.get(), 89);
        assert_eq!(scheduler.pending(), 0);
        drop(count);
    }

    #[test]
    fn test_count_up_never_moves_after_finishing() {
        let (_count, scheduler, shown) = counting(250, 2000);
        scheduler.advance(2000);
        shown.set(0);
        scheduler.advance(5000);
        assert_eq!(shown.get(), 0);
    }

    #[test]
    fn test_dropping_count_up_cancels_frames() {
        let (count, scheduler, shown) = counting(98, 2000);
        scheduler.advance(160);
        let before = shown.get();
        drop(count);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(5000);
        assert_eq!(shown.get(), before);
    }

    #[test]
    fn test_zero_duration_shows_target_on_first_frame() {
        let (count, scheduler, shown) = counting(42, 0);
        scheduler.advance(u64::from(FRAME_MS));
        assert_eq!(shown.get(), 42);
        assert_eq!(scheduler.pending(), 0);
        drop(count);
    }
}
