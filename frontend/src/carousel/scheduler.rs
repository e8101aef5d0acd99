use gloo_timers::callback::{Interval, Timeout};

/// Something that can run a task later. Dropping the returned handle cancels
/// the task.
pub trait Scheduler {
    type Handle: 'static;

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Handle;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setInterval` / `setTimeout` through gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Held only so the timer lives until the handle is dropped.
pub enum BrowserTask {
    Repeating { _interval: Interval },
    Once { _timeout: Timeout },
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTask;

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> BrowserTask {
        BrowserTask::Repeating {
            _interval: Interval::new(period_ms, task),
        }
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> BrowserTask {
        BrowserTask::Once {
            _timeout: Timeout::new(delay_ms, task),
        }
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    type RepeatingTask = Rc<RefCell<Box<dyn FnMut()>>>;

    enum Task {
        Repeating { period: u64, task: RepeatingTask },
        Once(Box<dyn FnOnce()>),
    }

    struct Entry {
        id: u64,
        due: u64,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
    }

    enum Due {
        Repeating(RepeatingTask),
        Once(Box<dyn FnOnce()>),
    }

    /// Virtual clock. Time only moves when `advance` is called.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().entries.retain(|e| e.id != self.id);
            }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().entries.len()
        }

        /// Runs every task falling due within the next `ms`, in due order.
        /// Tasks run with the clock unborrowed so they may schedule or cancel.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            while let Some(due) = self.pop_due(target) {
                match due {
                    Due::Repeating(task) => {
                        let mut run = task.borrow_mut();
                        (*run)();
                    }
                    Due::Once(task) => task(),
                }
            }
            self.clock.borrow_mut().now = target;
        }

        fn pop_due(&self, target: u64) -> Option<Due> {
            let mut clock = self.clock.borrow_mut();
            let pos = clock
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.due <= target)
                .min_by_key(|(_, e)| (e.due, e.id))
                .map(|(pos, _)| pos)?;
            let due_at = clock.entries[pos].due;
            clock.now = due_at;
            let entry = &mut clock.entries[pos];
            if let Task::Repeating { period, task } = &entry.task {
                let task = Rc::clone(task);
                entry.due = due_at + *period;
                return Some(Due::Repeating(task));
            }
            match clock.entries.remove(pos).task {
                Task::Once(task) => Some(Due::Once(task)),
                Task::Repeating { .. } => None,
            }
        }

        fn push(&self, delay: u64, task: Task) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.entries.push(Entry { id, due, task });
            ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> ManualHandle {
            let period = u64::from(period_ms.max(1));
            self.push(
                period,
                Task::Repeating {
                    period,
                    task: Rc::new(RefCell::new(task)),
                },
            )
        }

        fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            self.push(u64::from(delay_ms), Task::Once(task))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_repeating_task_fires_each_period() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _handle = scheduler.every(5, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(4);
        assert_eq!(hits.get(), 0);
        scheduler.advance(1);
        assert_eq!(hits.get(), 1);
        scheduler.advance(12);
        assert_eq!(hits.get(), 3);
        assert_eq!(scheduler.now(), 17);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = scheduler.after(10, Box::new(move || flag.set(true)));
        assert_eq!(scheduler.pending(), 1);

        drop(handle);
        scheduler.advance(20);
        assert!(!fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_one_shot_fires_once() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _handle = scheduler.after(3, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(100);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }
}
