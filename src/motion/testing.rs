//! Deterministic stand-ins for the browser: a virtual clock and a synthetic viewport.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashSet},
    mem,
    rc::{Rc, Weak},
    time::Duration,
};

use super::{Disposer, IntersectionEntry, Scheduler, ScrollMetrics, ViewportSource};

enum TaskFn {
    Once(Box<dyn FnOnce()>),
    Every(Box<dyn FnMut()>),
}

struct Task {
    due: Duration,
    period: Duration,
    run: TaskFn,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<u64, Task>,
    /// Task currently executing, which is out of `tasks` while it runs.
    running: Option<u64>,
    /// Ids cancelled while running; only ever holds the running task.
    cancelled: HashSet<u64>,
}

/// Virtual-time scheduler. Time only moves when [`ManualScheduler::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of timers still registered.
    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Moves the clock forward, firing every task that falls due in order of due time.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .tasks
                    .iter()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(id, t)| (t.due, **id))
                    .map(|(id, _)| *id);
                due.and_then(|id| {
                    let task = clock.tasks.remove(&id)?;
                    clock.now = task.due;
                    clock.running = Some(id);
                    Some((id, task))
                })
            };
            let Some((id, task)) = next else {
                break;
            };
            match task.run {
                TaskFn::Once(run) => {
                    run();
                    let mut clock = self.clock.borrow_mut();
                    clock.running = None;
                    clock.cancelled.remove(&id);
                }
                TaskFn::Every(mut run) => {
                    run();
                    let mut clock = self.clock.borrow_mut();
                    clock.running = None;
                    if !clock.cancelled.remove(&id) {
                        clock.tasks.insert(
                            id,
                            Task {
                                due: task.due + task.period,
                                period: task.period,
                                run: TaskFn::Every(run),
                            },
                        );
                    }
                }
            }
        }
        self.clock.borrow_mut().now = target;
    }

    fn register(&self, delay: Duration, period: Duration, run: TaskFn) -> Disposer {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.insert(id, Task { due, period, run });
            id
        };
        let clock: Weak<RefCell<Clock>> = Rc::downgrade(&self.clock);
        Disposer::new(move || {
            if let Some(clock) = clock.upgrade() {
                let removed = {
                    let mut clock = clock.borrow_mut();
                    if clock.running == Some(id) {
                        clock.cancelled.insert(id);
                    }
                    clock.tasks.remove(&id)
                };
                drop(removed);
            }
        })
    }
}

impl Scheduler for ManualScheduler {
    fn timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Disposer {
        self.register(delay, Duration::ZERO, TaskFn::Once(task))
    }

    fn interval(&self, period: Duration, task: Box<dyn FnMut()>) -> Disposer {
        let period = period.max(Duration::from_millis(1));
        self.register(period, period, TaskFn::Every(task))
    }
}

type ScrollListener = (u64, Box<dyn FnMut(ScrollMetrics)>);

struct Observer {
    id: u64,
    target: &'static str,
    threshold: f64,
    listener: Box<dyn FnMut(IntersectionEntry)>,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    scroll: Vec<ScrollListener>,
    observers: Vec<Observer>,
}

/// Viewport whose scroll and intersection events are injected by the test.
/// Targets are identified by name.
#[derive(Clone, Default)]
pub struct SyntheticViewport {
    listeners: Rc<RefCell<Listeners>>,
}

impl SyntheticViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self, metrics: ScrollMetrics) {
        let mut active = mem::take(&mut self.listeners.borrow_mut().scroll);
        for (_, listener) in active.iter_mut() {
            listener(metrics);
        }
        let mut listeners = self.listeners.borrow_mut();
        active.append(&mut listeners.scroll);
        listeners.scroll = active;
    }

    pub fn scroll_to(&self, offset_y: f64, scroll_height: f64, viewport_height: f64) {
        self.scroll(ScrollMetrics {
            offset_y,
            scroll_height,
            viewport_height,
        });
    }

    pub fn intersect(&self, target: &str, entry: IntersectionEntry) {
        let mut active = mem::take(&mut self.listeners.borrow_mut().observers);
        for observer in active.iter_mut().filter(|o| o.target == target) {
            (observer.listener)(entry);
        }
        let mut listeners = self.listeners.borrow_mut();
        active.append(&mut listeners.observers);
        listeners.observers = active;
    }

    pub fn threshold_of(&self, target: &str) -> Option<f64> {
        self.listeners
            .borrow()
            .observers
            .iter()
            .find(|o| o.target == target)
            .map(|o| o.threshold)
    }

    /// Scroll listeners plus intersection observers still attached.
    pub fn live_subscriptions(&self) -> usize {
        let listeners = self.listeners.borrow();
        listeners.scroll.len() + listeners.observers.len()
    }

    fn next_id(&self) -> u64 {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        id
    }

    fn detach(&self, id: u64) -> Disposer {
        let listeners = Rc::downgrade(&self.listeners);
        Disposer::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                let mut listeners = listeners.borrow_mut();
                listeners.scroll.retain(|(sid, _)| *sid != id);
                listeners.observers.retain(|o| o.id != id);
            }
        })
    }
}

impl ViewportSource for SyntheticViewport {
    type Target = &'static str;

    fn subscribe_scroll(&self, listener: Box<dyn FnMut(ScrollMetrics)>) -> Disposer {
        let id = self.next_id();
        self.listeners.borrow_mut().scroll.push((id, listener));
        self.detach(id)
    }

    fn observe_intersection(
        &self,
        target: Self::Target,
        threshold: f64,
        listener: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Disposer {
        let id = self.next_id();
        self.listeners.borrow_mut().observers.push(Observer {
            id,
            target,
            threshold,
            listener,
        });
        self.detach(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn timeout_fires_once_when_due() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        let _t = sched.timeout(
            Duration::from_millis(30),
            Box::new(move || f.set(f.get() + 1)),
        );
        sched.advance_ms(29);
        assert_eq!(fired.get(), 0);
        sched.advance_ms(1);
        assert_eq!(fired.get(), 1);
        sched.advance_ms(100);
        assert_eq!(fired.get(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn interval_repeats_until_disposed() {
        let sched = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let t = ticks.clone();
        let handle = sched.interval(
            Duration::from_millis(10),
            Box::new(move || t.set(t.get() + 1)),
        );
        sched.advance_ms(35);
        assert_eq!(ticks.get(), 3);
        handle.dispose();
        assert_eq!(sched.pending(), 0);
        sched.advance_ms(100);
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn interval_can_cancel_itself() {
        let sched = ManualScheduler::new();
        let slot: Rc<RefCell<Option<Disposer>>> = Rc::default();
        let ticks = Rc::new(Cell::new(0));
        let (s, t) = (slot.clone(), ticks.clone());
        let handle = sched.interval(
            Duration::from_millis(10),
            Box::new(move || {
                t.set(t.get() + 1);
                if t.get() == 2 {
                    if let Some(h) = s.borrow_mut().take() {
                        h.dispose();
                    }
                }
            }),
        );
        *slot.borrow_mut() = Some(handle);
        sched.advance_ms(100);
        assert_eq!(ticks.get(), 2);
        assert_eq!(sched.pending(), 0);
        assert!(sched.clock.borrow().cancelled.is_empty());
    }

    #[test]
    fn cancelling_idle_or_finished_tasks_leaves_no_tombstones() {
        let sched = ManualScheduler::new();
        let fired = sched.timeout(Duration::from_millis(5), Box::new(|| {}));
        let idle = sched.interval(Duration::from_millis(10), Box::new(|| {}));
        sched.advance_ms(5);
        fired.dispose();
        idle.dispose();
        let clock = sched.clock.borrow();
        assert!(clock.cancelled.is_empty());
        assert!(clock.tasks.is_empty());
        assert_eq!(clock.running, None);
    }

    #[test]
    fn synthetic_viewport_detaches_on_dispose() {
        let viewport = SyntheticViewport::new();
        let seen = Rc::new(Cell::new(0));
        let s = seen.clone();
        let sub = viewport.subscribe_scroll(Box::new(move |_| s.set(s.get() + 1)));
        viewport.scroll_to(10.0, 2000.0, 1000.0);
        assert_eq!(viewport.live_subscriptions(), 1);
        sub.dispose();
        viewport.scroll_to(20.0, 2000.0, 1000.0);
        assert_eq!(seen.get(), 1);
        assert_eq!(viewport.live_subscriptions(), 0);
    }
}
