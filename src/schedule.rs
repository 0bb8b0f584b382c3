//! Deterministic scheduler for periodic tasks.
//!
//! Exercise timers are periodic tasks registered here. The host owns the
//! clock: it advances the scheduler, and due callbacks come back one at a
//! time through [`Scheduler::pop_due`] so the caller can react to each
//! (and cancel others) before the next one is delivered. Cancelled tasks are
//! removed immediately and never fire.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A task that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    pub task: TaskId,
    pub tag: T,
    /// Scheduler time at which the task fired.
    pub at: Duration,
}

#[derive(Debug)]
struct Periodic<T> {
    period: Duration,
    next_due: Duration,
    tag: T,
}

/// Single-threaded scheduler of periodic tasks on a virtual clock.
///
/// # Example
///
/// ```rust
/// use calmly::schedule::Scheduler;
/// use std::time::Duration;
///
/// let mut scheduler = Scheduler::new();
/// let tick = scheduler.schedule_every(Duration::from_secs(1), "tick");
///
/// let deadline = scheduler.now() + Duration::from_secs(2);
/// let mut fired = Vec::new();
/// while let Some(f) = scheduler.pop_due(deadline) {
///     fired.push(f.tag);
/// }
/// scheduler.settle(deadline);
///
/// assert_eq!(fired, vec!["tick", "tick"]);
/// assert!(scheduler.cancel(tick));
/// assert!(!scheduler.cancel(tick));
/// ```
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<TaskId, Periodic<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: BTreeMap::new(),
        }
    }
}

impl<T: Copy> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Register a task firing every `period`, first at `now + period`.
    ///
    /// A zero period is bumped to one millisecond so the task cannot starve
    /// the clock. Due times saturate at [`Duration::MAX`].
    pub fn schedule_every(&mut self, period: Duration, tag: T) -> TaskId {
        let period = period.max(Duration::from_millis(1));
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(
            id,
            Periodic {
                period,
                next_due: self.now.saturating_add(period),
                tag,
            },
        );
        id
    }

    /// Cancel a task. Returns `false` if it was not scheduled; calling this
    /// twice is harmless.
    pub fn cancel(&mut self, task: TaskId) -> bool {
        self.tasks.remove(&task).is_some()
    }

    pub fn is_scheduled(&self, task: TaskId) -> bool {
        self.tasks.contains_key(&task)
    }

    /// Number of live tasks.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Deliver the earliest task due at or before `deadline`.
    ///
    /// Ties are broken by registration order. The clock moves to the fire
    /// time and the task is rescheduled one period later; a task whose next
    /// due time would pass [`Duration::MAX`] is retired after this delivery.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Fired<T>> {
        let (id, due) = self
            .tasks
            .iter()
            .filter(|(_, task)| task.next_due <= deadline)
            .min_by_key(|(id, task)| (task.next_due, **id))
            .map(|(id, task)| (*id, task.next_due))?;

        let task = self.tasks.get_mut(&id)?;
        let tag = task.tag;
        match due.checked_add(task.period) {
            Some(next_due) => task.next_due = next_due,
            None => {
                self.tasks.remove(&id);
            }
        }
        self.now = self.now.max(due);

        Some(Fired {
            task: id,
            tag,
            at: due,
        })
    }

    /// Move the clock to `deadline` once every due task has been popped.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T: Copy>(scheduler: &mut Scheduler<T>, by: Duration) -> Vec<Fired<T>> {
        let deadline = scheduler.now().saturating_add(by);
        let mut fired = Vec::new();
        while let Some(f) = scheduler.pop_due(deadline) {
            fired.push(f);
        }
        scheduler.settle(deadline);
        fired
    }

    #[test]
    fn periodic_task_fires_each_period() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(Duration::from_secs(1), ());

        let fired = drain(&mut scheduler, Duration::from_millis(3500));
        let times: Vec<u64> = fired.iter().map(|f| f.at.as_millis() as u64).collect();

        assert_eq!(times, vec![1000, 2000, 3000]);
        assert_eq!(scheduler.now(), Duration::from_millis(3500));
    }

    #[test]
    fn nothing_fires_before_first_period() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(Duration::from_secs(4), ());

        assert!(drain(&mut scheduler, Duration::from_secs(3)).is_empty());
        assert_eq!(drain(&mut scheduler, Duration::from_secs(1)).len(), 1);
    }

    #[test]
    fn simultaneous_tasks_fire_in_registration_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(Duration::from_secs(1), 'a');
        scheduler.schedule_every(Duration::from_secs(2), 'b');

        let tags: Vec<char> = drain(&mut scheduler, Duration::from_secs(2))
            .iter()
            .map(|f| f.tag)
            .collect();

        assert_eq!(tags, vec!['a', 'a', 'b']);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.schedule_every(Duration::from_secs(1), 'a');
        let b = scheduler.schedule_every(Duration::from_secs(1), 'b');

        let deadline = Duration::from_secs(5);
        let first = scheduler.pop_due(deadline).unwrap();
        assert_eq!(first.task, a);

        // Cancel mid-drain: b was due at the same instant but must not fire.
        scheduler.cancel(a);
        scheduler.cancel(b);
        assert!(scheduler.pop_due(deadline).is_none());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        let id = scheduler.schedule_every(Duration::from_secs(1), ());

        assert!(scheduler.is_scheduled(id));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(!scheduler.is_scheduled(id));
    }

    #[test]
    fn late_registration_starts_from_current_time() {
        let mut scheduler = Scheduler::new();
        drain::<()>(&mut scheduler, Duration::from_secs(10));
        scheduler.schedule_every(Duration::from_secs(1), ());

        let fired = drain(&mut scheduler, Duration::from_secs(1));
        assert_eq!(fired[0].at, Duration::from_secs(11));
    }

    #[test]
    fn clock_saturates_instead_of_overflowing() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule_every(Duration::MAX - Duration::from_secs(1), 'x');

        let fired = drain(&mut scheduler, Duration::MAX);
        assert_eq!(fired.len(), 1);
        assert!(!scheduler.is_scheduled(id));
        assert_eq!(scheduler.now(), Duration::MAX);

        let late = drain::<char>(&mut scheduler, Duration::from_secs(1));
        assert!(late.is_empty());
        assert_eq!(scheduler.now(), Duration::MAX);
    }
}
