use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};

use zoneflight_shared::GameInstant;

/// Handle to a scheduled task, doubling as its cancellation token
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct TaskKey(u64);

impl TaskKey {
    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

struct ScheduledTask<T> {
    interval: Option<Duration>,
    task: T,
}

/// Delayed and repeating tasks, fired in due order by [`TaskScheduler::pop_due`].
///
/// A cancelled key is forgotten immediately, so a cancelled task can never
/// fire, even if it was already due.
pub(crate) struct TaskScheduler<T> {
    next_key: u64,
    queue: BTreeMap<(GameInstant, TaskKey), ScheduledTask<T>>,
    due_times: HashMap<TaskKey, GameInstant>,
}

impl<T: Clone> TaskScheduler<T> {
    pub fn new() -> Self {
        Self {
            next_key: 0,
            queue: BTreeMap::new(),
            due_times: HashMap::new(),
        }
    }

    /// Fires once, `delay` after `now`
    pub fn schedule_delayed(&mut self, now: &GameInstant, delay: Duration, task: T) -> TaskKey {
        self.insert(now.add(delay), None, task)
    }

    /// Fires every `interval`, first at `now + interval`, until cancelled
    pub fn schedule_repeating(
        &mut self,
        now: &GameInstant,
        interval: Duration,
        task: T,
    ) -> TaskKey {
        // a zero interval would re-fire forever inside one pop_due loop
        let interval = interval.max(Duration::from_millis(1));
        self.insert(now.add(interval), Some(interval), task)
    }

    pub fn cancel(&mut self, key: &TaskKey) -> bool {
        let Some(due) = self.due_times.remove(key) else {
            return false;
        };
        self.queue.remove(&(due, *key));
        true
    }

    pub fn is_scheduled(&self, key: &TaskKey) -> bool {
        self.due_times.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.due_times.len()
    }

    /// Removes and returns the earliest task due at or before `now`. A
    /// repeating task is re-armed one interval after its previous due time,
    /// so a late caller still observes every step.
    pub fn pop_due(&mut self, now: &GameInstant) -> Option<(TaskKey, GameInstant, T)> {
        let (&(due, key), _) = self.queue.first_key_value()?;
        if due > *now {
            return None;
        }

        let scheduled = self.queue.remove(&(due, key))?;
        self.due_times.remove(&key);

        if let Some(interval) = scheduled.interval {
            let next_due = due.add(interval);
            self.due_times.insert(key, next_due);
            self.queue.insert(
                (next_due, key),
                ScheduledTask {
                    interval: Some(interval),
                    task: scheduled.task.clone(),
                },
            );
        }

        Some((key, due, scheduled.task))
    }

    fn insert(&mut self, due: GameInstant, interval: Option<Duration>, task: T) -> TaskKey {
        let key = TaskKey(self.next_key);
        self.next_key += 1;

        self.due_times.insert(key, due);
        self.queue.insert((due, key), ScheduledTask { interval, task });
        key
    }
}
