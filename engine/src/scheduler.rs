//! Logical-clock scheduler for timed game phases.
//!
//! Crash's growth curve, Plinko's row-by-row drop, and the shell game's
//! mixing delay are sequences of scheduled callbacks. Platform timers are
//! replaced by an explicit scheduler over a monotonic millisecond clock:
//! the caller advances the clock and applies whatever tasks come due, so
//! round-boundary cancellation and simulated-time testing are both
//! straightforward.
//!
//! Every task is tagged with the [`RoundId`] that scheduled it. Resetting
//! a session cancels its round's tasks, and sessions additionally ignore
//! delivered tasks whose round id is stale, so a timer that survives a
//! reset can never mutate a newer round's state.

/// Identifies one round of one session. Monotonically increasing; a reset
/// moves the session to a fresh round id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(u64);

impl RoundId {
    pub fn first() -> Self {
        Self(1)
    }

    /// The id of the following round.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Handle to a scheduled task, usable for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// A task that has come due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DueTask<T> {
    pub id: TaskId,
    pub round: RoundId,
    pub due_ms: u64,
    pub payload: T,
}

struct Pending<T> {
    id: TaskId,
    round: RoundId,
    due_ms: u64,
    payload: T,
}

/// Cancellable task queue over a caller-driven millisecond clock.
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// The current logical time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks that have not yet fired or been cancelled.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Schedule `payload` to fire `delay_ms` from now on behalf of `round`.
    pub fn schedule_in(&mut self, round: RoundId, delay_ms: u64, payload: T) -> TaskId {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Pending {
            id,
            round,
            due_ms,
            payload,
        });
        id
    }

    /// Cancel a single task. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Cancel every pending task belonging to `round`. Returns how many
    /// were dropped.
    pub fn cancel_round(&mut self, round: RoundId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.round != round);
        before - self.tasks.len()
    }

    /// Advance the clock to `now_ms` and drain every task that has come
    /// due, ordered by due time (scheduling order breaks ties). The clock
    /// never moves backwards; a stale `now_ms` drains nothing new.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<DueTask<T>> {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        let now = self.now_ms;
        let mut due: Vec<DueTask<T>> = Vec::new();
        let mut remaining = Vec::with_capacity(self.tasks.len());
        for task in self.tasks.drain(..) {
            if task.due_ms <= now {
                due.push(DueTask {
                    id: task.id,
                    round: task.round,
                    due_ms: task.due_ms,
                    payload: task.payload,
                });
            } else {
                remaining.push(task);
            }
        }
        self.tasks = remaining;
        due.sort_by_key(|task| (task.due_ms, task.id.0));
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_fire_in_due_order() {
        let mut sched: Scheduler<&str> = Scheduler::new();
        let round = RoundId::first();
        sched.schedule_in(round, 500, "late");
        sched.schedule_in(round, 100, "early");
        let due = sched.advance_to(1_000);
        let payloads: Vec<_> = due.iter().map(|t| t.payload).collect();
        assert_eq!(payloads, vec!["early", "late"]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn tasks_not_yet_due_stay_pending() {
        let mut sched: Scheduler<u8> = Scheduler::new();
        let round = RoundId::first();
        sched.schedule_in(round, 2_000, 1);
        assert!(sched.advance_to(1_999).is_empty());
        assert_eq!(sched.pending(), 1);
        let due = sched.advance_to(2_000);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].due_ms, 2_000);
    }

    #[test]
    fn cancel_round_drops_only_that_round() {
        let mut sched: Scheduler<u8> = Scheduler::new();
        let old = RoundId::first();
        let new = old.next();
        sched.schedule_in(old, 100, 1);
        sched.schedule_in(old, 200, 2);
        sched.schedule_in(new, 300, 3);
        assert_eq!(sched.cancel_round(old), 2);
        let due = sched.advance_to(1_000);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].round, new);
    }

    #[test]
    fn cancel_single_task() {
        let mut sched: Scheduler<u8> = Scheduler::new();
        let round = RoundId::first();
        let id = sched.schedule_in(round, 100, 1);
        assert!(sched.cancel(id));
        assert!(!sched.cancel(id));
        assert!(sched.advance_to(1_000).is_empty());
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut sched: Scheduler<u8> = Scheduler::new();
        sched.advance_to(5_000);
        sched.advance_to(1_000);
        assert_eq!(sched.now_ms(), 5_000);
        // A task scheduled "in 0 ms" is due at the real clock position.
        let round = RoundId::first();
        sched.schedule_in(round, 0, 9);
        let due = sched.advance_to(1_000);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].due_ms, 5_000);
    }
}
