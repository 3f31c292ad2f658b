//! Deferred weapon task scheduler.
//!
//! The timed parts of the firing cycle (cooldown re-arm, burst follow-up
//! shots, reload completion) run as tasks scheduled for a future tick
//! rather than as callbacks. Tasks due on the same tick run in the order
//! they were scheduled, so each weapon's sequence stays first-in first-out.

/// What a scheduled task does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Clear the cooldown latch so the weapon can fire again.
    RearmFire,
    /// Fire the next shot of an ongoing burst.
    ContinueBurst,
    /// Finish a reload and move rounds from reserve to magazine.
    CompleteReload,
}

/// One pending task, bound to a weapon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub due_tick: u64,
    /// Global scheduling order, used to break same-tick ties.
    pub seq: u64,
    pub slot: usize,
    pub kind: TaskKind,
}

#[derive(Debug, Default)]
pub struct TaskScheduler {
    pending: Vec<ScheduledTask>,
    next_seq: u64,
}

impl TaskScheduler {
    pub fn schedule(&mut self, due_tick: u64, slot: usize, kind: TaskKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(ScheduledTask {
            due_tick,
            seq,
            slot,
            kind,
        });
    }

    /// Remove and return every task due at or before `tick`, ordered by
    /// due tick and then by scheduling order.
    pub fn drain_due(&mut self, tick: u64) -> Vec<ScheduledTask> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_tick <= tick {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|task| (task.due_tick, task.seq));
        due
    }

    /// Drop every pending task for a weapon slot. Used when the slot is
    /// swapped out; tasks for other slots are untouched.
    pub fn cancel_slot(&mut self, slot: usize) {
        self.pending.retain(|task| task.slot != slot);
    }

    pub fn pending_for_slot(&self, slot: usize) -> usize {
        self.pending.iter().filter(|task| task.slot == slot).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_only_due_tasks() {
        let mut scheduler = TaskScheduler::default();
        scheduler.schedule(5, 0, TaskKind::RearmFire);
        scheduler.schedule(10, 0, TaskKind::CompleteReload);

        let due = scheduler.drain_due(5);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, TaskKind::RearmFire);
        assert_eq!(scheduler.pending_for_slot(0), 1);
    }

    #[test]
    fn test_same_tick_tasks_run_in_scheduling_order() {
        let mut scheduler = TaskScheduler::default();
        scheduler.schedule(6, 1, TaskKind::RearmFire);
        scheduler.schedule(6, 1, TaskKind::ContinueBurst);

        let due = scheduler.drain_due(6);
        assert_eq!(
            due.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TaskKind::RearmFire, TaskKind::ContinueBurst],
            "re-arm was scheduled first, so it must run first"
        );
    }

    #[test]
    fn test_overdue_tasks_sort_before_current() {
        let mut scheduler = TaskScheduler::default();
        scheduler.schedule(8, 0, TaskKind::ContinueBurst);
        scheduler.schedule(3, 0, TaskKind::RearmFire);

        let due = scheduler.drain_due(8);
        assert_eq!(due[0].due_tick, 3);
        assert_eq!(due[1].due_tick, 8);
    }

    #[test]
    fn test_cancel_slot_leaves_other_slots_alone() {
        let mut scheduler = TaskScheduler::default();
        scheduler.schedule(4, 0, TaskKind::CompleteReload);
        scheduler.schedule(4, 1, TaskKind::RearmFire);
        scheduler.schedule(9, 0, TaskKind::RearmFire);

        scheduler.cancel_slot(0);
        assert_eq!(scheduler.pending_for_slot(0), 0);
        assert_eq!(scheduler.pending_for_slot(1), 1);
    }
}
