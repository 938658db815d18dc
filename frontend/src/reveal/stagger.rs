use std::cell::Cell;

use log::debug;

use crate::reveal::controller::RevealController;
use crate::reveal::scheduler::Scheduler;

/// Delay schedule shared by the items of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerSchedule {
    pub base_delay_ms: u32,
    pub step_ms: u32,
}

impl StaggerSchedule {
    pub fn new(base_delay_ms: u32, step_ms: u32) -> Self {
        Self { base_delay_ms, step_ms }
    }

    /// `base + index * step`, saturating instead of wrapping.
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay_ms.saturating_add(index.saturating_mul(self.step_ms))
    }
}

/// Sibling units that reveal together off a single container observation,
/// each one `step_ms` after the previous.
pub struct StaggerGroup<S: Scheduler> {
    schedule: StaggerSchedule,
    items: Vec<RevealController<S>>,
    triggered: Cell<bool>,
}

impl<S: Scheduler> StaggerGroup<S> {
    pub fn new(schedule: StaggerSchedule) -> Self {
        Self { schedule, items: Vec::new(), triggered: Cell::new(false) }
    }

    /// Append a unit. Call in visual order; the unit's delay is fixed here
    /// from its position. Returns that position.
    pub fn register(&mut self, controller: RevealController<S>) -> usize {
        let index = self.items.len();
        controller.set_delay(self.schedule.delay_for(index));
        self.items.push(controller);
        index
    }

    /// Delays currently assigned, in document order.
    #[cfg(test)]
    pub fn delays(&self) -> Vec<u32> {
        self.items.iter().map(|c| c.unit().delay_ms).collect()
    }

    #[cfg(test)]
    pub fn states(&self) -> Vec<crate::reveal::controller::RevealState> {
        self.items.iter().map(|c| c.state()).collect()
    }

    #[cfg(test)]
    pub fn has_triggered(&self) -> bool {
        self.triggered.get()
    }

    /// The container entered the viewport: start every item's countdown.
    pub fn trigger_all(&self) {
        if !self.triggered.replace(true) {
            debug!("stagger group of {} triggered", self.items.len());
        }
        for (index, item) in self.items.iter().enumerate() {
            item.set_delay(self.schedule.delay_for(index));
            item.handle_intersection(true);
        }
    }

    /// The container left the viewport. Only has an effect on items that
    /// were built without `trigger_once`.
    pub fn release_all(&self) {
        for item in &self.items {
            item.handle_intersection(false);
        }
    }

    pub fn cancel(&self) {
        for item in &self.items {
            item.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::Callback;

    use super::*;
    use crate::reveal::controller::{RevealState, RevealUnit};
    use crate::reveal::scheduler::manual::ManualScheduler;

    type Log = Rc<RefCell<Vec<(usize, RevealState)>>>;

    fn group(count: usize, schedule: StaggerSchedule) -> (StaggerGroup<ManualScheduler>, ManualScheduler, Log) {
        let scheduler = ManualScheduler::default();
        let log: Log = Rc::default();
        let mut group = StaggerGroup::new(schedule);
        for i in 0..count {
            let sink = log.clone();
            let on_change = Callback::from(move |s| sink.borrow_mut().push((i, s)));
            group.register(RevealController::new(RevealUnit::new(0), true, scheduler.clone(), on_change));
        }
        (group, scheduler, log)
    }

    #[test]
    fn delay_formula() {
        let s = StaggerSchedule::new(250, 100);
        assert_eq!(s.delay_for(0), 250);
        assert_eq!(s.delay_for(3), 550);
        assert_eq!(StaggerSchedule::new(u32::MAX, 1).delay_for(5), u32::MAX);
    }

    #[test]
    fn four_items_get_stepped_delays() {
        let (group, _, _) = group(4, StaggerSchedule::new(50, 100));
        assert_eq!(group.delays(), vec![50, 150, 250, 350]);
    }

    #[test]
    fn single_trigger_reveals_in_document_order() {
        let (group, scheduler, log) = group(4, StaggerSchedule::new(0, 100));
        group.trigger_all();
        // Item 0 has no delay and flips straight away
        assert_eq!(group.states()[0], RevealState::Revealed);
        assert_eq!(scheduler.requested_delays(), vec![100, 200, 300]);

        scheduler.advance(150);
        assert_eq!(
            group.states(),
            vec![RevealState::Revealed, RevealState::Revealed, RevealState::Pending, RevealState::Pending]
        );
        scheduler.advance(1_000);
        let order: Vec<usize> = log.borrow().iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert!(group.has_triggered());
    }

    #[test]
    fn retrigger_does_not_duplicate() {
        let (group, scheduler, log) = group(3, StaggerSchedule::new(10, 10));
        group.trigger_all();
        group.trigger_all();
        scheduler.advance(100);
        group.trigger_all();
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn cancel_stops_remaining_items() {
        let (group, scheduler, log) = group(4, StaggerSchedule::new(0, 100));
        group.trigger_all();
        scheduler.advance(100);
        group.cancel();
        group.cancel();
        scheduler.advance(1_000);
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(scheduler.pending(), 0);
    }
}
