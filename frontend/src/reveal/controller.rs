use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use yew::Callback;

use crate::reveal::scheduler::Scheduler;

static NEXT_UNIT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// CSS class the view layer hangs its initial/final styles on.
    pub fn class(self) -> &'static str {
        match self {
            RevealState::Pending => "reveal--pending",
            RevealState::Revealed => "reveal--revealed",
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// One element eligible for a visibility-triggered transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealUnit {
    pub id: u64,
    pub state: RevealState,
    pub delay_ms: u32,
}

impl RevealUnit {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            id: NEXT_UNIT_ID.fetch_add(1, Ordering::Relaxed),
            state: RevealState::Pending,
            delay_ms,
        }
    }
}

struct ControllerInner<T> {
    unit: RevealUnit,
    trigger_once: bool,
    pending: Option<T>,
    in_flight: bool,
    torn_down: bool,
    on_change: Callback<RevealState>,
}

/// Owns the `Pending`/`Revealed` state of one unit.
///
/// Driven by intersection reports; after an "entered" report it waits
/// `delay_ms` on the scheduler and then flips to `Revealed`, notifying
/// `on_change`. Once cancelled it never touches state or calls back again.
pub struct RevealController<S: Scheduler> {
    inner: Rc<RefCell<ControllerInner<S::Task>>>,
    scheduler: S,
}

impl<S: Scheduler> Clone for RevealController<S> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(), scheduler: self.scheduler.clone() }
    }
}

impl<S: Scheduler> RevealController<S> {
    pub fn new(
        unit: RevealUnit,
        trigger_once: bool,
        scheduler: S,
        on_change: Callback<RevealState>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ControllerInner {
                unit,
                trigger_once,
                pending: None,
                in_flight: false,
                torn_down: false,
                on_change,
            })),
            scheduler,
        }
    }

    pub fn state(&self) -> RevealState {
        self.inner.borrow().unit.state
    }

    #[cfg(test)]
    pub fn unit(&self) -> RevealUnit {
        self.inner.borrow().unit.clone()
    }

    /// Change the delay used by the next scheduled reveal.
    pub fn set_delay(&self, delay_ms: u32) {
        self.inner.borrow_mut().unit.delay_ms = delay_ms;
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.inner.borrow().torn_down
    }

    pub fn handle_intersection(&self, entered: bool) {
        if entered {
            self.enter();
        } else {
            self.leave();
        }
    }

    fn enter(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.torn_down || inner.in_flight || inner.unit.state.is_revealed() {
            return;
        }

        let delay_ms = inner.unit.delay_ms;
        if delay_ms == 0 {
            inner.unit.state = RevealState::Revealed;
            let on_change = inner.on_change.clone();
            drop(inner);
            on_change.emit(RevealState::Revealed);
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let task = self.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    complete(&inner);
                }
            }),
        );
        inner.pending = Some(task);
        inner.in_flight = true;
    }

    fn leave(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.torn_down || inner.trigger_once {
            return;
        }
        inner.pending = None;
        inner.in_flight = false;
        if inner.unit.state.is_revealed() {
            inner.unit.state = RevealState::Pending;
            let on_change = inner.on_change.clone();
            drop(inner);
            on_change.emit(RevealState::Pending);
        }
    }

    /// Stop for good: drops any pending timer. Calling it again is a no-op.
    pub fn cancel(&self) {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            return;
        };
        inner.torn_down = true;
        inner.in_flight = false;
        inner.pending = None;
    }
}

fn complete<T>(inner: &RefCell<ControllerInner<T>>) {
    let on_change = {
        let mut inner = inner.borrow_mut();
        if inner.torn_down || !inner.in_flight {
            return;
        }
        // The timer handle stays in `pending` until the next reset; it is
        // still running right now.
        inner.in_flight = false;
        inner.unit.state = RevealState::Revealed;
        inner.on_change.clone()
    };
    on_change.emit(RevealState::Revealed);
}
