use gloo_timers::callback::Timeout;

/// Runs deferred work on the UI thread.
///
/// Dropping the returned task must cancel it if it has not run yet.
pub trait Scheduler: Clone + 'static {
    type Task: 'static;

    fn schedule(&self, delay_ms: u32, work: Box<dyn FnOnce()>) -> Self::Task;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Task = Timeout;

    fn schedule(&self, delay_ms: u32, work: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, work)
    }
}
