//! Yew bindings: each hook builds fresh controllers when its element mounts
//! and tears them down (observer and timers) when it unmounts.

use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::content::RevealSettings;
use crate::reveal::controller::{RevealController, RevealState, RevealUnit};
use crate::reveal::observer::{observe, ObserveOptions};
use crate::reveal::scheduler::TimeoutScheduler;
use crate::reveal::stagger::{StaggerGroup, StaggerSchedule};

/// Options for a standalone unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub observe: ObserveOptions,
    pub delay_ms: u32,
}

impl RevealOptions {
    pub fn from_settings(settings: &RevealSettings, delay_ms: u32) -> Self {
        Self { observe: settings.unit_options(), delay_ms }
    }
}

/// Options for a stagger group: how the container is watched, and the
/// per-item schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerOptions {
    pub observe: ObserveOptions,
    pub schedule: StaggerSchedule,
}

impl StaggerOptions {
    pub fn from_settings(settings: &RevealSettings) -> Self {
        Self { observe: settings.group_options(), schedule: settings.schedule() }
    }
}

/// Per-item states of one stagger group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealStates(Vec<RevealState>);

pub enum RevealAction {
    Reset(usize),
    Set(usize, RevealState),
}

impl RevealStates {
    pub fn get(&self, index: usize) -> RevealState {
        self.0.get(index).copied().unwrap_or_default()
    }
}

impl Reducible for RevealStates {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Reset(count) => Rc::new(RevealStates(vec![RevealState::Pending; count])),
            RevealAction::Set(index, state) => {
                if self.get(index) == state || index >= self.0.len() {
                    return self;
                }
                let mut states = self.0.clone();
                states[index] = state;
                Rc::new(RevealStates(states))
            }
        }
    }
}

/// Reveal state of the element behind `node`.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> RevealState {
    let state = use_state(RevealState::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let on_change = {
                    let setter = setter.clone();
                    Callback::from(move |s| setter.set(s))
                };
                let controller = RevealController::new(
                    RevealUnit::new(options.delay_ms),
                    options.observe.trigger_once,
                    TimeoutScheduler,
                    on_change,
                );
                let observation = node.cast::<Element>().map(|element| {
                    let controller = controller.clone();
                    observe(
                        &element,
                        options.observe,
                        Callback::from(move |entered| controller.handle_intersection(entered)),
                    )
                });
                if observation.is_none() {
                    // Nothing to watch; show the content rather than hide it
                    controller.handle_intersection(true);
                }
                // Fresh controller: Pending, or already Revealed if the initial check
                // found the element on screen
                setter.set(controller.state());
                move || {
                    if let Some(observation) = observation {
                        observation.cancel();
                    }
                    controller.cancel();
                }
            },
            (node, options),
        );
    }

    *state
}

/// States for `count` items revealed in order once `container` enters the
/// viewport. One observer per group, regardless of `count`.
#[hook]
pub fn use_stagger(
    container: NodeRef,
    count: usize,
    options: StaggerOptions,
) -> UseReducerHandle<RevealStates> {
    let states = use_reducer(|| RevealStates(vec![RevealState::Pending; count]));

    {
        let dispatcher = states.dispatcher();
        use_effect_with_deps(
            move |(container, count, options)| {
                dispatcher.dispatch(RevealAction::Reset(*count));

                let mut group = StaggerGroup::new(options.schedule);
                for index in 0..*count {
                    let dispatcher = dispatcher.clone();
                    group.register(RevealController::new(
                        RevealUnit::new(0),
                        options.observe.trigger_once,
                        TimeoutScheduler,
                        Callback::from(move |s| dispatcher.dispatch(RevealAction::Set(index, s))),
                    ));
                }
                let group = Rc::new(group);

                let observation = container.cast::<Element>().map(|element| {
                    let group = group.clone();
                    observe(
                        &element,
                        options.observe,
                        Callback::from(move |entered| {
                            if entered {
                                group.trigger_all();
                            } else {
                                group.release_all();
                            }
                        }),
                    )
                });
                if observation.is_none() {
                    group.trigger_all();
                }
                move || {
                    if let Some(observation) = observation {
                        observation.cancel();
                    }
                    group.cancel();
                }
            },
            (container, count, options),
        );
    }

    states
}
