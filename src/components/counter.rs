use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::observe::IntersectionWatcher;
use crate::stats::{self, CounterRun};

/// Counters wait until half the element is on screen before counting.
const COUNTER_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: AttrValue,
    /// Rendered after the number, e.g. `"+"`.
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// A headline figure that counts up from zero the first time it scrolls into
/// view. One-shot: the element is unobserved as soon as the run starts.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let text = use_state(|| "0".to_string());

    {
        let node = node.clone();
        let text = text.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let interval_handle = Rc::new(RefCell::new(None::<Interval>));
                let interval_for_cleanup = interval_handle.clone();

                let watcher = IntersectionWatcher::new(
                    COUNTER_THRESHOLD,
                    "0px",
                    move |element, observer| {
                        observer.unobserve(&element);

                        let run = Rc::new(RefCell::new(CounterRun::new(target)));
                        let text = text.clone();
                        let slot = interval_handle.clone();
                        let slot_for_ticks = interval_handle.clone();
                        let interval = Interval::new(stats::COUNTER_TICK_MS, move || {
                            let frame = run.borrow_mut().tick();
                            text.set(frame.text);
                            if frame.done {
                                // An interval cannot drop itself from inside
                                // its own callback; defer the stop.
                                let slot = slot_for_ticks.clone();
                                wasm_bindgen_futures::spawn_local(async move {
                                    if let Some(interval) = slot.borrow_mut().take() {
                                        drop(interval);
                                    }
                                });
                            }
                        });
                        *slot.borrow_mut() = Some(interval);
                    },
                );

                if let (Some(watcher), Some(element)) = (&watcher, node.cast::<Element>()) {
                    watcher.observe(&element);
                }

                move || {
                    drop(watcher);
                    if let Some(interval) = interval_for_cleanup.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="stat">
            <div class="stat-number">
                <span ref={node} class="counter" data-target={props.target.to_string()}>
                    { (*text).clone() }
                </span>
                { props.suffix.clone() }
            </div>
            <div class="stat-label">{ props.label.clone() }</div>
        </div>
    }
}
