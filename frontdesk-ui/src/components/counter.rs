//! Counter Widget
//!
//! Standalone widget with one integer and two buttons. Mounted into its own
//! DOM node and shares nothing with the application shell.

use leptos::*;

/// Value shown when the widget is mounted
pub const INITIAL_COUNT: i64 = 1;

/// Counter state machine: one integer, two transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterState {
    value: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            value: INITIAL_COUNT,
        }
    }
}

impl CounterState {
    pub fn value(self) -> i64 {
        self.value
    }

    pub fn increment(self) -> Self {
        Self {
            value: self.value.saturating_add(1),
        }
    }

    pub fn decrement(self) -> Self {
        Self {
            value: self.value.saturating_sub(1),
        }
    }
}

/// Counter widget component
#[component]
pub fn Counter() -> impl IntoView {
    let count = create_rw_signal(CounterState::default());

    let decrease = move |_| count.update(|c| *c = c.decrement());
    let increase = move |_| count.update(|c| *c = c.increment());

    view! {
        <button on:click=decrease>"-"</button>
        <span style="padding-left: 12px; padding-right: 12px">
            {move || count.get().value()}
        </span>
        <button on:click=increase>"+"</button>
    }
}
