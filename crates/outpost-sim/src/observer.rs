//! Simulation observer trait for event delivery and progress reporting.

use outpost_core::Tick;

use crate::SimEvent;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event printer
///
/// ```rust,ignore
/// struct EventPrinter;
///
/// impl SimObserver for EventPrinter {
///     fn on_event(&mut self, tick: Tick, event: &SimEvent) {
///         println!("{tick}: {event:?}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every event, in occurrence order.
    fn on_event(&mut self, _tick: Tick, _event: &SimEvent) {}

    /// Called after all of a tick's processing.
    fn on_tick_end(&mut self, _tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `step`
/// but don't care about callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that records every event with its tick.
///
/// The poll-style alternative to implementing the trait: step the sim, then
/// inspect or drain [`EventLog::events`].
#[derive(Default)]
pub struct EventLog {
    pub events: Vec<(Tick, SimEvent)>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimObserver for EventLog {
    fn on_event(&mut self, tick: Tick, event: &SimEvent) {
        self.events.push((tick, *event));
    }
}
