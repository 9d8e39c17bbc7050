//! Event types and sinks for observing editor activity.
//!
//! [`crate::edit::editor::TerrainEditor`] emits [`EditorEvent`]s from its `*_with_events`
//! methods. Sinks collect, forward, or drop them.
use glam::IVec2;

use crate::edit::brush::Tool;

/// Describes events emitted by the terrain editor.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Emitted after a full map was generated.
    MapGenerated {
        /// Seed that produced the map.
        seed: u32,
        /// Grid side length in cells.
        size: usize,
        /// Wall cells in the smoothed tree layer.
        wall_count: usize,
    },

    /// Emitted when a pointer press starts a stroke.
    StrokeStarted {
        /// Tool active for the stroke.
        tool: Tool,
        /// Grid cell under the pointer.
        cell: IVec2,
    },

    /// Emitted when a pointer event painted at least one new cell.
    CellsPainted {
        /// Tool used.
        tool: Tool,
        /// Cells painted by this event, in brush order.
        cells: Vec<IVec2>,
    },

    /// Emitted when a stroke ends and the edited layers were rebuilt.
    StrokeFinished {
        /// Distinct cells painted during the stroke.
        painted: usize,
        /// Automaton passes applied to the tree layer.
        iterations: usize,
    },

    /// Non-fatal warning generated while editing.
    Warning {
        /// Context string (e.g. the operation name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`EditorEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: EditorEvent);

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = EditorEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: EditorEvent) {}
}

/// Boxed sinks, so one [`MultiSink`] can hold sinks of different types.
impl<S: EventSink + ?Sized> EventSink for Box<S> {
    #[inline]
    fn send(&mut self, event: EditorEvent) {
        (**self).send(event);
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(EditorEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(EditorEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(EditorEvent),
{
    #[inline]
    fn send(&mut self, event: EditorEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<EditorEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<EditorEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[EditorEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: EditorEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn sinks(&self) -> &[S] {
        &self.sinks
    }

    pub fn into_sinks(self) -> Vec<S> {
        self.sinks
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: EditorEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }
}
