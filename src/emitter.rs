//! Event emitter for embedding callbacks in Props.

use flume::Sender;

/// Event emitter that can be embedded in Props.
///
/// Clone this handle to build callbacks in your Props that dispatch
/// events when invoked (a button press, a keystroke, a navigation).
///
/// `Emitter` wraps an unbounded channel sender, so it is cheap to clone
/// and can be used from any thread, including the tasks spawned for
/// effects.
///
/// # Example
///
/// ```rust
/// use oxide_spa::{Emitter, MvuLogic, Effect};
///
/// enum Event { Click }
///
/// #[derive(Clone)]
/// struct Model { clicks: u32 }
///
/// struct Props {
///     clicks: u32,
///     on_click: Box<dyn Fn()>,
/// }
///
/// struct MyApp;
///
/// impl MvuLogic<Event, Model, Props> for MyApp {
///     fn init(&self, model: Model) -> (Model, Effect<Event>) {
///         (model, Effect::none())
///     }
///
///     fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
///         match event {
///             Event::Click => (Model { clicks: model.clicks + 1 }, Effect::none()),
///         }
///     }
///
///     fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
///         let emitter = emitter.clone();
///         Props {
///             clicks: model.clicks,
///             on_click: Box::new(move || emitter.emit(Event::Click)),
///         }
///     }
/// }
/// ```
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// Queues the event for the runtime. Events emitted after the runtime
    /// has been dropped are discarded.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            log::debug!("event dropped: runtime is no longer receiving");
        }
    }
}
