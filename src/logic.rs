//! Application logic trait: the contract between an app and the runtime.

use crate::{Effect, Emitter};

/// The three functions an application hands to the runtime.
///
/// - [`init`](Self::init) turns the startup model into the first model and
///   any bootstrap effect (a preload, for instance).
/// - [`update`](Self::update) folds one event into the model. It is the only
///   place state changes, and it must not perform I/O itself: anything
///   fallible is returned as an [`Effect`] whose outcome comes back as an
///   event.
/// - [`view`](Self::view) derives the Props handed to the
///   [`Renderer`](crate::Renderer). The [`Emitter`] lets Props carry
///   callbacks that dispatch events.
///
/// See [`SpaApp`](crate::app::SpaApp) for the implementation driving the
/// bundled four-page application.
pub trait MvuLogic<Event: Send, Model, Props> {
    /// Called once when the runtime starts, before the first render.
    fn init(&self, model: Model) -> (Model, Effect<Event>);

    /// Reduce an event and the current model to the next model plus effects.
    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>);

    /// Derive renderable Props from the model.
    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props;
}
