//! Declarative effect system for describing deferred event processing.

use core::future::Future;
use core::pin::Pin;

use crate::Emitter;

/// A unit of effect work, ready to be handed to a [`Spawner`](crate::Spawner).
pub type Task = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

type Run<Event> = Box<dyn FnOnce(Emitter<Event>) -> Task + Send + 'static>;

/// Declarative description of events to be processed.
///
/// Effects describe asynchronous or deferred work that will produce
/// events. They are returned from [`MvuLogic::init`](crate::MvuLogic::init)
/// and [`MvuLogic::update`](crate::MvuLogic::update) alongside the new model
/// state, and the runtime turns each one into at most one spawned [`Task`].
///
/// # Example
///
/// ```rust
/// use oxide_spa::Effect;
///
/// #[derive(Clone)]
/// enum Event {
///     LoadData,
///     DataLoaded(String),
///     LoadFailed(String),
/// }
///
/// // Trigger a follow-up event
/// let effect = Effect::just(Event::LoadData);
///
/// // Run a future and map its outcome to an event
/// let effect = Effect::perform(
///     async { Ok::<_, String>("cached".to_string()) },
///     Event::DataLoaded,
///     Event::LoadFailed,
/// );
///
/// // Combine multiple effects
/// let effect = Effect::batch(vec![
///     Effect::just(Event::LoadData),
///     Effect::just(Event::DataLoaded("cached".to_string())),
/// ]);
///
/// // No side effects
/// let effect: Effect<Event> = Effect::none();
/// ```
pub struct Effect<Event: Send>(Option<Run<Event>>);

impl<Event: Send + 'static> Effect<Event> {
    /// Create an empty effect.
    ///
    /// The runtime spawns nothing for it.
    pub fn none() -> Self {
        Self(None)
    }

    /// Whether this effect does no work at all.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Create an effect that emits a single event.
    ///
    /// Useful for triggering immediate follow-up events.
    pub fn just(event: Event) -> Self {
        Self(Some(Box::new(move |emitter: Emitter<Event>| -> Task {
            Box::pin(async move {
                emitter.emit(event);
            })
        })))
    }

    /// Run a fallible future and emit one event for its outcome.
    ///
    /// `on_success` maps the `Ok` value, `on_failure` maps the `Err` value.
    /// Exactly one event is emitted once the future resolves. There is no
    /// cancellation: a future that never resolves never emits.
    pub fn perform<T, E, Fut, S, F>(future: Fut, on_success: S, on_failure: F) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        S: FnOnce(T) -> Event + Send + 'static,
        F: FnOnce(E) -> Event + Send + 'static,
    {
        Self(Some(Box::new(move |emitter: Emitter<Event>| -> Task {
            Box::pin(async move {
                let event = match future.await {
                    Ok(value) => on_success(value),
                    Err(error) => on_failure(error),
                };
                emitter.emit(event);
            })
        })))
    }

    /// Combine multiple effects into a single effect.
    ///
    /// All tasks are polled concurrently; effects that complete immediately
    /// emit in the order they were given.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        let effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        if effects.is_empty() {
            return Self::none();
        }

        Self(Some(Box::new(move |emitter: Emitter<Event>| -> Task {
            let tasks: Vec<Task> = effects
                .into_iter()
                .filter_map(|effect| effect.execute(&emitter))
                .collect();
            Box::pin(async move {
                futures::future::join_all(tasks).await;
            })
        })))
    }

    /// Bind this effect to an emitter, producing the task to spawn.
    ///
    /// Returns `None` for [`Effect::none`].
    pub fn execute(self, emitter: &Emitter<Event>) -> Option<Task> {
        self.0.map(|run| run(emitter.clone()))
    }
}

impl<Event: Send + 'static> Default for Effect<Event> {
    fn default() -> Self {
        Self::none()
    }
}
