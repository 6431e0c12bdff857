//! The MVU runtime that orchestrates the event loop.

use flume::Receiver;

use crate::effect::Task;
use crate::{Effect, Emitter, MvuLogic, Renderer};

#[cfg(any(test, feature = "testing"))]
use std::collections::VecDeque;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// A spawner for executing effect tasks on an async runtime.
///
/// This keeps the runtime independent of any particular executor (tokio,
/// async-std, a test executor that blocks in place).
///
/// Function pointers and closures implement this trait via the blanket
/// implementation.
pub trait Spawner {
    /// Spawn a task on the async runtime.
    fn spawn(&self, future: Task);
}

impl<F> Spawner for F
where
    F: Fn(Task),
{
    fn spawn(&self, future: Task) {
        self(future)
    }
}

/// The MVU runtime that orchestrates the event loop.
///
/// It:
/// 1. Initializes the Model and initial Effect via [`MvuLogic::init`]
/// 2. Processes events one at a time, in emission order, through [`MvuLogic::update`]
/// 3. Reduces each new Model to Props via [`MvuLogic::view`]
/// 4. Delivers Props to the [`Renderer`]
/// 5. Hands the resulting Effect to the [`Spawner`]
///
/// The loop is the only writer of the model. Effects never see it; they
/// report back by emitting events through the runtime's [`Emitter`].
///
/// For tests with manual control, use [`TestMvuRuntime`] with a
/// [`crate::TestRenderer`].
///
/// `Logic` turns `Event`s into new `Model`s and `Props`; `Render` receives
/// every `Props`; `Spawn` runs the tasks produced by effects.
pub struct MvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send,
    Model: Clone,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Event>,
    model: Model,
    emitter: Emitter<Event>,
    spawner: Spawn,
    _props: core::marker::PhantomData<Props>,
}

impl<Event, Model, Props, Logic, Render, Spawn> MvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    /// Create a new runtime.
    ///
    /// Nothing is rendered until [`MvuRuntime::run`] is awaited.
    ///
    /// `init_model` is handed to [`MvuLogic::init`] first; `spawner` must be
    /// able to drive futures on whatever executor the host uses.
    pub fn new(init_model: Model, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        MvuRuntime {
            logic,
            renderer,
            event_receiver,
            model: init_model,
            emitter: Emitter::new(event_sender),
            spawner,
            _props: core::marker::PhantomData,
        }
    }

    /// A handle for dispatching events from outside the view, such as a
    /// host reacting to browser navigation.
    pub fn emitter(&self) -> Emitter<Event> {
        self.emitter.clone()
    }

    /// Initialize the runtime and run the event processing loop.
    ///
    /// - Uses [`MvuLogic::init`] to create the first model and effect.
    /// - Renders the initial Props.
    /// - Spawns the initial effect.
    /// - Processes queued events until the future is dropped.
    ///
    /// Events can be emitted from any thread, but are always processed
    /// sequentially on the task awaiting this future.
    pub async fn run(&mut self) {
        log::info!("mvu runtime started");
        self.start();

        while let Ok(event) = self.event_receiver.recv_async().await {
            self.step(event);
        }

        log::info!("event channel closed, mvu runtime stopped");
    }

    fn start(&mut self) {
        let (init_model, init_effect) = self.logic.init(self.model.clone());

        let initial_props = self.logic.view(&init_model, &self.emitter);
        self.renderer.render(initial_props);

        self.model = init_model;
        self.spawn(init_effect);
    }

    fn step(&mut self, event: Event) {
        let (new_model, effect) = self.logic.update(event, &self.model);

        let props = self.logic.view(&new_model, &self.emitter);
        self.renderer.render(props);

        self.model = new_model;
        self.spawn(effect);
    }

    fn spawn(&self, effect: Effect<Event>) {
        if let Some(task) = effect.execute(&self.emitter) {
            self.spawner.spawn(task);
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner function that executes tasks synchronously.
///
/// Blocks on the task immediately rather than spawning it, so any event
/// the effect emits is already queued when `spawn` returns.
pub fn test_spawner_fn(fut: Task) {
    futures::executor::block_on(fut);
}

#[cfg(any(test, feature = "testing"))]
/// Creates a test spawner that executes tasks synchronously.
///
/// See [`test_spawner_fn`]. For tests that need to observe state while an
/// effect is still in flight, use [`QueuedSpawner`] instead.
pub fn create_test_spawner() -> fn(Task) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
/// Spawner that holds tasks until the test decides to run them.
///
/// Clones share one queue: give one clone to the runtime and keep another
/// to complete effects in any order.
#[derive(Clone)]
pub struct QueuedSpawner {
    tasks: Arc<Mutex<VecDeque<Task>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Default for QueuedSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl QueuedSpawner {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Number of spawned tasks that have not run yet.
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Run the oldest pending task to completion. Returns `false` if none.
    pub fn run_next(&self) -> bool {
        let task = self.tasks.lock().pop_front();
        Self::block_on(task)
    }

    /// Run the newest pending task to completion. Returns `false` if none.
    pub fn run_last(&self) -> bool {
        let task = self.tasks.lock().pop_back();
        Self::block_on(task)
    }

    /// Run every pending task, oldest first.
    pub fn run_all(&self) {
        while self.run_next() {}
    }

    fn block_on(task: Option<Task>) -> bool {
        match task {
            Some(task) => {
                futures::executor::block_on(task);
                true
            }
            None => false,
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Spawner for QueuedSpawner {
    fn spawn(&self, future: Task) {
        self.tasks.lock().push_back(future);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime driver for manual event processing control.
///
/// Returned by [`TestMvuRuntime::run`].
pub struct TestMvuDriver<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render, Spawn>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render, Spawn> TestMvuDriver<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    /// Process all queued events.
    ///
    /// Events emitted while processing (including by effects that complete
    /// synchronously) are processed too, until the queue is empty.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.runtime.event_receiver.try_recv() {
            self.runtime.step(event);
        }
    }

    /// Emitter for dispatching events directly, bypassing Props callbacks.
    pub fn emitter(&self) -> Emitter<Event> {
        self.runtime.emitter()
    }

    /// The current model, as last stored by the loop.
    pub fn model(&self) -> &Model {
        &self.runtime.model
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime for MVU with manual event processing control.
///
/// Unlike [`MvuRuntime`], this runtime does not process events as they are
/// emitted. Tests call [`process_events`](TestMvuDriver::process_events) on
/// the returned driver instead.
///
/// ```rust
/// use oxide_spa::{Emitter, Effect, Renderer, MvuLogic, TestMvuRuntime};
/// # enum Event { Increment }
/// # #[derive(Clone)]
/// # struct Model { count: i32 }
/// # struct Props { count: i32, on_click: Box<dyn Fn()> }
/// # struct MyApp;
/// # impl MvuLogic<Event, Model, Props> for MyApp {
/// #     fn init(&self, model: Model) -> (Model, Effect<Event>) { (model, Effect::none()) }
/// #     fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
/// #         (Model { count: model.count + 1 }, Effect::none())
/// #     }
/// #     fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
/// #         let e = emitter.clone();
/// #         Props { count: model.count, on_click: Box::new(move || e.emit(Event::Increment)) }
/// #     }
/// # }
/// # struct NullRenderer;
/// # impl Renderer<Props> for NullRenderer { fn render(&mut self, _props: Props) {} }
/// use oxide_spa::create_test_spawner;
///
/// let runtime = TestMvuRuntime::new(
///     Model { count: 0 },
///     MyApp,
///     NullRenderer,
///     create_test_spawner()
/// );
/// let mut driver = runtime.run();
/// driver.process_events();
/// ```
pub struct TestMvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    runtime: MvuRuntime<Event, Model, Props, Logic, Render, Spawn>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render, Spawn> TestMvuRuntime<Event, Model, Props, Logic, Render, Spawn>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: MvuLogic<Event, Model, Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    /// Create a new test runtime.
    ///
    /// Pair it with a [`crate::TestRenderer`] and either
    /// [`create_test_spawner`] (effects finish inline) or a [`QueuedSpawner`]
    /// (effects wait until the test runs them).
    pub fn new(init_model: Model, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
        TestMvuRuntime {
            runtime: MvuRuntime::new(init_model, logic, renderer, spawner),
        }
    }

    /// Renders the initial state, spawns the initial effect and returns a
    /// driver for manual event processing.
    pub fn run(mut self) -> TestMvuDriver<Event, Model, Props, Logic, Render, Spawn> {
        self.runtime.start();
        TestMvuDriver {
            runtime: self.runtime,
        }
    }
}
