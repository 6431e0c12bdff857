//! Renderer abstraction for rendering Props.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for rendering Props.
///
/// Implement this trait to plug a display into the runtime: a terminal,
/// a DOM bridge, a test capture buffer.
///
/// [`render`](Self::render) is called after every model replacement with
/// fresh Props derived by [`MvuLogic::view`](crate::MvuLogic::view).
///
/// # Example
///
/// ```rust
/// use oxide_spa::Renderer;
///
/// struct Props {
///     message: &'static str,
/// }
///
/// struct ConsoleRenderer;
///
/// impl Renderer<Props> for ConsoleRenderer {
///     fn render(&mut self, props: Props) {
///         println!("{}", props.message);
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props.
    ///
    /// Props may contain callbacks (via [`Emitter`](crate::Emitter)) that
    /// dispatch new events.
    fn render(&mut self, props: Props);
}

impl<Props, R> Renderer<Props> for Box<R>
where
    R: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Behind the `testing` feature.
///
/// Clones share the same capture buffer, so hand one clone to the runtime
/// and keep another for assertions.
///
/// # Example
///
/// ```rust
/// use oxide_spa::{create_test_spawner, TestRenderer, TestMvuRuntime, MvuLogic, Effect, Emitter};
///
/// # struct Props { count: i32 }
/// #
/// # #[derive(Clone)]
/// # struct Model { count: i32 }
/// #
/// # enum Event { Inc }
/// #
/// # struct Logic;
/// #
/// # impl MvuLogic<Event, Model, Props> for Logic {
/// #     fn init(&self, m: Model) -> (Model, Effect<Event>) { (m, Effect::none()) }
/// #     fn update(&self, _e: Event, m: &Model) -> (Model, Effect<Event>) {
/// #         (Model { count: m.count + 1 }, Effect::none())
/// #     }
/// #     fn view(&self, m: &Model, _: &Emitter<Event>) -> Props {
/// #         Props { count: m.count }
/// #     }
/// # }
/// let renderer = TestRenderer::new();
///
/// let runtime = TestMvuRuntime::new(
///     Model { count: 0 },
///     Logic,
///     renderer.clone(),
///     create_test_spawner()
/// );
///
/// let _driver = runtime.run();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].count, 0);
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of renders so far.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access all captured renders, oldest first.
    ///
    /// The closure may invoke Props callbacks; the events they emit are
    /// queued and only processed on the next
    /// [`process_events`](crate::TestMvuDriver::process_events).
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Access the most recent render.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been rendered yet.
    pub fn with_last<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Props) -> R,
    {
        let renders = self.renders.lock();
        f(renders.last().expect("no props rendered yet"))
    }
}
