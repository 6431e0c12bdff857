//! A sidebar-navigated demo application on a small Model-View-Update (MVU)
//! runtime.
//!
//! The crate has two layers:
//!
//! - the runtime ([`MvuRuntime`], [`MvuLogic`], [`Effect`], [`Emitter`],
//!   [`Renderer`], [`Spawner`]): a single-consumer event loop that feeds
//!   each event through `update`, re-renders from the new model and spawns
//!   the resulting effect;
//! - the application ([`app`]): four pages (home, counter, text input, book
//!   table), a router, and a books fetch through an injected
//!   [`BookClient`](client::BookClient).
//!
//! [`console`] hosts the application in a terminal.
//!
//! ## Example
//!
//! ```rust
//! use oxide_spa::app::{AppProps, Book, Model, SpaApp};
//! use oxide_spa::client::{BookClient, FetchError};
//! use oxide_spa::{create_test_spawner, TestMvuRuntime, TestRenderer};
//!
//! struct NoBooks;
//!
//! #[async_trait::async_trait]
//! impl BookClient for NoBooks {
//!     async fn fetch_books(&self) -> Result<Vec<Book>, FetchError> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let renderer = TestRenderer::<AppProps>::new();
//! let runtime = TestMvuRuntime::new(
//!     Model::default(),
//!     SpaApp::new(NoBooks),
//!     renderer.clone(),
//!     create_test_spawner(),
//! );
//!
//! let mut driver = runtime.run();
//! driver.process_events();
//!
//! assert_eq!(driver.model().books, Some(Vec::new()));
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod console;
pub mod logging;

mod effect;
mod emitter;
mod logic;
mod renderer;
mod runtime;

pub use effect::{Effect, Task};
pub use emitter::Emitter;
pub use logic::MvuLogic;
pub use renderer::Renderer;
pub use runtime::{MvuRuntime, Spawner};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, test_spawner_fn, QueuedSpawner, TestMvuDriver, TestMvuRuntime};
