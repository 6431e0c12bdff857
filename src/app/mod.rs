//! The four-page application: model, messages, update, routing and view.

mod message;
mod model;
pub mod router;
mod update;
mod view;

use std::sync::Arc;

pub use message::Message;
pub use model::{Book, Model};
pub use router::Page;
pub use update::{update, Command};
pub use view::{
    view, AppProps, Binding, BookRow, Callback, CounterProps, DataProps, ErrorBanner, HomeProps,
    InputProps, NavLink, PageProps,
};

use crate::client::{BookClient, FetchError};
use crate::{Effect, Emitter, MvuLogic};

/// [`MvuLogic`] for the application, with the book source injected.
pub struct SpaApp<C: BookClient> {
    client: Arc<C>,
}

impl<C: BookClient + 'static> SpaApp<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    fn effect_for(&self, command: Command) -> Effect<Message> {
        match command {
            Command::None => Effect::none(),
            Command::FetchBooks => {
                let client = Arc::clone(&self.client);
                log::debug!("spawning books fetch");
                Effect::perform(
                    async move { client.fetch_books().await },
                    Message::GotBooks,
                    |error: FetchError| {
                        log::warn!("books fetch failed: {error}");
                        Message::Error(error)
                    },
                )
            }
        }
    }
}

impl<C: BookClient + 'static> MvuLogic<Message, Model, AppProps> for SpaApp<C> {
    /// Starts on whatever the host passed in and preloads the books.
    fn init(&self, model: Model) -> (Model, Effect<Message>) {
        (model, Effect::just(Message::GetBooks))
    }

    fn update(&self, message: Message, model: &Model) -> (Model, Effect<Message>) {
        log::debug!("update: {message:?}");
        let (model, command) = update(model, message);
        (model, self.effect_for(command))
    }

    fn view(&self, model: &Model, emitter: &Emitter<Message>) -> AppProps {
        view(model, emitter)
    }
}
