use super::{Message, Model};

/// Side effect requested by [`update`], described as data.
///
/// [`SpaApp`](super::SpaApp) turns it into a runnable
/// [`Effect`](crate::Effect) with the injected client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    FetchBooks,
}

/// Pure update function: applies a message to the model and returns the
/// next model plus at most one command.
pub fn update(model: &Model, message: Message) -> (Model, Command) {
    let mut next = model.clone();

    let command = match message {
        Message::SetPage(page) => {
            next.page = page;
            Command::None
        }
        // No declared bounds; wrap like the host integer instead of panicking.
        Message::Increment => {
            next.counter = next.counter.wrapping_add(1);
            Command::None
        }
        Message::Decrement => {
            next.counter = next.counter.wrapping_sub(1);
            Command::None
        }
        Message::SetCounter(value) => {
            next.counter = value;
            Command::None
        }
        // Leaves `label` alone.
        Message::ResetInput => {
            next.input_string.clear();
            Command::None
        }
        Message::SetLabel(label) => {
            next.label = label;
            Command::None
        }
        // Every request issues a new fetch; earlier ones are not cancelled.
        Message::GetBooks => {
            next.books = None;
            Command::FetchBooks
        }
        Message::GotBooks(books) => {
            next.books = Some(books);
            Command::None
        }
        Message::Error(error) => {
            next.error = Some(error.to_string());
            Command::None
        }
        Message::ClearError => {
            next.error = None;
            Command::None
        }
    };

    (next, command)
}
