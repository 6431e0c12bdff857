//! Pure view: a UI description derived from the model.
//!
//! Props carry plain data plus callbacks bound to an [`Emitter`]. Invoking
//! a callback only queues a [`Message`]; nothing here reads or writes state.

use super::{router, Book, Message, Model, Page};
use crate::Emitter;

/// A bound user action.
pub type Callback = Box<dyn Fn() + Send + Sync>;

/// Two-way binding for a text control: the current value and what to do
/// with new input.
pub struct Binding {
    pub value: String,
    on_input: Box<dyn Fn(&str) + Send + Sync>,
}

impl Binding {
    fn new(value: String, on_input: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            value,
            on_input: Box::new(on_input),
        }
    }

    /// Feed raw control input through the binding.
    pub fn input(&self, raw: &str) {
        (self.on_input)(raw)
    }
}

/// The whole screen: sidebar, current page, optional error banner.
pub struct AppProps {
    pub sidebar: Vec<NavLink>,
    pub content: PageProps,
    pub error: Option<ErrorBanner>,
}

pub struct NavLink {
    pub page: Page,
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
    pub on_select: Callback,
}

pub enum PageProps {
    Home(HomeProps),
    Counter(CounterProps),
    Input(InputProps),
    Data(DataProps),
}

impl PageProps {
    pub fn page(&self) -> Page {
        match self {
            PageProps::Home(_) => Page::Home,
            PageProps::Counter(_) => Page::Counter,
            PageProps::Input(_) => Page::Input,
            PageProps::Data(_) => Page::Data,
        }
    }
}

pub struct HomeProps {
    pub title: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub links: Vec<NavLink>,
}

pub struct CounterProps {
    pub value: Binding,
    pub on_decrement: Callback,
    pub on_increment: Callback,
}

pub struct InputProps {
    pub text: Binding,
    pub label: String,
    pub on_reset: Callback,
}

pub struct DataProps {
    pub rows: Vec<BookRow>,
    pub on_reload: Callback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookRow {
    /// Placeholder while `books` is `None`.
    Loading,
    Book(Book),
}

pub struct ErrorBanner {
    pub message: String,
    pub on_dismiss: Callback,
}

fn dispatch(emitter: &Emitter<Message>, message: Message) -> Callback {
    let emitter = emitter.clone();
    Box::new(move || emitter.emit(message.clone()))
}

fn nav_link(page: Page, current: Page, emitter: &Emitter<Message>) -> NavLink {
    NavLink {
        page,
        label: page.title(),
        href: router::format(page),
        active: page == current,
        on_select: dispatch(emitter, Message::SetPage(page)),
    }
}

/// Derive the screen for `model`.
pub fn view(model: &Model, emitter: &Emitter<Message>) -> AppProps {
    let sidebar = Page::ALL
        .iter()
        .map(|page| nav_link(*page, model.page, emitter))
        .collect();

    let content = match model.page {
        Page::Home => PageProps::Home(home(model, emitter)),
        Page::Counter => PageProps::Counter(counter(model, emitter)),
        Page::Input => PageProps::Input(input(model, emitter)),
        Page::Data => PageProps::Data(data(model, emitter)),
    };

    let error = model.error.as_ref().map(|message| ErrorBanner {
        message: message.clone(),
        on_dismiss: dispatch(emitter, Message::ClearError),
    });

    AppProps {
        sidebar,
        content,
        error,
    }
}

fn home(model: &Model, emitter: &Emitter<Message>) -> HomeProps {
    HomeProps {
        title: "Welcome",
        paragraphs: vec![
            "This application is a small demo of the Model-View-Update architecture.",
            "Every change goes through a message and a pure update function; the screen is redrawn from the resulting model.",
            "Pick a page from the sidebar or follow one of the links below.",
        ],
        links: Page::ALL
            .iter()
            .filter(|page| **page != Page::Home)
            .map(|page| nav_link(*page, model.page, emitter))
            .collect(),
    }
}

fn counter(model: &Model, emitter: &Emitter<Message>) -> CounterProps {
    let on_input = {
        let emitter = emitter.clone();
        move |raw: &str| match raw.trim().parse::<i32>() {
            Ok(value) => emitter.emit(Message::SetCounter(value)),
            Err(err) => log::debug!("ignoring counter input {raw:?}: {err}"),
        }
    };

    CounterProps {
        value: Binding::new(model.counter.to_string(), on_input),
        on_decrement: dispatch(emitter, Message::Decrement),
        on_increment: dispatch(emitter, Message::Increment),
    }
}

fn input(model: &Model, emitter: &Emitter<Message>) -> InputProps {
    let on_input = {
        let emitter = emitter.clone();
        move |raw: &str| emitter.emit(Message::SetLabel(raw.to_uppercase()))
    };

    InputProps {
        text: Binding::new(model.input_string.clone(), on_input),
        label: model.label.clone(),
        on_reset: dispatch(emitter, Message::ResetInput),
    }
}

fn data(model: &Model, emitter: &Emitter<Message>) -> DataProps {
    let rows = match &model.books {
        None => vec![BookRow::Loading],
        Some(books) => books.iter().cloned().map(BookRow::Book).collect(),
    };

    DataProps {
        rows,
        on_reload: dispatch(emitter, Message::GetBooks),
    }
}
