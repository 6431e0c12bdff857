use super::{Book, Page};
use crate::client::FetchError;

/// Everything that can change the [`Model`](super::Model).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Navigation, from a sidebar link or the host's location.
    SetPage(Page),
    Increment,
    Decrement,
    /// Counter typed into the numeric input.
    SetCounter(i32),
    ResetInput,
    /// Already upper-cased by the input binding.
    SetLabel(String),
    /// Clear the table and (re)fetch `books.json`.
    GetBooks,
    GotBooks(Vec<Book>),
    Error(FetchError),
    ClearError,
}
