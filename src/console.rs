//! Headless console host: renders [`AppProps`] as text and turns typed
//! commands into the callbacks of the most recent render.

use core::fmt::Write as _;
use core::str::FromStr;
use std::io::{self, BufRead, Write};

use portable_atomic_util::Arc;
use spin::Mutex;
use thiserror::Error;

use crate::app::{router, AppProps, BookRow, Message, PageProps};
use crate::{Emitter, Renderer};

const HELP: &str = "\
commands:
  go <path>     navigate (/, /counter, /input, /data)
  inc | dec     counter buttons
  set <n>       type a number into the counter
  type <text>   type into the text input
  reset         reset the text input
  reload        reload the book table
  dismiss       dismiss the error banner
  show          render the current screen again
  help          this text
  quit          exit";

/// A line typed at the console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Go(String),
    Increment,
    Decrement,
    Set(String),
    Type(String),
    Reset,
    Reload,
    Dismiss,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "" => Err(CommandError::Empty),
            "go" => argument("go").map(ConsoleCommand::Go),
            "inc" => Ok(ConsoleCommand::Increment),
            "dec" => Ok(ConsoleCommand::Decrement),
            "set" => argument("set").map(ConsoleCommand::Set),
            // Typing nothing is a valid edit.
            "type" => Ok(ConsoleCommand::Type(rest.to_string())),
            "reset" => Ok(ConsoleCommand::Reset),
            "reload" => Ok(ConsoleCommand::Reload),
            "dismiss" => Ok(ConsoleCommand::Dismiss),
            "show" => Ok(ConsoleCommand::Show),
            "help" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What applying a command did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An event was queued.
    Dispatched,
    /// Text to print without touching state.
    Print(String),
    /// The control is not on screen right now.
    Unavailable(&'static str),
    Quit,
}

/// The most recently rendered props, shared between the renderer and the
/// command reader.
#[derive(Clone)]
pub struct LatestProps(Arc<Mutex<Option<Arc<AppProps>>>>);

impl Default for LatestProps {
    fn default() -> Self {
        Self::new()
    }
}

impl LatestProps {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(None)))
    }

    fn store(&self, props: AppProps) {
        *self.0.lock() = Some(Arc::new(props));
    }

    /// Apply a command against the current screen.
    ///
    /// `go` is treated as a location change and goes straight to the
    /// emitter; every other control acts through the rendered callbacks, so
    /// it only works while its page is showing.
    pub fn apply(&self, command: &ConsoleCommand, emitter: &Emitter<Message>) -> Outcome {
        // Released before any callback runs so the renderer never waits on it.
        let latest = self.0.lock().clone();

        match (command, latest.as_deref()) {
            (ConsoleCommand::Go(path), _) => {
                emitter.emit(Message::SetPage(router::resolve(path)));
                Outcome::Dispatched
            }
            (ConsoleCommand::Help, _) => Outcome::Print(HELP.to_string()),
            (ConsoleCommand::Quit, _) => Outcome::Quit,
            (_, None) => Outcome::Unavailable("nothing rendered yet"),
            (command, Some(props)) => apply_to_screen(command, props),
        }
    }
}

fn apply_to_screen(command: &ConsoleCommand, props: &AppProps) -> Outcome {
    match (command, &props.content) {
        (ConsoleCommand::Show, _) => Outcome::Print(render_text(props)),
        (ConsoleCommand::Dismiss, _) => match &props.error {
            Some(banner) => {
                (banner.on_dismiss)();
                Outcome::Dispatched
            }
            None => Outcome::Unavailable("no error to dismiss"),
        },
        (ConsoleCommand::Increment, PageProps::Counter(counter)) => {
            (counter.on_increment)();
            Outcome::Dispatched
        }
        (ConsoleCommand::Decrement, PageProps::Counter(counter)) => {
            (counter.on_decrement)();
            Outcome::Dispatched
        }
        (ConsoleCommand::Set(raw), PageProps::Counter(counter)) => {
            counter.value.input(raw);
            Outcome::Dispatched
        }
        (ConsoleCommand::Type(raw), PageProps::Input(input)) => {
            input.text.input(raw);
            Outcome::Dispatched
        }
        (ConsoleCommand::Reset, PageProps::Input(input)) => {
            (input.on_reset)();
            Outcome::Dispatched
        }
        (ConsoleCommand::Reload, PageProps::Data(data)) => {
            (data.on_reload)();
            Outcome::Dispatched
        }
        (command, _) => Outcome::Unavailable(page_of(command)),
    }
}

fn page_of(command: &ConsoleCommand) -> &'static str {
    match command {
        ConsoleCommand::Increment | ConsoleCommand::Decrement | ConsoleCommand::Set(_) => {
            "the counter is on /counter"
        }
        ConsoleCommand::Type(_) | ConsoleCommand::Reset => "the text input is on /input",
        ConsoleCommand::Reload => "the book table is on /data",
        _ => "not on this page",
    }
}

/// [`Renderer`] that prints each screen and remembers it for commands.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    latest: LatestProps,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, latest: LatestProps) -> Self {
        Self { out, latest }
    }
}

impl<W: Write> Renderer<AppProps> for ConsoleRenderer<W> {
    fn render(&mut self, props: AppProps) {
        let text = render_text(&props);
        if let Err(err) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            log::error!("failed to write screen: {err}");
        }
        self.latest.store(props);
    }
}

/// Text rendering of a screen: sidebar, page content, error banner.
pub fn render_text(props: &AppProps) -> String {
    let mut out = String::new();

    for link in &props.sidebar {
        let marker = if link.active { '*' } else { ' ' };
        let _ = writeln!(out, " {marker} {:<16}{}", link.label, link.href);
    }
    out.push_str(&"-".repeat(40));
    out.push('\n');

    match &props.content {
        PageProps::Home(home) => {
            let _ = writeln!(out, "# {}", home.title);
            for paragraph in &home.paragraphs {
                let _ = writeln!(out, "{paragraph}");
            }
            for link in &home.links {
                let _ = writeln!(out, "  -> {} ({})", link.label, link.href);
            }
        }
        PageProps::Counter(counter) => {
            let _ = writeln!(out, "# Counter");
            let _ = writeln!(out, "[-]  {}  [+]", counter.value.value);
        }
        PageProps::Input(input) => {
            let _ = writeln!(out, "# Text input");
            let _ = writeln!(out, "input: [{}]  [reset]", input.text.value);
            let _ = writeln!(out, "You typed: {}", input.label);
        }
        PageProps::Data(data) => {
            let _ = writeln!(out, "# Books  [reload]");
            let _ = writeln!(out, "{:<32}{:<24}{:<12}ISBN", "Title", "Author", "Published");
            for row in &data.rows {
                match row {
                    BookRow::Loading => {
                        let _ = writeln!(out, "Downloading book list...");
                    }
                    BookRow::Book(book) => {
                        let _ = writeln!(
                            out,
                            "{:<32}{:<24}{:<12}{}",
                            book.title,
                            book.author,
                            book.publish_date.to_string(),
                            book.isbn
                        );
                    }
                }
            }
        }
    }

    if let Some(banner) = &props.error {
        let _ = writeln!(out, "!! {}  [dismiss]", banner.message);
    }

    out
}

/// Read commands line by line until `quit` or end of input.
pub fn read_commands<R: BufRead>(input: R, latest: &LatestProps, emitter: &Emitter<Message>) {
    let mut stdout = io::stdout();

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("failed to read command: {err}");
                break;
            }
        };

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                let _ = writeln!(stdout, "{err}");
                continue;
            }
        };

        match latest.apply(&command, emitter) {
            Outcome::Dispatched => {}
            Outcome::Print(text) => {
                let _ = writeln!(stdout, "{text}");
            }
            Outcome::Unavailable(reason) => {
                let _ = writeln!(stdout, "not available: {reason}");
            }
            Outcome::Quit => break,
        }
    }
}
