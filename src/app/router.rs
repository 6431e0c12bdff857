//! Bidirectional mapping between navigation paths and pages.
//!
//! Both directions read the same route table, so links generated from a
//! [`Page`] always parse back to that page.

use core::fmt;

/// The pages of the application. Exactly one is current at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Counter,
    Input,
    Data,
}

const ROUTES: [(Page, &str); 4] = [
    (Page::Home, "/"),
    (Page::Counter, "/counter"),
    (Page::Input, "/input"),
    (Page::Data, "/data"),
];

impl Page {
    /// All pages, in sidebar order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Counter, Page::Input, Page::Data];

    /// Sidebar caption.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Counter => "Counter",
            Page::Input => "Text input",
            Page::Data => "Download data",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(format(*self))
    }
}

/// Parse a navigation path into a page.
///
/// Query string and fragment are ignored and a single trailing slash is
/// accepted, so `/counter/?x=1` is [`Page::Counter`]. Returns `None` for
/// paths outside the route table.
pub fn parse(path: &str) -> Option<Page> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    };

    ROUTES
        .iter()
        .find(|(_, route)| *route == path)
        .map(|(page, _)| *page)
}

/// The canonical path of a page.
pub fn format(page: Page) -> &'static str {
    ROUTES
        .iter()
        .find(|(candidate, _)| *candidate == page)
        .map(|(_, route)| *route)
        .unwrap_or("/")
}

/// Resolve a path the way the host applies browser navigation: unknown
/// paths fall back to [`Page::default`].
pub fn resolve(path: &str) -> Page {
    parse(path).unwrap_or_else(|| {
        log::warn!("no route for path {path:?}, falling back to {}", Page::default());
        Page::default()
    })
}
