use oxide_spa::app::{BookRow, Message, Page, PageProps};
use oxide_spa::client::FetchError;
use pretty_assertions::assert_eq;

use super::{book, given_books_respond_with, start_app, start_app_with_queued_effects, MockBooks};

fn data_rows(props: &oxide_spa::app::AppProps) -> Vec<BookRow> {
    match &props.content {
        PageProps::Data(data) => data.rows.clone(),
        _ => panic!("expected the data page, got {:?}", props.content.page()),
    }
}

#[test]
fn given_books_available_when_started_should_preload_them() {
    let test = start_app(given_books_respond_with(Ok(vec![book("T")])));

    assert_eq!(test.model().books, Some(vec![book("T")]));
    assert_eq!(test.model().error, None);
    // Still on the home page: the preload does not depend on the page shown.
    assert_eq!(test.model().page, Page::Home);
    // Initial render, after GetBooks, after GotBooks.
    assert_eq!(test.renders.count(), 3);
}

#[test]
fn given_fetch_rejects_when_started_should_keep_books_empty_and_show_error() {
    let test = start_app(given_books_respond_with(Err(FetchError::Network(
        "network down".to_string(),
    ))));

    assert_eq!(test.model().books, None);
    assert_eq!(test.model().error.as_deref(), Some("network down"));
    test.renders.with_last(|props| {
        let banner = props.error.as_ref().expect("error banner shown");
        assert_eq!(banner.message, "network down");
    });
}

#[test]
fn given_malformed_body_should_surface_the_decode_message() {
    let test = start_app(given_books_respond_with(Err(FetchError::Decode(
        "expected value at line 1 column 1".to_string(),
    ))));

    assert_eq!(
        test.model().error.as_deref(),
        Some("expected value at line 1 column 1")
    );
}

#[test]
fn given_fetch_in_flight_should_show_a_single_loading_row_until_it_resolves() {
    let (mut test, spawner) =
        start_app_with_queued_effects(given_books_respond_with(Ok(vec![book("T"), book("U")])));

    // Startup preload: the GetBooks event itself is an effect.
    assert_eq!(spawner.pending(), 1);
    spawner.run_all();
    test.driver.process_events();

    // The fetch is spawned but not resolved.
    assert_eq!(spawner.pending(), 1);
    assert_eq!(test.model().books, None);

    test.emit(Message::SetPage(Page::Data));
    test.renders.with_last(|props| {
        assert_eq!(data_rows(props), vec![BookRow::Loading]);
    });

    assert!(spawner.run_next());
    test.driver.process_events();

    test.renders.with_last(|props| {
        assert_eq!(
            data_rows(props),
            vec![BookRow::Book(book("T")), BookRow::Book(book("U"))]
        );
    });
}

#[test]
fn given_loaded_books_when_reload_pressed_should_clear_them_before_the_response() {
    let (mut test, spawner) =
        start_app_with_queued_effects(given_books_respond_with(Ok(vec![book("T")])));
    spawner.run_all();
    test.driver.process_events();
    spawner.run_all();
    test.driver.process_events();
    assert_eq!(test.model().books, Some(vec![book("T")]));

    test.emit(Message::SetPage(Page::Data));
    test.renders.with_last(|props| match &props.content {
        PageProps::Data(data) => (data.on_reload)(),
        _ => panic!("expected the data page"),
    });
    test.driver.process_events();

    assert_eq!(test.model().books, None);
    assert_eq!(spawner.pending(), 1);

    spawner.run_all();
    test.driver.process_events();
    assert_eq!(test.model().books, Some(vec![book("T")]));
}

#[test]
fn given_two_reloads_when_responses_arrive_out_of_order_should_keep_the_last_response() {
    let mut books = MockBooks::new();
    let mut calls = 0;
    books.expect_fetch_books().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Ok(vec![book("fast reply")])
        } else {
            Ok(vec![book("slow reply")])
        }
    });

    let (mut test, spawner) = start_app_with_queued_effects(books);
    spawner.run_all();
    test.driver.process_events();

    // A second request while the preload is still in flight.
    test.emit(Message::GetBooks);
    assert_eq!(spawner.pending(), 2);

    // The newer request answers first...
    assert!(spawner.run_last());
    test.driver.process_events();
    assert_eq!(test.model().books, Some(vec![book("fast reply")]));

    // ...and the older one lands afterwards and wins.
    assert!(spawner.run_next());
    test.driver.process_events();
    assert_eq!(test.model().books, Some(vec![book("slow reply")]));
}
