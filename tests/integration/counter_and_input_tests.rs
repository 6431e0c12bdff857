use oxide_spa::app::{AppProps, CounterProps, InputProps, Message, Page, PageProps};
use oxide_spa::Spawner;

use super::{given_books_respond_with, start_app, AppTest};

fn with_counter<S: Spawner, R>(test: &AppTest<S>, f: impl FnOnce(&CounterProps) -> R) -> R {
    test.renders.with_last(|props: &AppProps| match &props.content {
        PageProps::Counter(counter) => f(counter),
        _ => panic!("expected the counter page, got {:?}", props.content.page()),
    })
}

fn with_input<S: Spawner, R>(test: &AppTest<S>, f: impl FnOnce(&InputProps) -> R) -> R {
    test.renders.with_last(|props: &AppProps| match &props.content {
        PageProps::Input(input) => f(input),
        _ => panic!("expected the input page, got {:?}", props.content.page()),
    })
}

#[test]
fn given_counter_page_when_buttons_pressed_should_step_the_counter() {
    let mut test = start_app(given_books_respond_with(Ok(vec![])));
    test.emit(Message::SetPage(Page::Counter));

    with_counter(&test, |counter| {
        (counter.on_increment)();
        (counter.on_increment)();
        (counter.on_decrement)();
    });
    test.driver.process_events();

    assert_eq!(test.model().counter, 1);
    with_counter(&test, |counter| assert_eq!(counter.value.value, "1"));
}

#[test]
fn given_counter_input_when_typed_should_set_the_counter() {
    let mut test = start_app(given_books_respond_with(Ok(vec![])));
    test.emit(Message::SetPage(Page::Counter));

    with_counter(&test, |counter| counter.value.input(" -17 "));
    test.driver.process_events();

    assert_eq!(test.model().counter, -17);
}

#[test]
fn given_counter_input_when_not_a_number_should_dispatch_nothing() {
    let mut test = start_app(given_books_respond_with(Ok(vec![])));
    test.emit(Message::SetPage(Page::Counter));
    let renders_before = test.renders.count();

    with_counter(&test, |counter| counter.value.input("12a"));
    test.driver.process_events();

    assert_eq!(test.renders.count(), renders_before);
    assert_eq!(test.model().counter, 0);
}

#[test]
fn given_text_input_when_typed_should_store_an_uppercased_label() {
    let mut test = start_app(given_books_respond_with(Ok(vec![])));
    test.emit(Message::SetPage(Page::Input));

    with_input(&test, |input| input.text.input("abc"));
    test.driver.process_events();

    assert_eq!(test.model().label, "ABC");
    with_input(&test, |input| {
        assert_eq!(input.label, "ABC");
        // The binding reads input_string, which typing does not write.
        assert_eq!(input.text.value, "");
    });
}

#[test]
fn given_a_label_when_reset_pressed_should_keep_the_label() {
    let mut test = start_app(given_books_respond_with(Ok(vec![])));
    test.emit(Message::SetPage(Page::Input));
    with_input(&test, |input| input.text.input("hello"));
    test.driver.process_events();

    with_input(&test, |input| (input.on_reset)());
    test.driver.process_events();

    assert_eq!(test.model().input_string, "");
    assert_eq!(test.model().label, "HELLO");
}
