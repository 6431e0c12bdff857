use super::{build_integration_test, TestEvent};
use oxide_spa::Effect;

#[test]
fn given_no_initial_event_should_render_initial_props() {
    let test = build_integration_test().given_no_initial_event().build();

    assert_eq!(test.renders.count(), 1);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].count, 0);
    });
}

#[test]
fn given_an_initial_increment_event_should_render_twice() {
    let mut test = build_integration_test()
        .given_an_initial_effect(Effect::just(TestEvent::Increment))
        .build();

    test.driver.process_events();

    assert_eq!(test.renders.count(), 2);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].count, 0);
        assert_eq!(renders[1].count, 1);
    });
}

#[test]
fn given_no_initial_event_when_props_callback_invoked_should_render_again() {
    let mut test = build_integration_test().given_no_initial_event().build();

    test.renders.with_renders(|renders| {
        (renders[0].on_increment)();
    });

    // Queued only; nothing renders until the driver processes it.
    assert_eq!(test.renders.count(), 1);

    test.driver.process_events();

    assert_eq!(test.renders.count(), 2);
    test.renders.with_last(|props| {
        assert_eq!(props.count, 1);
    });
    assert_eq!(test.driver.model().count, 1);
}

#[test]
fn given_events_emitted_in_order_should_reduce_them_in_order() {
    let mut test = build_integration_test().given_no_initial_event().build();

    let emitter = test.driver.emitter();
    emitter.emit(TestEvent::Add(10));
    emitter.emit(TestEvent::Increment);
    emitter.emit(TestEvent::Add(-4));

    test.driver.process_events();

    test.renders.with_renders(|renders| {
        let counts: Vec<i32> = renders.iter().map(|props| props.count).collect();
        assert_eq!(counts, vec![0, 10, 11, 7]);
    });
}
