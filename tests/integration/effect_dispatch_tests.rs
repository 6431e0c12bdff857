use super::{build_integration_test, TestEvent};
use oxide_spa::Effect;

#[test]
fn given_an_on_increment_side_effect_when_increment_triggered_should_execute_side_effect() {
    let mut fired = false;
    let mut test = build_integration_test()
        .given_no_initial_event()
        .given_on_increment_side_effect(move || {
            // Only the first increment adds; otherwise the loop would never settle.
            if fired {
                Effect::none()
            } else {
                fired = true;
                Effect::just(TestEvent::Add(5))
            }
        })
        .build();

    test.renders.with_renders(|renders| {
        (renders[0].on_increment)();
    });

    test.driver.process_events();

    // 1. Initial render (count=0)
    // 2. After increment (count=1)
    // 3. After the side effect's Add(5) (count=6)
    assert_eq!(test.renders.count(), 3);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[1].count, 1);
        assert_eq!(renders[2].count, 6);
    });
}

#[test]
fn given_a_batch_of_effects_as_initial_effect_should_execute_all_effects() {
    let mut test = build_integration_test()
        .given_an_initial_effect(Effect::batch(vec![
            Effect::just(TestEvent::Increment),
            Effect::none(),
            Effect::just(TestEvent::Increment),
            Effect::just(TestEvent::Increment),
        ]))
        .given_on_increment_has_no_side_effect()
        .build();

    test.driver.process_events();

    // Initial render plus one per increment, in batch order.
    assert_eq!(test.renders.count(), 4);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].count, 0);
        assert_eq!(renders[1].count, 1);
        assert_eq!(renders[2].count, 2);
        assert_eq!(renders[3].count, 3);
    });
}

#[test]
fn given_a_performed_future_that_succeeds_should_emit_the_success_event() {
    let mut test = build_integration_test()
        .given_an_initial_effect(Effect::perform(
            async { Ok::<i32, String>(42) },
            TestEvent::Add,
            TestEvent::Failed,
        ))
        .build();

    test.driver.process_events();

    assert_eq!(test.driver.model().count, 42);
    assert_eq!(test.driver.model().failure, None);
}

#[test]
fn given_a_performed_future_that_fails_should_emit_the_failure_event() {
    let mut test = build_integration_test()
        .given_an_initial_effect(Effect::perform(
            async { Err::<i32, String>("unreachable host".to_string()) },
            TestEvent::Add,
            TestEvent::Failed,
        ))
        .build();

    test.driver.process_events();

    assert_eq!(test.driver.model().count, 0);
    test.renders.with_last(|props| {
        assert_eq!(props.failure.as_deref(), Some("unreachable host"));
    });
}

#[test]
fn empty_effects_report_none() {
    assert!(Effect::<TestEvent>::none().is_none());
    assert!(Effect::<TestEvent>::batch(vec![Effect::none(), Effect::none()]).is_none());
    assert!(!Effect::just(TestEvent::Increment).is_none());
}
