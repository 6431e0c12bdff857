use oxide_spa::{Effect, Emitter, MvuLogic};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TestEvent {
    Increment,
    Add(i32),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestModel {
    pub(crate) count: i32,
    pub(crate) failure: Option<String>,
}

pub(crate) struct TestProps {
    pub(crate) count: i32,
    pub(crate) failure: Option<String>,
    pub(crate) on_increment: Box<dyn Fn() + Send>,
}

pub(crate) struct TestLogic {
    pub(crate) initial_effects: Box<dyn InitialEffectsDependency + Send>,
    pub(crate) effects: Box<dyn EffectsDependency + Send>,
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait InitialEffectsDependency {
    fn on_init(&self) -> Effect<TestEvent>;
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait EffectsDependency {
    fn on_increment_side_effect(&self) -> Effect<TestEvent>;
}

impl MvuLogic<TestEvent, TestModel, TestProps> for TestLogic {
    fn init(&self, model: TestModel) -> (TestModel, Effect<TestEvent>) {
        (model, self.initial_effects.on_init())
    }

    fn update(&self, event: TestEvent, model: &TestModel) -> (TestModel, Effect<TestEvent>) {
        match event {
            TestEvent::Increment => {
                let new_model = TestModel {
                    count: model.count + 1,
                    ..model.clone()
                };
                (new_model, self.effects.on_increment_side_effect())
            }
            TestEvent::Add(amount) => {
                let new_model = TestModel {
                    count: model.count + amount,
                    ..model.clone()
                };
                (new_model, Effect::none())
            }
            TestEvent::Failed(reason) => {
                let new_model = TestModel {
                    failure: Some(reason),
                    ..model.clone()
                };
                (new_model, Effect::none())
            }
        }
    }

    fn view(&self, model: &TestModel, emitter: &Emitter<TestEvent>) -> TestProps {
        let emitter = emitter.clone();
        TestProps {
            count: model.count,
            failure: model.failure.clone(),
            on_increment: Box::new(move || {
                emitter.emit(TestEvent::Increment);
            }),
        }
    }
}
