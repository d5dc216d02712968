//! Behavioural tests for instance decoding and problem-kind tagging.

use std::cell::RefCell;

use knapsack_core::{Instance, ProblemKind, SolveError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct InstanceWorld {
    payload: RefCell<String>,
    outcome: RefCell<Option<Result<Instance, String>>>,
}

impl InstanceWorld {
    fn set_payload(&self, project: &str, first_id: &str, second_id: &str) {
        let payload = format!(
            r#"{{
                "project": "{project}",
                "capacity": 20,
                "items": [
                    {{"id": "{first_id}", "value": 30, "weight": 8}},
                    {{"id": "{second_id}", "value": 14, "weight": 5}}
                ]
            }}"#
        );
        self.payload.replace(payload);
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn decoded(&self) -> Instance {
        self.outcome
            .borrow()
            .clone()
            .expect("outcome should be recorded before assertions")
            .expect("expected decoding to succeed")
    }
}

#[fixture]
fn world() -> InstanceWorld {
    InstanceWorld::default()
}

#[given("a JSON instance for project \"knapsack_01_labA\"")]
fn given_knapsack_payload(world: &InstanceWorld) {
    world.set_payload("knapsack_01_labA", "LAB-A-001", "LAB-A-002");
}

#[given("a JSON instance for project \"vehicle_routing\"")]
fn given_routing_payload(world: &InstanceWorld) {
    world.set_payload("vehicle_routing", "V-1", "V-2");
}

#[given("a JSON instance with a duplicated item id")]
fn given_duplicate_payload(world: &InstanceWorld) {
    world.set_payload("knapsack_dup", "LAB-A-001", "LAB-A-001");
}

#[when("the instance is decoded")]
fn when_decoded(world: &InstanceWorld) {
    let outcome = serde_json::from_str::<Instance>(&world.payload.borrow())
        .map_err(|err| err.to_string());
    world.outcome.replace(Some(outcome));
}

#[then("decoding succeeds")]
fn then_decoding_succeeds(world: &InstanceWorld) {
    assert!(matches!(world.outcome.borrow().as_ref(), Some(Ok(_))));
}

#[then("decoding fails")]
fn then_decoding_fails(world: &InstanceWorld) {
    let outcome = world.outcome.borrow();
    let Some(Err(message)) = outcome.as_ref() else {
        panic!("expected a decoding error, found {outcome:?}");
    };
    assert!(message.contains("duplicate item id"), "unexpected message {message}");
}

#[then("the instance is tagged as a 0/1 knapsack problem")]
fn then_tagged_knapsack(world: &InstanceWorld) {
    let instance = world.decoded();
    assert_eq!(instance.kind(), ProblemKind::Knapsack01);
    assert!(instance.ensure_supported().is_ok());
}

#[then("solving reports an unsupported problem")]
fn then_unsupported(world: &InstanceWorld) {
    let instance = world.decoded();
    assert_eq!(
        instance.ensure_supported(),
        Err(SolveError::UnsupportedProblem {
            project: "vehicle_routing".to_owned()
        })
    );
}

#[scenario(path = "tests/features/instance.feature", index = 0)]
fn knapsack_project_is_accepted(world: InstanceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/instance.feature", index = 1)]
fn unrelated_project_is_rejected(world: InstanceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/instance.feature", index = 2)]
fn duplicate_ids_are_rejected(world: InstanceWorld) {
    let _ = world;
}
