//! Verify normalization and ordering against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file pins "today" and lists inputs with their expected stored
//! or listed form. Comparing parsed values (not raw strings) avoids false
//! negatives from field-ordering differences.

use chrono::{Duration, NaiveDate};
use todo_core::{CreateTodo, FixedClock, TodoService};

fn service_for(vectors: &serde_json::Value) -> (TodoService<FixedClock>, NaiveDate) {
    let today: NaiveDate = serde_json::from_value(vectors["today"].clone()).unwrap();
    (TodoService::with_clock(FixedClock(today)), today)
}

/// Turn `{title, due_offset_days, is_done}` into a comparable tuple.
fn entry(value: &serde_json::Value, today: NaiveDate) -> (String, NaiveDate, bool) {
    let offset = value["due_offset_days"].as_i64().unwrap();
    (
        value["title"].as_str().unwrap().to_string(),
        today + Duration::days(offset),
        value["is_done"].as_bool().unwrap(),
    )
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_test_vectors() {
    let raw = include_str!("../../test-vectors/normalize.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let (mut svc, _) = service_for(&vectors);

        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        let added = svc.add(input);
        assert!(!added.id.is_nil(), "{name}: id assigned");

        let mut stored = serde_json::to_value(svc.get(added.id).unwrap()).unwrap();
        stored.as_object_mut().unwrap().remove("id");
        assert_eq!(stored, case["expected"], "{name}: stored item");
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn ordering_test_vectors() {
    let raw = include_str!("../../test-vectors/ordering.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let (mut svc, today) = service_for(&vectors);

        for value in case["input"].as_array().unwrap() {
            let (title, due_date, is_done) = entry(value, today);
            svc.add(CreateTodo {
                title,
                due_date: Some(due_date),
                is_done,
                ..CreateTodo::default()
            });
        }

        let listed: Vec<(String, NaiveDate, bool)> = svc
            .get_all()
            .into_iter()
            .map(|item| (item.title, item.due_date, item.is_done))
            .collect();
        let expected: Vec<(String, NaiveDate, bool)> = case["expected"]
            .as_array()
            .unwrap()
            .iter()
            .map(|value| entry(value, today))
            .collect();
        assert_eq!(listed, expected, "{name}: listed order");
    }
}
