use chrono::NaiveDate;
use serde_json::json;

use crate::error::PlanParseError;

use super::{Plan, PlanWindow, Priority};

fn window() -> PlanWindow {
    PlanWindow {
        start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
    }
}

fn task_json(priority: serde_json::Value) -> serde_json::Value {
    json!({
        "title": "Draft outline",
        "description": "Write the first outline",
        "priority": priority,
        "estimated_duration": 60,
        "due_date": "2026-03-02",
        "prerequisites": ["Pick a topic"],
        "order_sequence": 1
    })
}

#[test]
fn parses_a_full_plan() {
    let raw = json!({
        "milestones": [
            {"title": "Milestone 1 (25%)", "description": "First quarter", "order_sequence": 1}
        ],
        "tasks": [task_json(json!("high"))]
    })
    .to_string();

    let plan = Plan::from_model_json(&raw, &window()).unwrap();
    assert_eq!(plan.milestone_count(), 1);
    assert_eq!(plan.task_count(), 1);
    assert_eq!(plan.tasks[0].priority, Priority::High);
    assert_eq!(
        plan.tasks[0].prerequisites.as_deref(),
        Some(&["Pick a topic".to_string()][..])
    );
}

#[test]
fn missing_sections_default_to_empty() {
    let plan = Plan::from_model_json("{}", &window()).unwrap();
    assert_eq!(plan.milestone_count(), 0);
    assert_eq!(plan.task_count(), 0);
}

#[test]
fn unknown_priority_normalizes_to_medium() {
    let raw = json!({"tasks": [task_json(json!("urgent"))]}).to_string();
    let plan = Plan::from_model_json(&raw, &window()).unwrap();
    assert_eq!(plan.tasks[0].priority, Priority::Medium);
}

#[test]
fn empty_priority_normalizes_to_medium() {
    let raw = json!({"tasks": [task_json(json!(""))]}).to_string();
    let plan = Plan::from_model_json(&raw, &window()).unwrap();
    assert_eq!(plan.tasks[0].priority, Priority::Medium);
}

#[test]
fn absent_priority_normalizes_to_medium() {
    let mut task = task_json(json!("low"));
    task.as_object_mut().unwrap().remove("priority");
    let raw = json!({"tasks": [task]}).to_string();

    let plan = Plan::from_model_json(&raw, &window()).unwrap();
    assert_eq!(plan.tasks[0].priority, Priority::Medium);
}

#[test]
fn priority_is_case_insensitive() {
    let raw = json!({"tasks": [task_json(json!("HIGH"))]}).to_string();
    let plan = Plan::from_model_json(&raw, &window()).unwrap();
    assert_eq!(plan.tasks[0].priority, Priority::High);
}

#[test]
fn missing_due_date_fails_the_whole_parse() {
    let mut task = task_json(json!("high"));
    task.as_object_mut().unwrap().remove("due_date");
    let raw = json!({"tasks": [task]}).to_string();

    let err = Plan::from_model_json(&raw, &window()).unwrap_err();
    assert!(matches!(err, PlanParseError::Shape(_)));
}

#[test]
fn malformed_due_date_fails_the_whole_parse() {
    let mut task = task_json(json!("high"));
    task["due_date"] = json!("next tuesday");
    let raw = json!({"tasks": [task]}).to_string();

    let err = Plan::from_model_json(&raw, &window()).unwrap_err();
    assert!(matches!(err, PlanParseError::Shape(_)));
}

#[test]
fn invalid_json_fails() {
    let err = Plan::from_model_json("not json at all", &window()).unwrap_err();
    assert!(matches!(err, PlanParseError::Shape(_)));
}

#[test]
fn zero_duration_is_rejected() {
    let mut task = task_json(json!("high"));
    task["estimated_duration"] = json!(0);
    let raw = json!({"tasks": [task]}).to_string();

    let err = Plan::from_model_json(&raw, &window()).unwrap_err();
    assert!(matches!(err, PlanParseError::NonPositiveDuration { .. }));
}

#[test]
fn due_date_outside_window_is_rejected() {
    let mut task = task_json(json!("high"));
    task["due_date"] = json!("2026-03-11");
    let raw = json!({"tasks": [task]}).to_string();

    let err = Plan::from_model_json(&raw, &window()).unwrap_err();
    assert!(matches!(err, PlanParseError::DueDateOutOfWindow { .. }));
}

#[test]
fn due_date_on_window_edges_is_accepted() {
    let mut first = task_json(json!("low"));
    first["due_date"] = json!("2026-03-01");
    let mut last = task_json(json!("low"));
    last["due_date"] = json!("2026-03-10");
    last["order_sequence"] = json!(2);
    let raw = json!({"tasks": [first, last]}).to_string();

    let plan = Plan::from_model_json(&raw, &window()).unwrap();
    assert_eq!(plan.task_count(), 2);
}
