use taskdeck_core::{Priority, Task, TaskDraft};
use uuid::Uuid;

fn fixed_id(text: &str) -> Uuid {
    Uuid::parse_str(text).unwrap()
}

#[test]
fn draft_new_sets_defaults() {
    let draft = TaskDraft::new("buy milk");

    assert_eq!(draft.text, "buy milk");
    assert!(!draft.completed);
    assert_eq!(draft.priority, None);
    assert_eq!(draft.expiration_date, None);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = fixed_id("11111111-2222-4333-8444-555555555555");
    let task = Task::from_draft(
        id,
        1_700_000_000_000,
        TaskDraft {
            text: "ship release".to_string(),
            completed: true,
            priority: Some(Priority::High),
            expiration_date: Some("2026-09-01".to_string()),
        },
    );

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "ship release");
    assert_eq!(json["completed"], true);
    assert_eq!(json["priority"], "high");
    assert_eq!(json["expirationDate"], "2026-09-01");
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn absent_optional_fields_are_omitted_on_write() {
    let task = Task::from_draft(
        fixed_id("11111111-2222-4333-8444-555555555555"),
        100,
        TaskDraft::new("no extras"),
    );

    let json = serde_json::to_value(&task).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("priority"));
    assert!(!object.contains_key("expirationDate"));
}

#[test]
fn absent_optional_fields_are_tolerated_on_load() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "text": "legacy record",
        "completed": false,
        "createdAt": 42
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.priority, None);
    assert_eq!(task.expiration_date, None);
    assert_eq!(task.created_at, 42);
}

#[test]
fn collection_roundtrip_is_field_for_field_equal() {
    let with_extras = Task::from_draft(
        fixed_id("11111111-2222-4333-8444-555555555555"),
        100,
        TaskDraft {
            text: "a".to_string(),
            completed: false,
            priority: Some(Priority::Low),
            expiration_date: Some("2026-01-01".to_string()),
        },
    );
    let bare = Task::from_draft(
        fixed_id("22222222-3333-4444-8555-666666666666"),
        200,
        TaskDraft::new("b"),
    );
    let collection = vec![with_extras, bare];

    let serialized = serde_json::to_string(&collection).unwrap();
    let loaded: Vec<Task> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(loaded, collection);
}

#[test]
fn priority_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(Priority::Medium).unwrap(),
        serde_json::json!("medium")
    );
    assert_eq!(
        serde_json::from_value::<Priority>(serde_json::json!("low")).unwrap(),
        Priority::Low
    );
}
