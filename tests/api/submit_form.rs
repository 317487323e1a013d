use serde_json::json;

use crate::helpers::spawn_app;

fn sample_body() -> serde_json::Value {
    json!({
        "name": "John",
        "email": "john@foo.com",
        "subject": "Hello",
        "message": "Just checking in.",
    })
}

/// Test the `/submit-form` endpoint with a valid request: 200, the fixed
/// confirmation body, and (since no file existed) exactly one saved entry
#[tokio::test]
async fn submit_ok() {
    let app = spawn_app().await;

    let resp = app.post_submission(sample_body().to_string()).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.unwrap(), "Data saved successfully");

    let saved = app.saved_submissions();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "John");
    assert_eq!(saved[0].email, "john@foo.com");
    assert_eq!(saved[0].subject, "Hello");
    assert_eq!(saved[0].message, "Just checking in.");
}

/// Every accepted submission grows the file by exactly one entry, appended at
/// the end
#[tokio::test]
async fn each_submission_appends_one_entry() {
    let app = spawn_app().await;

    for (i, name) in ["John", "Jane", "Jim"].iter().enumerate() {
        let body = json!({
            "name": name,
            "email": "x@foo.com",
            "subject": "Hi",
            "message": "m",
        });
        let resp = app.post_submission(body.to_string()).await;
        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(app.saved_submissions().len(), i + 1);
    }

    assert_eq!(app.saved_submissions().last().unwrap().name, "Jim");
}

/// A data file left over from an earlier run keeps its entries; the new
/// submission lands at the end
#[tokio::test]
async fn seeded_data_file_is_extended() {
    let app = spawn_app().await;
    let existing = json!([
        {"name": "A", "email": "a@foo.com", "subject": "s", "message": "m"},
        {"name": "B", "email": "b@foo.com", "subject": "s", "message": "m"},
    ]);
    std::fs::write(
        &app.data_file,
        serde_json::to_string_pretty(&existing).unwrap(),
    )
    .unwrap();

    let resp = app.post_submission(sample_body().to_string()).await;
    assert_eq!(resp.status().as_u16(), 200);

    let saved = app.saved_submissions();
    assert_eq!(saved.len(), 3);
    assert_eq!(saved.last().unwrap().name, "John");
}

/// A file that does not parse counts as empty; the next submission starts the
/// list over with a single entry
#[tokio::test]
async fn corrupt_data_file_is_started_over() {
    let app = spawn_app().await;
    std::fs::write(&app.data_file, "{ this is not a JSON array").unwrap();

    let resp = app.post_submission(sample_body().to_string()).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(app.saved_submissions().len(), 1);
}

/// Bodies that don't deserialize into a Submission are rejected by extraction
/// with 400, and nothing is persisted
#[tokio::test]
async fn malformed_payloads_are_rejected() {
    let app = spawn_app().await;

    for (body, msg) in [
        ("".to_string(), "empty body"),
        ("{}".to_string(), "no fields"),
        (json!({"name": "John"}).to_string(), "missing fields"),
        (
            json!({"name": 1, "email": "a@foo.com", "subject": "s", "message": "m"}).to_string(),
            "non-string name",
        ),
        ("[1, 2]".to_string(), "not an object"),
    ] {
        let resp = app.post_submission(body).await;
        assert_eq!(resp.status().as_u16(), 400, "{msg}");
    }

    assert!(!app.data_file.exists());
}

/// Two in-flight submissions against an initially missing file must both end
/// up in it, whichever order their file I/O interleaves
#[tokio::test]
async fn concurrent_submissions_are_both_saved() {
    let app = spawn_app().await;

    let first = json!({"name": "John", "email": "john@foo.com", "subject": "s", "message": "m"});
    let second = json!({"name": "Jane", "email": "jane@foo.com", "subject": "s", "message": "m"});

    let (resp_a, resp_b) = tokio::join!(
        app.post_submission(first.to_string()),
        app.post_submission(second.to_string()),
    );
    assert_eq!(resp_a.status().as_u16(), 200);
    assert_eq!(resp_b.status().as_u16(), 200);

    let saved = app.saved_submissions();
    assert_eq!(saved.len(), 2);
    let names: Vec<_> = saved.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"John"), "{names:?}");
    assert!(names.contains(&"Jane"), "{names:?}");
}
