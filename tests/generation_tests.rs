// tests/generation_tests.rs

mod common;

use common::{StubGenerator, client, spawn_app};
use serde_json::{Value, json};
use studyhelper::{generation::fallback, models::difficulty::Difficulty};

#[tokio::test]
async fn missing_fields_are_rejected_without_calling_the_model() {
    // Arrange
    let generator = StubGenerator::scripted("unused");
    let address = spawn_app(generator.clone()).await;
    let client = client();

    // Act
    let topic = client
        .post(format!("{}/api/ai/generate-topic", address))
        .json(&json!({ "difficulty": "easy" }))
        .send()
        .await
        .expect("Failed to execute request");
    let summary = client
        .post(format!("{}/api/ai/generate-summary", address))
        .json(&json!({ "topic": "", "difficulty": "easy" }))
        .send()
        .await
        .expect("Failed to execute request");
    let quiz = client
        .post(format!("{}/api/ai/generate-quiz", address))
        .json(&json!({ "topic": "Cells", "difficulty": 3 }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(topic.status().as_u16(), 400);
    let body: Value = topic.json().await.unwrap();
    assert_eq!(body["error"], "Missing subject or difficulty");

    assert_eq!(summary.status().as_u16(), 400);
    let body: Value = summary.json().await.unwrap();
    assert_eq!(body["error"], "Missing topic or difficulty");

    assert_eq!(quiz.status().as_u16(), 400);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn malformed_json_is_a_server_error() {
    let generator = StubGenerator::scripted("unused");
    let address = spawn_app(generator.clone()).await;
    let client = client();

    let topic = client
        .post(format!("{}/api/ai/generate-topic", address))
        .header("content-type", "application/json")
        .body("{\"subject\": ")
        .send()
        .await
        .expect("Failed to execute request");
    let quiz = client
        .post(format!("{}/api/ai/generate-quiz", address))
        .body("not json at all")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(topic.status().as_u16(), 500);
    let body: Value = topic.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(body["details"].is_string());

    assert_eq!(quiz.status().as_u16(), 500);
    let body: Value = quiz.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(body.get("details").is_none());

    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn model_output_is_returned_when_valid() {
    let generator = StubGenerator::scripted("  Prime Numbers \n");
    let address = spawn_app(generator.clone()).await;

    let response = client()
        .post(format!("{}/api/ai/generate-topic", address))
        .json(&json!({ "subject": "Maths", "difficulty": "Easy" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["topic"], "Prime Numbers");
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn valid_quiz_json_passes_through() {
    let quiz = json!({
        "questions": [{
            "question": "What is 2 + 2?",
            "options": ["3", "4", "5", "22"],
            "correctAnswer": 1,
            "explanation": "Two plus two is four."
        }]
    });
    let generator = StubGenerator::scripted(&quiz.to_string());
    let address = spawn_app(generator).await;

    let response = client()
        .post(format!("{}/api/ai/generate-quiz", address))
        .json(&json!({ "topic": "Arithmetic", "difficulty": "easy" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["questions"], quiz["questions"]);
}

#[tokio::test]
async fn upstream_failure_falls_back_silently() {
    let generator = StubGenerator::failing();
    let address = spawn_app(generator.clone()).await;
    let client = client();

    let topic = client
        .post(format!("{}/api/ai/generate-topic", address))
        .json(&json!({ "subject": "English", "difficulty": "easy" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(topic.status().as_u16(), 200);
    let body: Value = topic.json().await.unwrap();
    let topic = body["topic"].as_str().unwrap();
    assert!(["Pronouns", "Verb Tenses", "Parts of Speech"].contains(&topic), "{}", topic);

    let summary = client
        .post(format!("{}/api/ai/generate-summary", address))
        .json(&json!({ "topic": "Photosynthesis", "difficulty": "medium" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(summary.status().as_u16(), 200);
    let body: Value = summary.json().await.unwrap();
    assert!(
        body["summary"]
            .as_str()
            .unwrap()
            .starts_with("Photosynthesis is the metabolic process")
    );

    let quiz = client
        .post(format!("{}/api/ai/generate-quiz", address))
        .json(&json!({ "topic": "Photosynthesis", "difficulty": "easy" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(quiz.status().as_u16(), 200);
    let body: Value = quiz.json().await.unwrap();
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(
        questions[0]["question"],
        "What are the three main inputs required for photosynthesis?"
    );
    assert!(questions.iter().all(|q| q["options"].as_array().unwrap().len() == 4));

    assert_eq!(generator.calls(), 3);
}

#[tokio::test]
async fn unusable_output_and_unknown_difficulty_use_generic_fallback() {
    // Blank summary and a non-JSON quiz both count as invalid output
    let generator = StubGenerator::scripted("   ");
    let address = spawn_app(generator).await;
    let client = client();

    let summary = client
        .post(format!("{}/api/ai/generate-summary", address))
        .json(&json!({ "topic": "Graph Theory", "difficulty": "legendary" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(summary.status().as_u16(), 200);
    let body: Value = summary.json().await.unwrap();
    assert!(
        body["summary"]
            .as_str()
            .unwrap()
            .starts_with("Graph Theory is a multifaceted subject")
    );

    let quiz = client
        .post(format!("{}/api/ai/generate-quiz", address))
        .json(&json!({ "topic": "Graph Theory", "difficulty": "hard" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(quiz.status().as_u16(), 200);
    let body: Value = quiz.json().await.unwrap();
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert!(questions.iter().all(|q| {
        let answer = q["correctAnswer"].as_u64().unwrap();
        answer < 4
    }));
}

#[tokio::test]
async fn uppercase_difficulty_gets_medium_content() {
    let address = spawn_app(StubGenerator::failing()).await;
    let client = client();

    let summary: Value = client
        .post(format!("{}/api/ai/generate-summary", address))
        .json(&json!({ "topic": "evolution", "difficulty": "EASY" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(
        summary["summary"],
        fallback::summary("evolution", Difficulty::Medium)
    );

    let quiz: Value = client
        .post(format!("{}/api/ai/generate-quiz", address))
        .json(&json!({ "topic": "Photosynthesis", "difficulty": "EASY" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    let expected = serde_json::to_value(fallback::quiz("Photosynthesis", Difficulty::Medium)).unwrap();
    assert_eq!(quiz["questions"], expected);
}

#[tokio::test]
async fn non_string_difficulty_is_treated_as_medium() {
    let generator = StubGenerator::failing();
    let address = spawn_app(generator.clone()).await;

    let response = client()
        .post(format!("{}/api/ai/generate-summary", address))
        .json(&json!({ "topic": "evolution", "difficulty": 5 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["summary"], fallback::summary("evolution", Difficulty::Medium));
    assert_eq!(generator.calls(), 1);
}
