use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use gridiron_iq::{load_questions_from_json, Question, QuestionStore, QuizSelector};
use serde_json::Value;
use tokio::net::TcpListener;

fn bundled_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/questions.json")
}

async fn spawn_server(store: QuestionStore) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let selector = QuizSelector::new(Arc::new(store));

    tokio::spawn(async move {
        gridiron_iq::server::serve(listener, selector).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn get(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}

fn bundled() -> Vec<Question> {
    load_questions_from_json(bundled_path()).unwrap()
}

fn assert_matches_bank(returned: &Value, bank: &[Question]) {
    let id = returned["id"].as_str().unwrap();
    let original = bank.iter().find(|q| q.id() == id).unwrap();

    let options: Vec<String> = returned["a"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o.as_str().unwrap().to_string())
        .collect();
    let correct = returned["correct"].as_u64().unwrap() as usize;

    assert_eq!(options.len(), 4);
    assert_eq!(options[correct], original.correct_answer());

    let mut sorted = options.clone();
    let mut want = original.options().to_vec();
    sorted.sort();
    want.sort();
    assert_eq!(sorted, want);

    assert_eq!(returned["q"], original.text());
    assert_eq!(returned["type"], original.category().as_str());
    assert_eq!(returned["expl"], original.explanation());
    assert_eq!(returned["difficulty"], original.difficulty());
}

#[test]
fn test_bundled_dataset_is_valid() {
    let bank = bundled();
    assert!(bank.len() >= 10);
    assert!(bank.iter().any(|q| q.category().as_str() == "History"));
    assert!(bank.iter().any(|q| q.category().as_str() == "Scheme"));
}

#[tokio::test]
async fn test_default_count() {
    let base = spawn_server(QuestionStore::new(bundled_path())).await;
    let bank = bundled();

    let (status, body) = get(&format!("{}/api/questions", base)).await;
    assert_eq!(status, 200);

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 4);

    let ids: HashSet<&str> = questions.iter().map(|q| q["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), 4);
    questions.iter().for_each(|q| assert_matches_bank(q, &bank));
}

#[tokio::test]
async fn test_count_validation() {
    let base = spawn_server(QuestionStore::new(bundled_path())).await;

    for bad in ["0", "11", "-1"] {
        let (status, body) = get(&format!("{}/api/questions?count={}", base, bad)).await;
        assert_eq!(status, 422, "count={}", bad);
        assert!(body["detail"].as_str().unwrap().contains("count"));
    }

    let (status, body) = get(&format!("{}/api/questions?count=10", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_category_filter() {
    let base = spawn_server(QuestionStore::new(bundled_path())).await;

    let (status, body) = get(&format!("{}/api/questions?count=10&categories=Scheme", base)).await;
    assert_eq!(status, 200);

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 6);
    assert!(questions.iter().all(|q| q["type"] == "Scheme"));
}

#[tokio::test]
async fn test_unknown_category_falls_back() {
    let base = spawn_server(QuestionStore::new(bundled_path())).await;

    let (status, body) =
        get(&format!("{}/api/questions?count=2&categories=Playoffs", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_dataset_is_server_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let base = spawn_server(QuestionStore::new(tmp.path().join("missing.json"))).await;

    let (status, body) = get(&format!("{}/api/questions", base)).await;
    assert_eq!(status, 500);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Error fetching questions"));
}

#[tokio::test]
async fn test_health_and_root() {
    let base = spawn_server(QuestionStore::new(bundled_path())).await;

    let (status, body) = get(&format!("{}/health", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "gridiron-iq");

    let (status, body) = get(&format!("{}/", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Gridiron IQ API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
