use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    clinic_server::router().oneshot(req).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn ada() -> Value {
    json!({
        "name": "Ada",
        "age": "34",
        "sex": "Female",
        "symptoms": "Tired and dizzy",
        "systolic_bp": 120,
        "diastolic_bp": 80,
        "pulse": 72,
        "temperature_c": 0,
        "urine_color": "Dark yellow"
    })
}

#[tokio::test]
async fn health() {
    let response = send("GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn options_lists_every_choice_field() {
    let response = send("GET", "/options", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let sets = body_json(response).await;
    let sets = sets.as_array().unwrap();
    assert_eq!(sets.len(), 10);
    assert_eq!(sets[0]["field"], "sex");
    assert!(sets[0]["options"].as_array().unwrap().contains(&json!("Female")));
}

#[tokio::test]
async fn evaluate_returns_evaluation_and_summary() {
    let response = send("POST", "/evaluate", Some(ada())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["evaluation"]["blood_pressure"]["range"], "high_mild");
    assert_eq!(body["evaluation"]["temperature"]["range"], "not_provided");
    assert_eq!(body["evaluation"]["hydration"]["score"], 2);

    let summary = body["summary"].as_str().unwrap();
    assert!(summary.starts_with("Patient: Ada, Age: 34, Sex: Female"));
    assert!(summary.contains("- BP: 120/80 mmHg"));
    assert!(!summary.contains("Temperature"));
}

#[tokio::test]
async fn empty_form_is_unprocessable() {
    let response = send("POST", "/evaluate", Some(json!({ "medicines": "ibuprofen" }))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("nothing to evaluate"));
}

#[tokio::test]
async fn unknown_option_is_a_bad_request() {
    let response = send(
        "POST",
        "/evaluate",
        Some(json!({ "symptoms": "cough", "vomiting": "Constantly" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("vomiting"));
}

#[tokio::test]
async fn summary_download_is_an_attachment() {
    let response = send("POST", "/summary/download", Some(ada())).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"clinic_companion_summary.txt\""
    );
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );

    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("Hydration notes:\n- Urine colour: Dark yellow"));
    assert!(text.ends_with("agree next steps."));
}

#[tokio::test]
async fn markdown_report_has_all_sections() {
    let response = send("POST", "/report/markdown", Some(ada())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let markdown = String::from_utf8(body_bytes(response).await).unwrap();
    for heading in [
        "## 1. What doctors usually look at",
        "## 2. What your doctor may want to check",
        "## 3. When to seek urgent care",
        "## 4. Questions to ask your doctor",
        "## 5. Summary for your clinic visit",
    ] {
        assert!(markdown.contains(heading), "missing {heading}");
    }
    assert!(markdown.contains("- **Pulse:** 72 bpm"));
}

#[tokio::test]
async fn docx_report_is_a_zip_package() {
    let response = send("POST", "/report/docx", Some(ada())).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .contains("wordprocessingml")
    );

    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"PK"));
}
