use axum::response::Json;
use serde::Serialize;

use company_utils::take_first;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Data rendered by the home page: the demo sentence and its truncation.
#[derive(Serialize)]
pub struct ExampleView {
    pub original: String,
    pub first_five: String,
}

/// Build the example view: a fixed sentence plus its first five characters
/// computed through the shared library.
pub fn render_example() -> ExampleView {
    let original = "Hello from Azure Artifacts and Company.Utils!";
    let first_five = take_first(Some(original), 5);
    ExampleView {
        original: original.to_string(),
        first_five: first_five.to_string(),
    }
}

pub async fn get_example() -> Json<ExampleView> {
    Json(render_example())
}
