//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router, async_trait,
    extract::{Form, FromRequest, Request, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::domain::City;
use crate::router::{Route, RouteError, cheapest_trip, quickest_trip};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/trip/search", post(search_trip))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the trip search form.
///
/// Rendered through askama_axum's `IntoResponse` for templates.
async fn index_page(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        departure_cities: state
            .deals
            .departure_cities()
            .iter()
            .map(|c| c.to_string())
            .collect(),
        arrival_cities: state
            .deals
            .arrival_cities()
            .iter()
            .map(|c| c.to_string())
            .collect(),
    }
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Extractor accepting either a urlencoded form or a JSON body,
/// dispatched on the request's Content-Type.
struct FormOrJson<T>(T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(value) =
                Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest {
                        message: format!("Invalid JSON body: {e}"),
                    })?;
            Ok(FormOrJson(value))
        } else {
            let Form(value) =
                Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest {
                        message: format!("Invalid form body: {e}"),
                    })?;
            Ok(FormOrJson(value))
        }
    }
}

/// Search for the cheapest or fastest trip between two cities.
async fn search_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    FormOrJson(req): FormOrJson<TripSearchRequest>,
) -> Response {
    let wants_html = accepts_html(&headers);

    let route = match run_search(&state, &req) {
        Ok(route) => route,
        Err(err) => return error_response(err, wants_html),
    };

    info!(
        departure = %req.departure,
        arrival = %req.arrival,
        search_type = ?req.search_type,
        legs = route.legs().len(),
        "trip search"
    );

    // Return HTML or JSON based on Accept header
    if wants_html {
        let template = TripResultsTemplate::from_route(&route, state.deals.currency());
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => error_response(
                AppError::Internal {
                    message: format!("Template error: {}", e),
                },
                wants_html,
            ),
        }
    } else {
        Json(TripSearchResponse::from_route(&route, state.deals.currency())).into_response()
    }
}

/// Validate the request cities and run the selected search.
fn run_search(state: &AppState, req: &TripSearchRequest) -> Result<Route, AppError> {
    let departure = City::parse(&req.departure).map_err(|_| AppError::BadRequest {
        message: format!("Invalid departure city: {:?}", req.departure),
    })?;
    let arrival = City::parse(&req.arrival).map_err(|_| AppError::BadRequest {
        message: format!("Invalid arrival city: {:?}", req.arrival),
    })?;

    let route = match req.search_type {
        SearchType::Cheapest => {
            cheapest_trip(&state.graph, state.deals.deals(), &departure, &arrival)
        }
        SearchType::Fastest => {
            quickest_trip(&state.graph, state.deals.deals(), &departure, &arrival)
        }
    }?;

    Ok(route)
}

/// Render an error as an HTML fragment for form submissions, or as JSON
/// for API clients.
fn error_response(err: AppError, wants_html: bool) -> Response {
    if !wants_html {
        return err.into_response();
    }

    let (status, title, message) = match &err {
        AppError::BadRequest { message } => {
            (StatusCode::BAD_REQUEST, "Invalid request", message.clone())
        }
        AppError::Internal { message } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Search failed", message.clone())
        }
    };

    error!("[{status}] {message}");

    let template = ErrorTemplate {
        title: title.to_string(),
        message,
    };
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(_) => err.into_response(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        // A resolution failure means the dataset invariants are broken;
        // the user only sees a generic failure
        error!("route resolution failed: {e}");
        AppError::Internal {
            message: "unable to compute route".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        error!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::dataset::DealSet;

    const DATA: &str = r#"{
        "currency": "EUR",
        "deals": [
            { "transport": "bus", "departure": "A", "arrival": "B",
              "duration": { "h": "01", "m": "00" },
              "cost": 50, "discount": 0, "reference": "BUS" },
            { "transport": "train", "departure": "A", "arrival": "B",
              "duration": { "h": "00", "m": "30" },
              "cost": 80, "discount": 0, "reference": "TRAIN" },
            { "transport": "car", "departure": "B", "arrival": "C",
              "duration": { "h": "00", "m": "45" },
              "cost": 20, "discount": 0, "reference": "CAR" }
        ]
    }"#;

    fn app() -> Router {
        let deals = DealSet::from_json(DATA).unwrap();
        create_router(AppState::new(deals), "static")
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn json_request_returns_json_route() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/trip/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::ACCEPT, "application/json")
                    .body(Body::from(
                        r#"{"departure": "A", "arrival": "C", "type": "cheapest"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        let legs = json["legs"].as_array().unwrap();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0]["reference"], "BUS");
        assert_eq!(legs[1]["reference"], "CAR");
        assert_eq!(json["total_cost"], 70.0);
    }

    #[tokio::test]
    async fn form_request_returns_html_fragment() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/trip/search")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .header(header::ACCEPT, "text/html")
                    .body(Body::from("departure=A&arrival=C&type=fastest"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("TRAIN"));
        assert!(html.contains("CAR"));
        assert!(html.contains("1h15m"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/trip/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"departure": "A""#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn html_error_renders_error_fragment() {
        // A blank departure city fails validation; the form client gets
        // an HTML error fragment, not raw JSON
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/trip/search")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .header(header::ACCEPT, "text/html")
                    .body(Body::from("departure=%20&arrival=C&type=cheapest"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let html = body_string(response).await;
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Invalid request"));
        assert!(!html.starts_with('{'));
    }

    #[tokio::test]
    async fn api_error_stays_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/trip/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::ACCEPT, "application/json")
                    .body(Body::from(
                        r#"{"departure": " ", "arrival": "C", "type": "cheapest"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["error"].as_str().unwrap().contains("departure"));
    }

    #[tokio::test]
    async fn no_route_renders_empty_result() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/trip/search")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .header(header::ACCEPT, "text/html")
                    .body(Body::from("departure=C&arrival=A&type=cheapest"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("No route found"));
    }
}
