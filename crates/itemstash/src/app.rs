use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        items::{create_item, delete_item, get_item, list_items, update_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // Item routes with CORS
    let api_routes = Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn app() -> Router {
        create_app(AppState::in_memory().await)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_items_empty() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/items/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_full_crud_scenario() {
        let app = app().await;

        // Create
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/?name=Book&description=A%20novel")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Item created successfully");
        assert_eq!(json["item"]["id"], 1);
        assert_eq!(json["item"]["name"], "Book");
        assert_eq!(json["item"]["description"], "A novel");

        // Get
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/items/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Book", "description": "A novel"})
        );

        // Update
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/items/1?name=Book2&description=Updated")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Item updated");
        assert_eq!(json["item"]["id"], 1);
        assert_eq!(json["item"]["name"], "Book2");
        assert_eq!(json["item"]["description"], "Updated");

        // Delete
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/items/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Item deleted successfully");

        // Gone
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/items/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_after_inserting_n_items() {
        let app = app().await;

        for i in 0..3 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(format!("/items/?name=item-{i}&description=d-{i}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/items/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 3);

        // Each listed item is retrievable individually by its id
        for item in items {
            let id = item["id"].as_i64().unwrap();
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri(format!("/items/{id}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(&body_json(response).await, item);
        }
    }

    #[tokio::test]
    async fn test_get_nonexistent_item() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/items/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Item not found");
    }

    #[tokio::test]
    async fn test_update_nonexistent_item() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/items/999?name=x&description=y")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Item not found");
    }

    #[tokio::test]
    async fn test_delete_nonexistent_item() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/items/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Item not found");
    }

    #[tokio::test]
    async fn test_delete_twice_yields_not_found() {
        let app = app().await;

        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/?name=Book&description=A%20novel")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let first = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/items/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/items/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let app = app().await;

        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/?name=Book&description=A%20novel")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("PUT")
                        .uri("/items/1?name=Book2&description=Updated")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            bodies.push(body_json(response).await);
        }

        assert_eq!(bodies[0], bodies[1]);
    }

    #[tokio::test]
    async fn test_create_accepts_empty_strings() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/?name=&description=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["item"]["name"], "");
        assert_eq!(json["item"]["description"], "");
    }

    #[tokio::test]
    async fn test_create_missing_param_is_rejected() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/?name=Book")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_non_integer_id_is_rejected() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/items/not-a-number")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
