use crate::controller::Controller;
use crate::error::ApiError;
use crate::handler::AppModule;
use crate::route::book::request::{CreateRequest, DeleteRequest, GetRequest, Transformer, UpdateRequest};
use crate::route::book::response::Presenter;
use application::service::{CreateBookService, DeleteBookService, GetBookService, UpdateBookService};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

pub mod request;
pub mod response;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/api/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move { module.database().get_all_books().await })
                    .await
                    .map_err(ApiError::from)
            })
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.database().create_book(dto).await })
                        .await
                        .map_err(ApiError::from)
                },
            ),
        )
        .route("/api/books/health", get(|| async { "OK" }))
        .route(
            "/api/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<i32>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| async move { module.database().get_book(dto).await })
                        .await
                        .map_err(ApiError::from)
                        .and_then(|res| res.ok_or(ApiError::NotFound(id)))
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<i32>,
                 Json(req): Json<UpdateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake((id, req))?
                        .handle(|dto| async move { module.database().update_book(dto).await })
                        .await
                        .map_err(ApiError::from)
                        .and_then(|res| res.ok_or(ApiError::NotFound(id)))
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<i32>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteRequest::new(id))
                        .handle(|dto| async move { module.database().delete_book(dto).await })
                        .await
                        .map_err(ApiError::from)
                        .and_then(|res| res.ok_or(ApiError::NotFound(id)))
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{header, Method, Request, Response, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::handler::AppModule;
    use crate::route::BookRouter;

    fn app() -> Router {
        Router::new().route_book().with_state(AppModule::new())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response<Body>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_read_update_delete_flow() {
        let app = app();

        let created = send(
            &app,
            Method::POST,
            "/api/books",
            Some(json!({
                "title": "Clean Code",
                "author": "Robert C. Martin",
                "isbn": "9780132350884",
                "publishedYear": 2008
            })),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        assert_eq!(
            created.headers().get(header::LOCATION).unwrap(),
            "/api/books/1"
        );
        let body = json_body(created).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "Clean Code");
        assert_eq!(body["publishedYear"], 2008);

        let fetched = send(&app, Method::GET, "/api/books/1", None).await;
        assert_eq!(fetched.status(), StatusCode::OK);
        let body = json_body(fetched).await;
        assert_eq!(body["author"], "Robert C. Martin");
        assert_eq!(body["isbn"], "9780132350884");

        let updated = send(
            &app,
            Method::PATCH,
            "/api/books/1",
            Some(json!({
                "title": "Refactoring",
                "author": "Martin Fowler",
                "isbn": "9780201485677",
                "publishedYear": 1999
            })),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let body = json_body(updated).await;
        assert_eq!(body["id"], 1, "id must survive an update");
        assert_eq!(body["title"], "Refactoring");

        let deleted = send(&app, Method::DELETE, "/api/books/1", None).await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
        let bytes = deleted.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());

        let gone = send(&app, Method::GET, "/api/books/1", None).await;
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
        let body = json_body(gone).await;
        assert_eq!(body["status"], 404);
        assert!(body["errors"][0].as_str().unwrap().contains('1'));
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let app = app();

        let response = send(
            &app,
            Method::POST,
            "/api/books",
            Some(json!({"title": "", "author": "Anonymous"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["status"], 400);
        assert!(body["timestamp"].is_string());
        assert_eq!(body["errors"][0], "Title is required");
    }

    #[tokio::test]
    async fn create_reports_every_missing_field() {
        let app = app();

        let response = send(&app, Method::POST, "/api/books", Some(json!({}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&json!("Title is required")));
        assert!(errors.contains(&json!("Author is required")));
    }

    #[tokio::test]
    async fn optional_fields_serialize_as_null() {
        let app = app();

        let created = send(
            &app,
            Method::POST,
            "/api/books",
            Some(json!({"title": "Untracked", "author": "Nobody"})),
        )
        .await;
        let body = json_body(created).await;
        assert_eq!(body["isbn"], Value::Null);
        assert_eq!(body["publishedYear"], Value::Null);
    }

    #[tokio::test]
    async fn list_returns_every_created_book() {
        let app = app();

        for title in ["a", "b", "c"] {
            let response = send(
                &app,
                Method::POST,
                "/api/books",
                Some(json!({"title": title, "author": "author"})),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let listed = send(&app, Method::GET, "/api/books", None).await;
        assert_eq!(listed.status(), StatusCode::OK);
        let body = json_body(listed).await;
        let books = body.as_array().unwrap();
        assert_eq!(books.len(), 3);
        let mut titles = books
            .iter()
            .map(|b| b["title"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        titles.sort();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn missing_book_yields_error_body_naming_the_id() {
        let app = app();

        let response = send(&app, Method::GET, "/api/books/99", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["status"], 404);
        assert!(body["timestamp"].is_string());
        assert_eq!(body["errors"][0], "Book not found with id: 99");
    }

    #[tokio::test]
    async fn patch_and_delete_missing_book_yield_404() {
        let app = app();

        let patched = send(
            &app,
            Method::PATCH,
            "/api/books/7",
            Some(json!({"title": "t", "author": "a"})),
        )
        .await;
        assert_eq!(patched.status(), StatusCode::NOT_FOUND);

        let deleted = send(&app, Method::DELETE, "/api/books/7", None).await;
        assert_eq!(deleted.status(), StatusCode::NOT_FOUND);
        let body = json_body(deleted).await;
        assert_eq!(body["errors"][0], "Book not found with id: 7");
    }

    #[tokio::test]
    async fn patch_validates_like_create() {
        let app = app();

        let created = send(
            &app,
            Method::POST,
            "/api/books",
            Some(json!({"title": "kept", "author": "kept"})),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let response = send(
            &app,
            Method::PATCH,
            "/api/books/1",
            Some(json!({"title": "  ", "author": ""})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // The rejected update must not have touched the record.
        let fetched = send(&app, Method::GET, "/api/books/1", None).await;
        let body = json_body(fetched).await;
        assert_eq!(body["title"], "kept");
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let app = app();

        let response = send(&app, Method::GET, "/api/books/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn ids_keep_growing_after_delete() {
        let app = app();

        for title in ["first", "second"] {
            send(
                &app,
                Method::POST,
                "/api/books",
                Some(json!({"title": title, "author": "author"})),
            )
            .await;
        }
        send(&app, Method::DELETE, "/api/books/2", None).await;

        let created = send(
            &app,
            Method::POST,
            "/api/books",
            Some(json!({"title": "third", "author": "author"})),
        )
        .await;
        let body = json_body(created).await;
        assert_eq!(body["id"], 3);
    }
}
