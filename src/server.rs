//! HTTP surface: one engine per session.

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SessionStore;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionOpened {
    session_id: Uuid,
    greeting: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageRequest {
    user_input: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn unknown_session(id: Uuid) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody {
        error: format!("unknown session {}", id),
    })
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("index.html"))
}

#[post("/sessions")]
async fn open_session(store: web::Data<SessionStore>) -> impl Responder {
    let (session_id, greeting) = store.open();
    HttpResponse::Created().json(SessionOpened {
        session_id,
        greeting,
    })
}

#[post("/sessions/{id}/messages")]
async fn send_message(
    path: web::Path<Uuid>,
    req: web::Json<MessageRequest>,
    store: web::Data<SessionStore>,
) -> impl Responder {
    let id = path.into_inner();
    match store.process(id, &req.user_input) {
        Some(result) => HttpResponse::Ok().json(result),
        None => unknown_session(id),
    }
}

#[get("/sessions/{id}/history")]
async fn history(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    let id = path.into_inner();
    match store.history(id) {
        Some(turns) => HttpResponse::Ok().json(turns),
        None => unknown_session(id),
    }
}

#[post("/sessions/{id}/reset")]
async fn reset(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    let id = path.into_inner();
    if store.reset(id) {
        HttpResponse::NoContent().finish()
    } else {
        unknown_session(id)
    }
}

#[delete("/sessions/{id}")]
async fn close_session(path: web::Path<Uuid>, store: web::Data<SessionStore>) -> impl Responder {
    let id = path.into_inner();
    if store.close(id) {
        HttpResponse::NoContent().finish()
    } else {
        unknown_session(id)
    }
}

/// Registers every route. The app must carry `web::Data<SessionStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(open_session)
        .service(send_message)
        .service(history)
        .service(reset)
        .service(close_session);
}
