use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::comments::{CommentsResponse, CreatedCommentResponse};
use crate::repository::DieselRepository;
use crate::routes::{read_body, respond};
use crate::services::comments::{
    add_comment as add_comment_service, show_review_comments as show_review_comments_service,
};

#[get("/reviews/{review_id}/comments")]
pub async fn show_review_comments(
    review_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let review_id = review_id.into_inner();
    let repo = repo.into_inner();
    let result =
        web::block(move || show_review_comments_service(&review_id, &*repo)).await;

    respond(result, |comments| {
        HttpResponse::Ok().json(CommentsResponse { comments })
    })
}

#[post("/reviews/{review_id}/comments")]
pub async fn add_comment(
    review_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    payload: web::Payload,
) -> impl Responder {
    let review_id = review_id.into_inner();
    let body = read_body(payload).await;
    let repo = repo.into_inner();
    let result = web::block(move || add_comment_service(&review_id, body, &*repo)).await;

    respond(result, |comment| {
        HttpResponse::Created().json(CreatedCommentResponse {
            comment: vec![comment],
        })
    })
}
