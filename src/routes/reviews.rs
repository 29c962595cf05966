use actix_web::{HttpResponse, Responder, get, patch, web};

use crate::dto::reviews::{ReviewResponse, ReviewsResponse, UpdatedReviewResponse};
use crate::repository::DieselRepository;
use crate::routes::{read_body, respond};
use crate::services::reviews::{
    show_review as show_review_service, show_reviews as show_reviews_service,
    update_review_votes as update_review_votes_service,
};

#[get("/reviews")]
pub async fn show_reviews(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.into_inner();
    let result = web::block(move || show_reviews_service(&*repo)).await;

    respond(result, |reviews| {
        HttpResponse::Ok().json(ReviewsResponse { reviews })
    })
}

#[get("/reviews/{review_id}")]
pub async fn show_review(
    review_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let review_id = review_id.into_inner();
    let repo = repo.into_inner();
    let result = web::block(move || show_review_service(&review_id, &*repo)).await;

    respond(result, |review| {
        HttpResponse::Ok().json(ReviewResponse { review })
    })
}

#[patch("/reviews/{review_id}")]
pub async fn update_review_votes(
    review_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    payload: web::Payload,
) -> impl Responder {
    let review_id = review_id.into_inner();
    let body = read_body(payload).await;
    let repo = repo.into_inner();
    let result =
        web::block(move || update_review_votes_service(&review_id, body, &*repo)).await;

    respond(result, |review| {
        HttpResponse::Ok().json(UpdatedReviewResponse {
            review: vec![review],
        })
    })
}
