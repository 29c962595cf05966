use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::categories::CategoriesResponse;
use crate::repository::DieselRepository;
use crate::routes::respond;
use crate::services::categories::show_categories as show_categories_service;

#[get("/categories")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.into_inner();
    let result = web::block(move || show_categories_service(&*repo)).await;

    respond(result, |category| {
        HttpResponse::Ok().json(CategoriesResponse { category })
    })
}
