use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::users::UsersResponse;
use crate::repository::DieselRepository;
use crate::routes::respond;
use crate::services::users::show_users as show_users_service;

#[get("/users")]
pub async fn show_users(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.into_inner();
    let result = web::block(move || show_users_service(&*repo)).await;

    respond(result, |users| HttpResponse::Ok().json(UsersResponse { users }))
}
