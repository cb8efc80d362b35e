use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::domain::filter::RentalFilter;
use crate::forms::rentals::RentalsQueryForm;
use crate::repository::AppRepository;
use crate::routes::{error_body, service_error_response};
use crate::services::{ServiceError, rentals as rental_service};

#[get("/rentals/{rental_id}")]
pub async fn show_rental(
    rental_id: web::Path<String>,
    repo: web::Data<AppRepository>,
) -> impl Responder {
    let Ok(rental_id) = rental_id.trim().parse::<i32>() else {
        return error_body(HttpResponse::BadRequest(), "invalid rental ID");
    };

    let result = web::block(move || rental_service::get_rental_by_id(repo.get_ref(), rental_id))
        .await
        .unwrap_or_else(|e| Err(ServiceError::Internal(e.to_string())));

    match result {
        Ok(rental) => HttpResponse::Ok().json(rental),
        Err(ServiceError::Validation(_)) => {
            error_body(HttpResponse::BadRequest(), "invalid rental ID")
        }
        Err(err) => service_error_response(&err, "rental not found"),
    }
}

#[get("/rentals")]
pub async fn list_rentals(req: HttpRequest, repo: web::Data<AppRepository>) -> impl Responder {
    let filter = match RentalsQueryForm::from_query(req.query_string())
        .and_then(RentalFilter::try_from)
    {
        Ok(filter) => filter,
        Err(e) => {
            log::warn!("Rejected rentals query {:?}: {e}", req.query_string());
            return error_body(HttpResponse::BadRequest(), &e.to_string());
        }
    };

    let result = web::block(move || rental_service::list_rentals(repo.get_ref(), &filter))
        .await
        .unwrap_or_else(|e| Err(ServiceError::Internal(e.to_string())));

    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(&err, "no rentals found"),
    }
}
