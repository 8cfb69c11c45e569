use crate::view::content::{ViewInfo, VIEWS};
use actix_web::get;
use actix_web::web::Json;

#[get("")]
pub async fn get() -> Json<&'static [ViewInfo]> {
    Json(VIEWS)
}
