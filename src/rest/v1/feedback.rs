use crate::feedback::{self, SharedStore};
use crate::Result;
use actix_web::post;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::HttpResponse;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct PostArgs {
    email: String,
    feedback: String,
}

#[post("")]
pub async fn post(args: Json<PostArgs>, store: Data<SharedStore>) -> Result<HttpResponse> {
    let store = store.lock().unwrap();
    feedback::submit(store.as_ref(), &args.email, &args.feedback)?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Thank you for your feedback!",
    })))
}
