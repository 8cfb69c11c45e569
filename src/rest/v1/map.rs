use crate::dataset::aggregate::aggregate;
use crate::dataset::Dataset;
use crate::view::map::feature_collection;
use crate::Result;
use actix_web::get;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Query;
use geojson::FeatureCollection;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GetArgs {
    min_total: Option<i64>,
}

#[get("")]
pub async fn get(args: Query<GetArgs>, dataset: Data<Dataset>) -> Result<Json<FeatureCollection>> {
    let summaries = aggregate(&dataset.records);
    Ok(Json(feature_collection(
        &summaries,
        args.min_total.unwrap_or(0),
    )))
}
