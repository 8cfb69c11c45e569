use crate::dataset::aggregate::{aggregate, AreaSummary};
use crate::dataset::{landmarks, Dataset};
use crate::{Error, Result};
use actix_web::get;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Path;
use serde::Serialize;

#[get("")]
pub async fn get(dataset: Data<Dataset>) -> Result<Json<Vec<AreaSummary>>> {
    Ok(Json(aggregate(&dataset.records)))
}

#[derive(Serialize)]
pub struct AreaDetails {
    #[serde(flatten)]
    pub summary: AreaSummary,
    pub landmarks: &'static [&'static str],
}

#[get("{id}")]
pub async fn get_by_id(id: Path<String>, dataset: Data<Dataset>) -> Result<Json<AreaDetails>> {
    let summary = aggregate(&dataset.records)
        .into_iter()
        .find(|it| it.area == *id)
        .ok_or_else(|| Error::NotFound(format!("There is no area with id {id}")))?;
    let landmarks = landmarks::find(&summary.area);
    Ok(Json(AreaDetails { summary, landmarks }))
}
