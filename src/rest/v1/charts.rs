use crate::dataset::aggregate::aggregate;
use crate::dataset::Dataset;
use crate::view::existence::{tabulate, ExistenceColumn, ValueCount};
use crate::view::heatmap::{percentages, AreaPercentages};
use crate::view::metric::{total_by_area, AreaValue, Metric};
use crate::{Error, Result};
use actix_web::get;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Path;
use serde::Serialize;

#[get("/existence/{column}")]
pub async fn existence(
    column: Path<String>,
    dataset: Data<Dataset>,
) -> Result<Json<Vec<ValueCount>>> {
    let column: ExistenceColumn = column
        .parse()
        .map_err(|_| Error::InvalidInput(format!("Unknown existence column: {column}")))?;
    Ok(Json(tabulate(&dataset.records, column)))
}

#[get("/metric-by-area/{metric}")]
pub async fn metric_by_area(
    metric: Path<String>,
    dataset: Data<Dataset>,
) -> Result<Json<Vec<AreaValue>>> {
    let metric: Metric = metric
        .parse()
        .map_err(|_| Error::InvalidInput(format!("Unknown metric: {metric}")))?;
    Ok(Json(total_by_area(&dataset.records, metric)))
}

#[get("/heatmap")]
pub async fn heatmap(dataset: Data<Dataset>) -> Result<Json<Vec<AreaPercentages>>> {
    Ok(Json(percentages(&aggregate(&dataset.records))))
}

#[derive(Serialize)]
pub struct AreaTotal {
    pub area: String,
    pub total: i64,
}

#[get("/totals")]
pub async fn totals(dataset: Data<Dataset>) -> Result<Json<Vec<AreaTotal>>> {
    let totals = aggregate(&dataset.records)
        .into_iter()
        .map(|it| AreaTotal {
            area: it.area,
            total: it.total,
        })
        .collect();
    Ok(Json(totals))
}
