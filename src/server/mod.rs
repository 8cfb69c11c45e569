use crate::conf::{Conf, FeedbackBacking};
use crate::dataset::{loader, Dataset};
use crate::error;
use crate::feedback::{FeedbackStore, FlatFileStore, SqliteStore};
use crate::rest::v1;
use crate::Result;
use actix_web::dev::Service;
use actix_web::web::scope;
use actix_web::web::Data;
use actix_web::web::QueryConfig;
use actix_web::{
    middleware::{Compress, NormalizePath},
    App, HttpServer,
};
use futures_util::future::FutureExt;
use std::sync::Mutex;
use time::OffsetDateTime;
use tracing::info;

pub async fn run(conf: Conf) -> Result<()> {
    // No view can render without the dataset, so a fetch failure aborts here
    let records = loader::fetch(&conf.dataset_url).await?;
    let dataset = Data::new(Dataset { records });

    let store: Box<dyn FeedbackStore + Send> = match &conf.feedback_backing {
        FeedbackBacking::File(path) => Box::new(FlatFileStore::new(path.clone())),
        FeedbackBacking::Sqlite(path) => Box::new(SqliteStore::open(path)?),
    };
    let store = Data::new(Mutex::new(store));

    info!(host = conf.host.as_str(), port = conf.port, "Starting HTTP server");

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let req_method = req.method().as_str().to_string();
                let req_path = req.path().to_string();
                let req_time = OffsetDateTime::now_utc();
                srv.call(req).map(move |res| {
                    if let Ok(res) = res.as_ref() {
                        let res_status = res.status().as_u16();
                        let res_time_sec = (OffsetDateTime::now_utc() - req_time).as_seconds_f64();
                        if res_time_sec > 5.0 {
                            info!(req_method, req_path, res_status, res_time_sec);
                        }
                    }
                    res
                })
            })
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(dataset.clone())
            .app_data(store.clone())
            .app_data(QueryConfig::default().error_handler(error::query_error_handler))
            .service(
                scope("v1")
                    .service(scope("views").service(v1::views::get))
                    .service(
                        scope("areas")
                            .service(v1::areas::get)
                            .service(v1::areas::get_by_id),
                    )
                    .service(
                        scope("charts")
                            .service(v1::charts::existence)
                            .service(v1::charts::metric_by_area)
                            .service(v1::charts::heatmap)
                            .service(v1::charts::totals),
                    )
                    .service(scope("map").service(v1::map::get))
                    .service(scope("feedback").service(v1::feedback::post)),
            )
    })
    .bind((conf.host.as_str(), conf.port))?
    .run()
    .await?;

    Ok(())
}
