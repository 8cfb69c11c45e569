use crate::{Error, Result};
use std::env;
use std::path::PathBuf;

static DEFAULT_DATASET_URL: &str =
    "https://linked.aub.edu.lb/pkgcube/data/04c5f4bde28959f32bea81b9138bf5b3_20240905_163812.csv";

pub struct Conf {
    pub dataset_url: String,
    pub host: String,
    pub port: u16,
    pub feedback_backing: FeedbackBacking,
}

pub enum FeedbackBacking {
    File(PathBuf),
    Sqlite(PathBuf),
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        let port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .map_err(|_| Error::InvalidInput(format!("Invalid PORT: {port}")))?,
            Err(_) => 8000,
        };
        Ok(Conf {
            dataset_url: env::var("DATASET_URL").unwrap_or_else(|_| DEFAULT_DATASET_URL.into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port,
            feedback_backing: feedback_backing_from_env()?,
        })
    }
}

fn feedback_backing_from_env() -> Result<FeedbackBacking> {
    match env::var("FEEDBACK_BACKING").as_deref() {
        Ok("file") | Err(_) => {
            let path = env::var("FEEDBACK_FILE").unwrap_or_else(|_| "submitted_emails.txt".into());
            Ok(FeedbackBacking::File(path.into()))
        }
        Ok("sqlite") => {
            let path = env::var("FEEDBACK_DB").unwrap_or_else(|_| "feedback.db".into());
            Ok(FeedbackBacking::Sqlite(path.into()))
        }
        Ok(other) => Err(Error::InvalidInput(format!(
            "Unknown feedback backing: {other}"
        ))),
    }
}

#[cfg(test)]
mod test {
    use crate::Result;

    #[test]
    fn defaults() -> Result<()> {
        let conf = super::Conf::from_env()?;
        assert_eq!(super::DEFAULT_DATASET_URL, conf.dataset_url);
        assert_eq!(8000, conf.port);
        assert!(matches!(
            conf.feedback_backing,
            super::FeedbackBacking::File(_)
        ));
        Ok(())
    }
}
