use crate::conf::Conf;
use crate::{server, Result};

pub async fn run() -> Result<()> {
    let conf = Conf::from_env()?;
    server::run(conf).await
}
