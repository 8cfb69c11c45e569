use crate::conf::Conf;
use crate::dataset::aggregate::aggregate;
use crate::dataset::loader;
use crate::Result;

// Runs the aggregation pipeline once and prints the per-area dataset
pub async fn run() -> Result<()> {
    let conf = Conf::from_env()?;
    let records = loader::fetch(&conf.dataset_url).await?;
    let summaries = aggregate(&records);
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
