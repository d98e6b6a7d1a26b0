use anyhow::Result;
use ensure_kit::cli::run;

#[tokio::main]
pub async fn main() -> Result<()> {
    run().await
}
