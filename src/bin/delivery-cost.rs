#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    delivery_cost::cli::run().await?;
    Ok(())
}
