#[tokio::main]
async fn main() -> std::io::Result<()> {
    landing_server::run_with_config().await
}
