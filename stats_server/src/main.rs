#[tokio::main]
async fn main() -> std::io::Result<()> {
    stats_server::run_with_config().await
}
