#[tokio::main]
async fn main() -> std::io::Result<()> {
    results_server::run_with_config().await
}
