#[tokio::main]
async fn main() -> std::io::Result<()> {
    projectile_lab::run_with_config().await
}
