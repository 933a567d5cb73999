#[tokio::main]
async fn main() {
    if let Err(e) = range_controller::run_with_config().await {
        tracing::error!(error = %e, "range controller stopped");
        std::process::exit(1);
    }
}
