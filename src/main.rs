use downlog_api::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, download_log) = bootstrap::app::setup();

    let jobs = app::start(&config, download_log).await;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Downlog API shutting down ..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("Downlog API successfully shutdown.");
        }
    }
}
