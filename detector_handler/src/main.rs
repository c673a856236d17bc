pub mod handlers;

use std::env;
use axum::Router;
use axum::routing::get;
use handlers::emotion_detector;
use lambda_http::{run, Error};
use lib::env_keys::{AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH, AWS_LAMBDA_RUNTIME_API, LISTEN_ADDRESS};
use lib::service::CommonService;
use tracing::info;

const DEFAULT_LISTEN_ADDRESS: &str = "localhost:5000";


// environment is written before the runtime spawns its worker threads
fn main() -> Result<(), Error> {
    let in_lambda = env::var(AWS_LAMBDA_RUNTIME_API).is_ok();
    if in_lambda {
        env::set_var(AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH, "true");
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(in_lambda))
}

async fn serve(in_lambda: bool) -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();

    let service = CommonService::new();
    let app = router(service);

    if in_lambda {
        info!("starting lambda runtime");
        return run(app).await;
    }

    let address = env::var(LISTEN_ADDRESS).unwrap_or(DEFAULT_LISTEN_ADDRESS.to_owned());
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("listening on {}", address);
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(service: CommonService) -> Router {
    Router::new()
        .route("/emotionDetector", get(emotion_detector))
        .with_state(service)
}
