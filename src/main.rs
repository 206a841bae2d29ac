use std::{io, process, sync::Arc};

use postboard::{
    application::{board::BoardController, board::Intent, error::AppError},
    config,
    infra::{error::InfraError, http::HttpPostsClient, telemetry, terminal},
    runtime::EventLoop,
};
use tokio::{io::BufReader, sync::mpsc};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

const INTENT_QUEUE_DEPTH: usize = 64;

fn main() {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            report_application_error(&AppError::from(InfraError::from(err)));
            process::exit(1);
        }
    };

    let result = runtime.block_on(run());
    // A pending stdin read cannot be cancelled; do not wait for it.
    runtime.shutdown_background();

    if let Err(error) = result {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        log_application_error(error);
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || log_application_error(error));
}

fn log_application_error(error: &AppError) {
    error!(error = %error, origin = error.origin(), "application error");
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;

    let client = HttpPostsClient::new(&settings.remote)?;
    info!(
        base_url = %client.base(),
        config_file = ?cli_args.config_file,
        "starting board"
    );
    let controller = BoardController::new(Arc::new(client));

    let (intents_tx, intents_rx) = mpsc::channel(INTENT_QUEUE_DEPTH);
    intents_tx
        .send(Intent::Load)
        .await
        .map_err(|err| AppError::unexpected(format!("failed to queue initial load: {err}")))?;
    let reader = terminal::spawn_reader(BufReader::new(tokio::io::stdin()), intents_tx);

    let (store, _stdout) = EventLoop::new(controller, io::stdout()).run(intents_rx).await?;
    reader.abort();

    info!(posts = store.posts().len(), "board closed");
    Ok(())
}
