use crate::cli::Cli;
use firebase_hunter::config::Config;
use firebase_hunter::http_client::create_fetch_client;
use firebase_hunter::output::page_server;
use firebase_hunter::pipeline;
use firebase_hunter::HuntError;

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Our crate at the requested level, HTTP stacks capped at info.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!(
        "firebase_hunter={crate},reqwest=info,hyper=info,axum=info",
        crate = crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(cli.to_config()).await?;
    Ok(())
}

async fn run(config: Config) -> Result<(), HuntError> {
    tracing::info!(target = %config.target, port = config.port, serve = config.serve, timeout = config.timeout_secs, "Starting hunt");
    eprintln!("[>] Target: {}", config.target);

    let client = create_fetch_client(config.timeout_secs)?;
    let extracted = pipeline::hunt(&client, &config.target).await?;

    let addr = config.listen_addr();
    let port = config.port;
    pipeline::run_sinks(&config, &extracted, &mut std::io::stdout(), |page| async move {
        let listener = page_server::bind(&addr).await?;
        eprintln!("[*] Serving on localhost:{}", port);
        page_server::serve(listener, page).await
    })
    .await
}
