use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jiopay_assist::api::{create_router, AppState};
use jiopay_assist::config::Config;
use jiopay_assist::knowledge::KnowledgeStore;
use jiopay_assist::proxy::AnswerProxy;
use jiopay_assist::retrieval::{KeywordMatcher, Retriever};
use jiopay_assist::session::ChatSession;

#[derive(Parser)]
#[command(name = "jiopay-assist")]
#[command(about = "Support-chat proxy for JioPay")]
struct Args {
    /// Address to bind the HTTP server to (overrides ASSIST_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Port to bind the HTTP server to (overrides ASSIST_PORT)
    #[arg(long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Ask the support backend a single question
    Ask {
        /// The question to send
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Show which help articles match a query
    Sources {
        #[arg(required = true)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jiopay_assist=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Ask { question } => ask(config, &question.join(" ")).await,
        Command::Sources { query } => sources(&query.join(" ")).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    if !config.backend.is_configured() {
        tracing::warn!(
            "CHAT_LINK is not set - chat requests will receive the fallback message"
        );
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config)?;
    let app = create_router(state);

    tracing::info!("JioPay Assist starting on http://{}", addr);
    tracing::info!("  Chat:         http://{}/api/chat", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn ask(config: Config, question: &str) -> anyhow::Result<()> {
    let proxy = AnswerProxy::new(config.backend)?;
    let mut session = ChatSession::new(proxy);

    let Some(reply) = session.submit(question).await? else {
        anyhow::bail!("question is empty");
    };

    println!("{}", reply.content);
    if let Some(sources) = reply.sources.filter(|s| !s.is_empty()) {
        println!();
        println!("Sources:");
        for source in sources {
            println!("  - {} ({})", source.title, source.url);
        }
    }

    Ok(())
}

async fn sources(query: &str) -> anyhow::Result<()> {
    let matcher = KeywordMatcher::new(KnowledgeStore::builtin());
    let documents = matcher.find_relevant(query).await?;

    if documents.is_empty() {
        println!("No matching articles.");
    }
    for doc in documents {
        println!("{} ({})", doc.title, doc.url);
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server...");
}
