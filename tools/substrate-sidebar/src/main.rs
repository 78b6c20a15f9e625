//! Substrate Sidebar: line-driven shell for the nodes panel

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use substrate_nodes::SidebarConfig;
use substrate_sidebar::{App, EditorLauncher};

/// Substrate Sidebar: drive the nodes panel from the terminal
#[derive(Parser, Debug)]
#[command(name = "substrate-sidebar")]
#[command(about = "Manage Substrate node connections from a line-based shell")]
struct Args {
    /// TOML config file with the initial node list
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Location of the types document (overrides config and environment)
    #[arg(long)]
    types_path: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Editor used for `Edit types` (defaults to $VISUAL, then $EDITOR)
    #[arg(long)]
    editor: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so scripted output stays clean
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&args).await?;
    info!(
        nodes = config.nodes.len(),
        types_path = %config.types_path.display(),
        "Starting sidebar shell"
    );

    let editor = match args.editor.clone() {
        Some(editor) => EditorLauncher::new(Some(editor)),
        None => EditorLauncher::from_env(),
    };
    let mut app = App::new(&config, editor)?;

    match &args.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run(&mut app, file, false).await?;
        }
        None => run(&mut app, io::stdin(), true).await?,
    }

    info!("Sidebar shell stopped");
    Ok(())
}

/// Defaults, then the config file, then the environment, then flags.
async fn load_config(args: &Args) -> Result<SidebarConfig> {
    let mut config = match &args.config {
        Some(path) => SidebarConfig::load(path).await?,
        None => SidebarConfig::default(),
    };
    config.apply_env();

    if let Some(path) = &args.types_path {
        config.types_path = path.clone();
    }

    Ok(config)
}

async fn run<R>(app: &mut App, input: R, prompt: bool) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut stdout = io::stdout();

    loop {
        if prompt {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };

        for output in app.handle_line(&line).await {
            stdout.write_all(output.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
