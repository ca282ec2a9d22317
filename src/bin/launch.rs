use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::{Child, Command};

const SERVER_BIN: &str = "rust-local-store";
const SERVER_URL: &str = "http://localhost:8000";
const STARTUP_DELAY: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("==========================================");
    println!("      rust-local-store - Launcher");
    println!("==========================================");

    let server_bin = match locate_server_binary() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e:#}");
            wait_for_acknowledgment();
            return Ok(());
        }
    };

    println!("Starting backend server ({})...", server_bin.display());
    let mut server = match spawn_server(&server_bin) {
        Ok(child) => child,
        Err(e) => {
            eprintln!("Failed to start server: {e:#}");
            wait_for_acknowledgment();
            return Ok(());
        }
    };

    println!("Waiting for server to initialize...");
    tokio::time::sleep(STARTUP_DELAY).await;

    println!("Opening browser at {SERVER_URL}...");
    if let Err(e) = webbrowser::open(SERVER_URL) {
        tracing::warn!("Could not open browser: {e}");
    }

    println!();
    println!("==========================================");
    println!(" App started successfully!");
    println!(" - Server is running in the background.");
    println!(" - Press Ctrl+C to stop.");
    println!("==========================================");

    tokio::select! {
        status = server.wait() => {
            let status = status.context("Failed to wait for server process")?;
            println!("Server exited on its own ({status}).");
        }
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("Stopping server...");
            if let Err(e) = server.start_kill() {
                tracing::debug!("Server already exited: {e}");
            }
            server.wait().await.context("Failed to wait for server shutdown")?;
            println!("Server stopped. Goodbye!");
        }
    }

    Ok(())
}

/// The server binary is expected next to the launcher
fn locate_server_binary() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Cannot determine launcher path")?;
    let dir = exe.parent().context("Launcher has no parent directory")?;
    locate_server_binary_in(dir)
}

fn locate_server_binary_in(dir: &Path) -> Result<PathBuf> {
    let candidate = dir.join(format!("{SERVER_BIN}{}", std::env::consts::EXE_SUFFIX));
    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(anyhow!("server binary not found at {}", candidate.display()))
    }
}

fn spawn_server(path: &Path) -> Result<Child> {
    Command::new(path)
        .spawn()
        .with_context(|| format!("Failed to spawn {}", path.display()))
}

/// Fatal launch errors end with an acknowledged exit, not a silent one
fn wait_for_acknowledgment() {
    print!("Press Enter to exit...");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}
