//! Member Administration Console
//!
//! Interactive client for a running server at ROSTER_URL.
use clap::Parser;
use roster_console::Client;
use roster_console::Console;

#[derive(Parser)]
#[command(name = "console", about = "Member administration console")]
struct Args {
    /// Base URL of the server.
    #[arg(long, env = "ROSTER_URL", default_value = "http://127.0.0.1:8080")]
    server: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roster_core::log(true)?;
    roster_core::kys();
    Console::from(Client::new(&args.server)?).run().await?;
    Ok(())
}
