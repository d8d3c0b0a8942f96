//! Sudocheck HTTP service.
//!
//! Exposes two endpoints over JSON: `POST /api/solve` completes a puzzle via
//! backtracking search, and `POST /api/check` validates a single placement
//! against the row/column/region rules. Every response is HTTP 200; failures
//! carry an `error` field instead.

use std::{io, net::SocketAddr};

use clap::Parser;

mod routes;

#[derive(Debug, Parser)]
#[command(version, about = "HTTP service that validates and solves 9x9 sudoku puzzles")]
struct Args {
    /// Socket address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, routes::router()).await
}
