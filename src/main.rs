//! Host-side helper: `cargo run` builds the wasm package into `static/pkg`
//! and serves `static/` locally so the start lights can be tried in a
//! browser. Set `LIGHTS_PORT` to change the port (default 8000).

use std::env;
use std::io;
use std::process::{Command, ExitCode};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            return Err(io::Error::other("wasm-pack finished with errors"));
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH; serving whatever is already in static/pkg.");
        }
    }

    let port = env::var("LIGHTS_PORT").unwrap_or_else(|_| "8000".to_string());
    println!("Serving static/ at http://127.0.0.1:{port} …");
    let status = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .status()?;
    if !status.success() {
        return Err(io::Error::other("http server exited with an error"));
    }
    Ok(())
}
