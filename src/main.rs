//! Host-side helper: `cargo run` builds the invitation's wasm bundle into
//! `static/pkg` and serves `static/` on a local port.
//!
//! Pass `?skipIntro` (or `#skipIntro`) in the browser to jump past the gate.

use std::process::{Command, ExitCode, Stdio};
use std::{env, thread, time::Duration};

const DEFAULT_PORT: &str = "8000";

fn wasm_pack() -> Command {
    let mut cmd = Command::new("wasm-pack");
    cmd.args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"]);
    cmd
}

fn main() -> ExitCode {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return ExitCode::SUCCESS;
    }
    let port = env::var("INVITE_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

    println!("Building WASM pkg …");
    match wasm_pack().status() {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the page may serve stale artifacts.");
        }
    }

    println!("Serving the invitation at http://127.0.0.1:{port} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(e) = server {
        eprintln!("failed to start http server: {e}");
        return ExitCode::FAILURE;
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_lands_in_served_directory() {
        let cmd = wasm_pack();
        assert_eq!(cmd.get_program(), "wasm-pack");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["build", "--release", "--target", "web", "--out-dir", "static/pkg"]);
    }

    #[test]
    fn build_script_never_spawns_a_nested_build() {
        let script = include_str!("../build.rs");
        assert!(!script.contains("Command::new"));
    }
}
