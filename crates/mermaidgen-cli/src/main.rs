//! Mermaidgen CLI - Generate Mermaid.js diagram markup

mod cli;
mod description;
mod samples;

use clap::Parser;

fn main() {
    // Logging is initialized inside run() once the flags are known
    let cli_args = cli::Cli::parse();
    let app = cli::MermaidgenApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
