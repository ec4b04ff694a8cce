use anyhow::Context;
use tracing_subscriber::EnvFilter;

use huffman_codes::cli::{usage, CliArgs, Command};
use huffman_codes::config::CoderConfig;
use huffman_codes::report;
use huffman_codes::HuffmanSession;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match CliArgs::from_args(&args) {
        Ok(Command::Encode(cli)) => cli,
        Ok(Command::Help) => {
            print!("{}", usage());
            return Ok(());
        }
        Err(e) => {
            eprint!("{}", usage());
            return Err(e.into());
        }
    };

    let config = match &cli.config_path {
        Some(path) => CoderConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CoderConfig::default(),
    };

    let text = cli.source.read().context("failed to read input")?;
    let session = HuffmanSession::new(text, &config).context("failed to build huffman codes")?;

    if cli.json {
        println!("{}", report::render_json(&session)?);
    } else {
        print!("{}", report::render_text(&session));
    }
    Ok(())
}
