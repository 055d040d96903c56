//! ca-manifest - embed a CA certificate into a manifest template
//!
//! With no arguments, reads `owner/ca-cert.pem` and `manifest-template.json` and writes
//! `manifest.json` in the current directory.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ca_manifest::{ComposerConfig, EscapeMode, ManifestComposer};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Embed a certificate-authority file into a JSON manifest template
#[derive(Parser, Debug)]
#[command(name = "ca-manifest")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Certificate-authority PEM file
    #[arg(long, value_name = "FILE")]
    ca: Option<PathBuf>,

    /// Manifest template (JSON object)
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Output manifest path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Top-level key that receives the certificate text
    #[arg(long)]
    key: Option<String>,

    /// Spaces per nesting level
    #[arg(long)]
    indent: Option<usize>,

    /// Escape every character outside printable ASCII
    #[arg(long)]
    ensure_ascii: bool,

    /// Print the manifest to standard output instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn resolve_config(&self) -> Result<ComposerConfig> {
        let mut config = match &self.config {
            Some(path) => ComposerConfig::from_file(path, ComposerConfig::default())
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => ComposerConfig::default(),
        };

        if let Some(ca) = &self.ca {
            config.ca_path.clone_from(ca);
        }
        if let Some(template) = &self.template {
            config.template_path.clone_from(template);
        }
        if let Some(output) = &self.output {
            config.output_path.clone_from(output);
        }
        if let Some(key) = &self.key {
            config.key.clone_from(key);
        }
        if let Some(indent) = self.indent {
            config.indent = indent;
        }
        if self.ensure_ascii {
            config.escape = EscapeMode::Ascii;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let composer = ManifestComposer::from_config(cli.resolve_config()?);

    if cli.stdout {
        let rendered = composer.render().context("failed to compose manifest")?;
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&rendered.bytes)
            .and_then(|()| stdout.write_all(b"\n"))
            .context("failed to write manifest to stdout")?;
        return Ok(());
    }

    let outcome = composer.compose().context("failed to compose manifest")?;
    tracing::info!(
        path = %outcome.output_path.display(),
        keys = outcome.key_count,
        replaced_existing = outcome.replaced_existing,
        "manifest composed"
    );
    Ok(())
}
