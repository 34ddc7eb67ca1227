// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading configuration from YAML and environment variables.
//!
//! This example demonstrates:
//! - Composing the YAML and environment providers with the loader builder
//! - Typed inference of the rendered configuration lines
//! - Materializing an embedded file directive next to the configuration
//!
//! To run this example:
//! ```bash
//! export DEMO_SERVER_PORT="9090"
//! cargo run --example load_config
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use remoteconf::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== remoteconf: Load Configuration ===\n");

    let workdir = std::env::temp_dir().join(format!("remoteconf-demo-{}", std::process::id()));
    std::fs::create_dir_all(&workdir).map_err(|e| ConfigError::storage(&workdir, e))?;

    let cert_path = workdir.join("ca.pem");
    let document = format!(
        "server:\n  host: localhost\n  port: 8080\n  debug: false\n  ratio: 0.75\n\
         tls:\n  ca: \"<FILE>{};{}\"\n",
        cert_path.display(),
        STANDARD.encode("-----BEGIN CERTIFICATE-----\n")
    );

    let yaml_path = workdir.join("remote.yaml");
    std::fs::write(&yaml_path, document).map_err(|e| ConfigError::storage(&yaml_path, e))?;

    let loader = RemoteConfigLoader::builder()
        .with_yaml_file(&yaml_path)
        .with_env_prefix("DEMO_")
        .build();

    println!("Providers: {:?}\n", loader.provider_names());

    let settings = ProviderSettings::new().with_value("env.lowercase_keys", "true");
    let report = loader.load(&settings)?;

    println!("--- Rendered configuration ({} entries) ---", report.entry_count);
    print!("{}", report.config);

    println!("\n--- Written files ---");
    for path in &report.written_files {
        println!("✓ {}", path.display());
    }

    std::fs::remove_dir_all(&workdir).map_err(|e| ConfigError::storage(&workdir, e))?;
    Ok(())
}
