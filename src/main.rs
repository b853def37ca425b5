//! crossplane-gen CLI binary

use anyhow::Result;

use crossplane_gen::cli::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Initialize logging
    CliApp::init_logging(&matches);

    // Run the CLI application
    CliApp::run(&matches).await
}
