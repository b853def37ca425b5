//! Crd command implementation

use crate::cli::utils;
use crate::utils::format_duration;
use crate::{Config, CrossplaneGen, GenerateCrdOptions};
use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub fn command() -> Command {
    Command::new("crd")
        .about("Generate Crossplane XRDs from Go API types")
        .arg(
            clap::Arg::new("source-path")
                .long("source-path")
                .help("The source path from where generate CRD")
                .value_name("PATH")
                .required(true),
        )
        .arg(
            clap::Arg::new("target-path")
                .long("target-path")
                .help("The target path to where generate CRD")
                .value_name("DIR")
                .required(true),
        )
        .arg(
            clap::Arg::new("crd-options")
                .long("crd-options")
                .help("CRD option to pass on controller-gen")
                .value_name("OPTION")
                .value_delimiter(',')
                .action(clap::ArgAction::Append),
        )
        .arg(
            clap::Arg::new("schemapatch-options")
                .long("schemapatch-options")
                .help("Schema patch option to pass on controller-gen")
                .value_name("OPTION")
                .value_delimiter(',')
                .action(clap::ArgAction::Append),
        )
        .arg(
            clap::Arg::new("claim-name")
                .long("claim-name")
                .help("The claim name")
                .value_name("KIND"),
        )
        .arg(
            clap::Arg::new("claim-plural-name")
                .long("claim-plural-name")
                .help("The claim name plural")
                .value_name("PLURAL"),
        )
        .arg(
            clap::Arg::new("controller-gen")
                .long("controller-gen")
                .help("controller-gen binary to run")
                .value_name("BIN"),
        )
}

/// Merge command line flags over the configured defaults
pub fn crd_options(matches: &ArgMatches, config: &Config) -> GenerateCrdOptions {
    let mut options = config.crd.clone();

    if let Some(values) = matches.get_many::<String>("crd-options") {
        options.crd_options = values.cloned().collect();
    }

    if let Some(values) = matches.get_many::<String>("schemapatch-options") {
        options.schema_patch_options = values.cloned().collect();
    }

    if let Some(claim_name) = matches.get_one::<String>("claim-name") {
        options.claim_name = Some(claim_name.clone());
    }

    if let Some(claim_name_plural) = matches.get_one::<String>("claim-plural-name") {
        options.claim_name_plural = Some(claim_name_plural.clone());
    }

    options
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = utils::load_config(matches)?;

    if let Some(binary) = matches.get_one::<String>("controller-gen") {
        config.controller_gen.binary = PathBuf::from(binary);
    }
    config.validate()?;

    let source_path = matches
        .get_one::<String>("source-path")
        .ok_or_else(|| anyhow::anyhow!("--source-path is required"))?;
    let target_path = matches
        .get_one::<String>("target-path")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("--target-path is required"))?;
    let options = crd_options(matches, &config);

    info!("Starting XRD generation");

    let app = CrossplaneGen::from_config(&config);
    let summary = app
        .generate_crd(source_path, &target_path, &options)
        .await?;

    println!("Generation completed successfully!");
    println!("Files generated: {}", summary.files.len());
    println!(
        "Processing time: {}",
        format_duration(Duration::from_millis(summary.processing_time_ms))
    );

    for file in &summary.files {
        println!("  {}", file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        let app = crate::cli::CliApp::app();
        let matches = app
            .try_get_matches_from(["crossplane-gen"].iter().chain(args))
            .unwrap();
        matches.subcommand_matches("crd").unwrap().clone()
    }

    #[test]
    fn test_required_paths() {
        let result = crate::cli::CliApp::app().try_get_matches_from([
            "crossplane-gen",
            "crd",
            "--source-path",
            "./apis/...",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.crd.crd_options = vec!["maxDescLen=0".to_string()];
        config.crd.claim_name = Some("Configured".to_string());

        let matches = matches(&[
            "crd",
            "--source-path",
            "./apis/...",
            "--target-path",
            "./package",
            "--crd-options",
            "generateEmbeddedObjectMeta=true",
            "--crd-options",
            "allowDangerousTypes=true,maxDescLen=10",
            "--claim-name",
            "Test",
            "--claim-plural-name",
            "tests",
        ]);

        let options = crd_options(&matches, &config);

        assert_eq!(
            options.crd_options,
            vec![
                "generateEmbeddedObjectMeta=true",
                "allowDangerousTypes=true",
                "maxDescLen=10",
            ]
        );
        assert!(options.schema_patch_options.is_empty());
        assert_eq!(options.claim_name.as_deref(), Some("Test"));
        assert_eq!(options.claim_name_plural.as_deref(), Some("tests"));
    }

    #[test]
    fn test_config_used_without_flags() {
        let mut config = Config::default();
        config.crd.schema_patch_options = vec!["manifests=./crds".to_string()];
        config.crd.claim_name = Some("Configured".to_string());

        let matches = matches(&[
            "--debug",
            "crd",
            "--source-path",
            "./apis/...",
            "--target-path",
            "./package",
        ]);

        let options = crd_options(&matches, &config);

        assert_eq!(options, config.crd);
        assert!(matches.get_flag("debug"));
    }
}
