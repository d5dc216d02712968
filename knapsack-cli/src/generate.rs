//! `generate` command: write a seeded instance file.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use knapsack_data::GeneratorConfig;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CAPACITY, ARG_ID_PREFIX, ARG_ITEMS, ARG_OUTPUT, ARG_PROJECT, ARG_SEED, CliError,
    ENV_OUTPUT,
};

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Generate a reproducible lab-inventory knapsack instance \
                 and write it as pretty-printed JSON. Unset options fall \
                 back to the Lab Inventory A defaults.",
    about = "Generate a knapsack instance"
)]
#[ortho_config(prefix = "KNAPSACK")]
pub(crate) struct GenerateArgs {
    /// Destination JSON file; parent directories are created.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Number of items (default 15).
    #[arg(long = ARG_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) items: Option<usize>,
    /// Knapsack capacity (default 50).
    #[arg(long = ARG_CAPACITY, value_name = "weight")]
    #[serde(default)]
    pub(crate) capacity: Option<u64>,
    /// Random seed (default 3642).
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Project label (default knapsack_01_labA).
    #[arg(long = ARG_PROJECT, value_name = "label")]
    #[serde(default)]
    pub(crate) project: Option<String>,
    /// Item id prefix (default LAB-A).
    #[arg(long = ARG_ID_PREFIX, value_name = "prefix")]
    #[serde(default)]
    pub(crate) id_prefix: Option<String>,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GenerateConfig::try_from(merged)
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateConfig {
    pub(crate) output: Utf8PathBuf,
    pub(crate) generator: GeneratorConfig,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_OUTPUT,
        })?;
        let defaults = GeneratorConfig::default();
        let generator = GeneratorConfig {
            items: args.items.unwrap_or(defaults.items),
            capacity: args.capacity.unwrap_or(defaults.capacity),
            seed: args.seed.unwrap_or(defaults.seed),
            project: args.project.unwrap_or(defaults.project),
            id_prefix: args.id_prefix.unwrap_or(defaults.id_prefix),
            ..defaults
        };
        Ok(Self { output, generator })
    }
}

pub(crate) fn run_generate(args: GenerateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_generate(&config, writer)
}

pub(crate) fn execute_generate(
    config: &GenerateConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let instance = knapsack_data::generate(&config.generator)?;
    knapsack_data::save_instance(&config.output, &instance)
        .map_err(|source| CliError::SaveInstance { source })?;
    writeln!(writer, "Wrote {}", config.output)
        .and_then(|()| {
            writeln!(
                writer,
                "Items={} Capacity={} Project={}",
                instance.len(),
                instance.capacity(),
                instance.project()
            )
        })
        .map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<GenerateConfig, CliError> {
    let merged = GenerateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    GenerateConfig::try_from(merged)
}
