//! avroctl CLI
//!
//! A command-line toolkit for Apache Avro schemas: validation, diffing,
//! linting, model generation, and sample record encoding.

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use avroctl::codec::SerializationType;
use avroctl::commands::{
    execute_deserialize, execute_diff, execute_generate_data, execute_generate_model,
    execute_lint, execute_serialize, execute_validate,
};
use avroctl::model::BaseClass;
use avroctl::resource::Resource;

/// avroctl - command-line toolkit for Avro schemas
#[derive(Parser, Debug)]
#[command(name = "avroctl")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Schema resource options: exactly one of --path or --url
///
/// The group contract makes "exactly one" a parse-time guarantee, so a
/// conflicting or missing option is a usage error (exit 2) before any I/O.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ResourceArgs {
    /// Path to the local schema
    #[arg(long)]
    path: Option<PathBuf>,

    /// Schema url
    #[arg(long)]
    url: Option<String>,
}

impl ResourceArgs {
    fn into_resource(self) -> Resource {
        match (self.path, self.url) {
            (Some(path), None) => Resource::Path(path),
            (None, Some(url)) => Resource::Url(url),
            _ => unreachable!("clap group enforces exactly one of --path/--url"),
        }
    }
}

/// Arguments for schema-diff: each side takes exactly one of path/url
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).multiple(false)))]
#[command(group(ArgGroup::new("target").required(true).multiple(false)))]
struct DiffArgs {
    /// Source path to the local schema
    #[arg(long, group = "source")]
    source_path: Option<PathBuf>,

    /// Source schema url
    #[arg(long, group = "source")]
    source_url: Option<String>,

    /// Target path to the local schema
    #[arg(long, group = "target")]
    target_path: Option<PathBuf>,

    /// Target schema url
    #[arg(long, group = "target")]
    target_url: Option<String>,
}

impl DiffArgs {
    fn into_resources(self) -> (Resource, Resource) {
        let source = match (self.source_path, self.source_url) {
            (Some(path), None) => Resource::Path(path),
            (None, Some(url)) => Resource::Url(url),
            _ => unreachable!("clap group enforces exactly one of --source-path/--source-url"),
        };
        let target = match (self.target_path, self.target_url) {
            (Some(path), None) => Resource::Path(path),
            (None, Some(url)) => Resource::Url(url),
            _ => unreachable!("clap group enforces exactly one of --target-path/--target-url"),
        };
        (source, target)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a schema resource and print its content
    ValidateSchema {
        #[command(flatten)]
        resource: ResourceArgs,
    },

    /// Show the structural difference between two schemas
    SchemaDiff(DiffArgs),

    /// Generate Rust model source for a schema
    GenerateModel {
        #[command(flatten)]
        resource: ResourceArgs,

        /// Model base class (derive style)
        #[arg(long, value_enum, default_value = "avro-model")]
        base_class: BaseClass,
    },

    /// Serialize a JSON datum against a schema
    Serialize {
        /// Record data as a JSON literal
        data: String,

        #[command(flatten)]
        resource: ResourceArgs,

        /// Wire encoding for the result
        #[arg(long, value_enum, default_value = "avro")]
        serialization_type: SerializationType,
    },

    /// Deserialize an encoded event against a schema
    Deserialize {
        /// Encoded event: hex text for avro, JSON text for avro-json
        event: String,

        #[command(flatten)]
        resource: ResourceArgs,

        /// Wire encoding of the event
        #[arg(long, value_enum, default_value = "avro")]
        serialization_type: SerializationType,
    },

    /// Validate a batch of local schema files
    Lint {
        /// Schema files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Generate fake data for a given avsc schema
    GenerateData {
        /// Path or URL to the avro schema
        resource: String,

        /// Number of values to generate, more than one prints a list
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::ValidateSchema { resource } => {
            execute_validate(&resource.into_resource())?;
        }

        Commands::SchemaDiff(args) => {
            let (source, target) = args.into_resources();
            execute_diff(&source, &target)?;
        }

        Commands::GenerateModel {
            resource,
            base_class,
        } => {
            execute_generate_model(&resource.into_resource(), base_class)?;
        }

        Commands::Serialize {
            data,
            resource,
            serialization_type,
        } => {
            execute_serialize(&data, &resource.into_resource(), serialization_type)?;
        }

        Commands::Deserialize {
            event,
            resource,
            serialization_type,
        } => {
            execute_deserialize(&event, &resource.into_resource(), serialization_type)?;
        }

        Commands::Lint { files } => {
            execute_lint(&files)?;
        }

        Commands::GenerateData { resource, count } => {
            execute_generate_data(&Resource::classify(&resource), count as usize)?;
        }
    }

    Ok(())
}
