use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pgschema-gen")]
#[command(author, version, about = "OpenAPI model to PostgreSQL schema generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate PostgreSQL schema definitions from a model description file
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the JSON file with model definitions
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the generated schema definition will be written (stdout when
  /// omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Naming convention for table and column names (original or snake_case).
  /// This does not apply to the database name
  #[arg(long, value_name = "CONVENTION", default_value = "original")]
  pub naming_convention: String,

  /// Default database name for the generated schema
  #[arg(long, value_name = "NAME")]
  pub database_name: Option<String>,

  /// Map complex model properties to TEXT instead of the JSON data type
  /// (JSON requires PostgreSQL 11)
  #[arg(long, default_value_t = false)]
  pub no_json_data_type: bool,

  /// Mark prepared statements for named parameters, eg. :petName, instead of
  /// question mark placeholders
  #[arg(long, default_value_t = false)]
  pub named_parameters: bool,

  /// Enable verbose output with every recorded warning
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
