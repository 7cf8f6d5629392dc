use std::{fs, path::PathBuf};

use chrono::{Local, Timelike};

use crate::{
  generator::{
    config::GeneratorConfig,
    ddl::GeneratedSchema,
    metrics::GenerationStats,
    model::ModelSpec,
    schema_converter::SchemaConverter,
  },
  ui::GenerateCommand,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub naming_convention: String,
  pub database_name: Option<String>,
  pub json_data_type_enabled: bool,
  pub named_parameters_enabled: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      naming_convention,
      database_name,
      no_json_data_type,
      named_parameters,
      verbose,
      quiet,
    } = command;

    Self {
      input,
      output,
      naming_convention,
      database_name,
      json_data_type_enabled: !no_json_data_type,
      named_parameters_enabled: named_parameters,
      verbose,
      quiet,
    }
  }

  fn load_models(&self) -> anyhow::Result<Vec<ModelSpec>> {
    let raw = fs::read_to_string(&self.input)?;
    let models = serde_json::from_str(&raw)?;
    Ok(models)
  }

  fn generator_config(&self, stats: &mut GenerationStats) -> anyhow::Result<GeneratorConfig> {
    let mut config = GeneratorConfig::default();
    config.set_identifier_naming_convention(&self.naming_convention, stats);
    config.set_json_data_type_enabled(self.json_data_type_enabled);
    config.set_named_parameters_enabled(self.named_parameters_enabled);
    if let Some(name) = &self.database_name {
      config.set_default_database_name(name, stats)?;
    }
    Ok(config)
  }

  fn write_output(&self, schema: &GeneratedSchema) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(schema)?;
    match &self.output {
      Some(path) => {
        if let Some(parent) = path.parent() {
          fs::create_dir_all(parent)?;
        }
        fs::write(path, rendered)?;
      }
      None => println!("{rendered}"),
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig) -> Self {
    Self { config }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp());
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!("            {label:<25} {value}");
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Tables generated:", stats.tables_generated.to_string());
    self.stat("Columns generated:", stats.columns_generated.to_string());
    if stats.models_skipped + stats.properties_skipped > 0 {
      self.stat(
        "Skipped (preexisting):",
        format!("{} models, {} properties", stats.models_skipped, stats.properties_skipped),
      );
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      let should_print = warning.is_skipped_item() || self.config.verbose;
      if !should_print {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }
      println!("  warning: {warning}");
    }
  }
}

pub fn generate_schema(config: GenerateConfig) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config);
  logger.info(&format!("Loading model definitions from: {}", config.input.display()));

  let models = config.load_models()?;
  let mut stats = GenerationStats::default();
  let generator_config = config.generator_config(&mut stats)?;
  let converter = SchemaConverter::new(generator_config);

  logger.info("Generating PostgreSQL schema definitions...");
  let schema = converter.convert_models(&models, &mut stats);
  config.write_output(&schema)?;

  if let Some(output) = &config.output {
    logger.info(&format!("Schema definition written to: {}", output.display()));
  }
  logger.print_statistics(&stats);

  Ok(())
}
