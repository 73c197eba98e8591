//! CLI Tooling
//!
//! Command-line access to the document tree builder and the attendance rules.
//! Every command is a pure read: it renders a result and changes nothing.

use crate::attendance::{
    normalize_to_valid_attendance_date, selectable_days_in_month, AttendanceDate,
    QUERY_DATE_FORMAT,
};
use crate::clock::{Clock, SystemClock};
use crate::config::{CodacConfig, ConfigLoader};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tooling::format::{format_attendance_text, format_calendar_text, format_tree_text};
use crate::tree::{build_tree_with_report, count_nodes, filter_by_type, DocumentRecord};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// codac - document tree and attendance tooling
#[derive(Parser)]
#[command(name = "codac")]
#[command(about = "Document hierarchy and attendance date tooling for codac")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where codac.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply the level/format/output flags on top of the configured logging section.
    ///
    /// `--log-file` is not merged here; it is passed to `init_logging` on its own
    /// so it can be ranked against CODAC_LOG_FILE and the configured file.
    pub fn logging_overrides(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the sidebar tree from a JSON array of document records
    Tree {
        /// Path to the records file ("-" for stdin)
        file: PathBuf,
        /// Keep only records with this document type
        #[arg(long = "type")]
        type_filter: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Attendance date rules
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommands,
    },
}

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Evaluate a date against the attendance rules
    Check {
        /// Date to check (YYYY-MM-DD)
        date: String,
        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Normalize a query date to the nearest recordable weekday
    Normalize {
        /// Raw query value; anything unparsable means today
        date: Option<String>,
        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// List the selectable days of a month
    Calendar {
        year: i32,
        month: u32,
        /// Override today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// CLI execution context
pub struct CliContext {
    config: CodacConfig,
    clock: Box<dyn Clock>,
}

impl CliContext {
    /// Create a context from the workspace (or an explicit config file).
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: CodacConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used when `--today` is not given.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &CodacConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Tree {
                file,
                type_filter,
                format,
            } => self.handle_tree(file, type_filter.as_deref(), format),
            Commands::Attendance { command } => self.handle_attendance(command),
        }
    }

    fn handle_tree(
        &self,
        file: &Path,
        type_filter: Option<&str>,
        format: &str,
    ) -> Result<String, ApiError> {
        let format = parse_format(format)?;
        let records = read_records(file)?;
        let records = match type_filter {
            Some(tag) => filter_by_type(&records, tag),
            None => records,
        };
        let build = build_tree_with_report(&records);
        info!(
            records = records.len(),
            nodes = count_nodes(&build.roots),
            orphans = build.orphans.len(),
            "Built document tree"
        );
        if !build.orphans.is_empty() {
            warn!(count = build.orphans.len(), "Documents promoted to root");
        }

        match format {
            OutputFormat::Text => Ok(format_tree_text(&build)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&build.roots)?),
        }
    }

    fn handle_attendance(&self, command: &AttendanceCommands) -> Result<String, ApiError> {
        match command {
            AttendanceCommands::Check {
                date,
                today,
                format,
            } => {
                let format = parse_format(format)?;
                let date = parse_strict_date(date)?;
                let today = self.resolve_today(today.as_deref())?;
                let rules = self.config.attendance.rules();
                let evaluated = AttendanceDate::evaluate_with(&rules, date, today);
                match format {
                    OutputFormat::Text => Ok(format_attendance_text(&evaluated, today)),
                    OutputFormat::Json => {
                        let mut value = serde_json::to_value(evaluated)?;
                        value["today"] = json!(today);
                        value["isSelectable"] = json!(evaluated.is_selectable());
                        value["isEditable"] = json!(evaluated.is_editable());
                        Ok(serde_json::to_string_pretty(&value)?)
                    }
                }
            }
            AttendanceCommands::Normalize { date, today } => {
                let today = self.resolve_today(today.as_deref())?;
                let normalized = normalize_to_valid_attendance_date(date.as_deref(), today);
                Ok(normalized.format(QUERY_DATE_FORMAT).to_string())
            }
            AttendanceCommands::Calendar {
                year,
                month,
                today,
                format,
            } => {
                let format = parse_format(format)?;
                let today = self.resolve_today(today.as_deref())?;
                let days = selectable_days_in_month(*year, *month, today);
                match format {
                    OutputFormat::Text => Ok(format_calendar_text(*year, *month, &days)),
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&days)?),
                }
            }
        }
    }

    fn resolve_today(&self, today: Option<&str>) -> Result<NaiveDate, ApiError> {
        match today {
            Some(raw) => parse_strict_date(raw),
            None => Ok(self.clock.today()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::InvalidInput(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// Command-line dates are not query parameters: reject what does not parse.
fn parse_strict_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), QUERY_DATE_FORMAT).map_err(|e| {
        ApiError::InvalidInput(format!("Invalid date '{}' (expected YYYY-MM-DD): {}", raw, e))
    })
}

fn read_records(file: &Path) -> Result<Vec<DocumentRecord>, ApiError> {
    let content = if file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(file)?
    };
    Ok(serde_json::from_str(&content)?)
}
