//! CLI module for trackline
//!
//! Provides the command-line interface using clap.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::domain::{DomainKind, PipelineDefinition, PipelineRegistry, ResolveOptions};
use crate::errors::Result;
use crate::fs::resolve_cwd;
use crate::schemas::{Config, EventOrder};

/// Trackline - Resolve shopping, pickup and shipment status histories into tracking steps
#[derive(Parser, Debug)]
#[command(name = "trackline")]
#[command(version)]
#[command(about = "Resolve shopping, pickup and shipment status histories into tracking steps")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Read configuration from this file instead of .trackline/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the tracking steps of a backend record
    Resolve {
        /// Domain of the record (shopping, pickup, shipment)
        domain: String,

        /// Path to the record JSON
        file: PathBuf,

        /// Use a named pipeline instead of the domain's own
        #[arg(long)]
        pipeline: Option<String>,

        /// Pick the current step by latest timestamp instead of list position
        #[arg(long)]
        chronological: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a record to a new status and show the resulting steps
    Update {
        /// Domain of the record (shopping, pickup, shipment)
        domain: String,

        /// Path to the record JSON; rewritten in place
        file: PathBuf,

        /// New raw status (e.g. CONFIRMED)
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the steps, synonyms and fallback rules of a pipeline
    Steps {
        /// Domain or pipeline name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the customer message for a status
    Message {
        /// Raw status (e.g. INVOICED)
        status: String,

        /// Domain of the status
        #[arg(long, default_value = "shopping")]
        domain: String,
    },
}

/// Everything a command needs, built once per invocation
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub registry: PipelineRegistry,
    pub options: ResolveOptions,
}

impl Context {
    /// Load config for the working directory and build the pipeline registry
    pub fn load(cwd: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let cwd = resolve_cwd(cwd);
        let config = load_config(&cwd, config_path)?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let registry = PipelineRegistry::from_config(&config)?;
        let options = ResolveOptions::from_config(&config)?;
        Ok(Context {
            config,
            registry,
            options,
        })
    }

    /// Options with the ordering forced to chronological when asked
    pub fn options(&self, chronological: bool) -> ResolveOptions {
        if chronological {
            self.options.with_order(EventOrder::Chronological)
        } else {
            self.options
        }
    }

    /// The pipeline named explicitly, or else the domain's own
    pub fn pipeline(&self, kind: DomainKind, name: Option<&str>) -> Result<&PipelineDefinition> {
        match name {
            Some(name) => self.registry.get(name),
            None => self.registry.for_domain(kind),
        }
    }

    /// Look up a pipeline by domain alias or by registry name
    pub fn pipeline_by_name(&self, name: &str) -> Result<&PipelineDefinition> {
        match name.parse::<DomainKind>() {
            Ok(kind) => self.registry.for_domain(kind),
            Err(_) => self.registry.get(name),
        }
    }
}
