//! CLI interface for the relevance scorer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-relevance")]
#[command(about = "Score a resume against a job description")]
#[command(
    long_about = "Compute keyword and semantic relevance between a resume and a job description, with a verdict and improvement suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume text file
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description text file
        #[arg(short, long)]
        job: PathBuf,

        /// Weight of the keyword match score
        #[arg(long)]
        hard_weight: Option<f32>,

        /// Weight of the semantic similarity score
        #[arg(long)]
        semantic_weight: Option<f32>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show the active configuration
    Config,
}
