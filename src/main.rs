//! Thin command-line caller for the relevance scoring engine

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use log::error;
use resume_relevance::{Config, RelevanceAnalyzer, Result, Verdict};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            hard_weight,
            semantic_weight,
            output,
        } => {
            let resume_text = std::fs::read_to_string(&resume)?;
            let jd_text = std::fs::read_to_string(&job)?;

            let hard_weight = hard_weight.unwrap_or(config.scoring.hard_weight);
            let semantic_weight = semantic_weight.unwrap_or(config.scoring.semantic_weight);

            let analyzer = RelevanceAnalyzer::new(config)?;
            let result =
                analyzer.analyze_weighted(&resume_text, &jd_text, hard_weight, semantic_weight)?;

            match output.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&result)?),
                _ => {
                    let verdict = match result.verdict {
                        Verdict::High => "High".green(),
                        Verdict::Medium => "Medium".yellow(),
                        Verdict::Low => "Low".red(),
                    };

                    println!("Final score:    {:.3}", result.final_score);
                    println!("Hard match:     {:.3}", result.hard_match_score);
                    println!("Semantic match: {:.3}", result.semantic_score);
                    println!("Verdict:        {}", verdict);

                    if !result.matched_skills.is_empty() {
                        println!("\nMatched skills: {}", result.matched_skills.join(", "));
                    }
                    if !result.missing_skills.is_empty() {
                        println!("Missing skills: {}", result.missing_skills.join(", "));
                    }

                    println!("\n{}", result.suggestions);
                }
            }

            Ok(())
        }
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config).map_err(|e| {
                resume_relevance::RelevanceError::Configuration(e.to_string())
            })?);
            Ok(())
        }
    }
}
