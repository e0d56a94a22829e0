//! Crumbkeeper CLI
//!
//! CLI tool for inspecting, testing and benchmarking cleanup rules.

mod bench;

use clap::{Parser, Subcommand};
use serde::Serialize;

use ck_compiler::{
    build_rule_set, compile_rule, lint_rule, normalize_rules, rule_to_pattern_source,
    suggest_rules, LintIssue, RuleSpec,
};
use ck_core::types::CleanupType;

#[derive(Parser)]
#[command(name = "ck-cli")]
#[command(about = "Crumbkeeper rule compiler and tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pattern source of each rule
    Pattern {
        /// Rules to compile
        #[arg(required = true)]
        rules: Vec<String>,
    },

    /// Test candidates against a rule
    Test {
        /// Rule to compile
        rule: String,

        /// Candidate hostnames
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Report issues in rules
    Lint {
        /// Rules to lint
        #[arg(required = true)]
        rules: Vec<String>,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest rules for a host
    Suggest {
        /// Hostname or URL
        host: String,
    },

    /// Decide the cleanup type of hosts under a set of rules
    Decide {
        /// Rules as <rule>=<type>, e.g. "*.google.com=never"
        #[arg(short, long = "rule", required = true)]
        rules: Vec<RuleSpec>,

        /// Cleanup type for hosts no rule matches
        #[arg(short, long, default_value = "leave")]
        fallback: CleanupType,

        /// Hostnames, cookie domains or URLs
        #[arg(required = true)]
        hosts: Vec<String>,

        /// Emit JSON
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Measure compile and match latency
    Bench {
        /// Rules to benchmark
        #[arg(required = true)]
        rules: Vec<String>,

        /// Candidate hostnames
        #[arg(short, long = "candidate")]
        candidates: Vec<String>,

        /// Iterations per measurement
        #[arg(short, long, default_value_t = 10_000)]
        iterations: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pattern { rules } => cmd_pattern(&rules),
        Commands::Test { rule, candidates } => cmd_test(&rule, &candidates),
        Commands::Lint { rules, json } => cmd_lint(&rules, json),
        Commands::Suggest { host } => cmd_suggest(&host),
        Commands::Decide {
            rules,
            fallback,
            hosts,
            json,
            verbose,
        } => cmd_decide(rules, fallback, &hosts, json, verbose),
        Commands::Bench {
            rules,
            candidates,
            iterations,
        } => bench::run_bench(bench::BenchOptions {
            rules,
            candidates,
            iterations,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_pattern(rules: &[String]) -> Result<(), String> {
    for rule in rules {
        println!("{:<24} {}", rule, rule_to_pattern_source(rule));
    }
    Ok(())
}

fn cmd_test(rule: &str, candidates: &[String]) -> Result<(), String> {
    let matcher = compile_rule(rule);
    if !matcher.is_compiled() {
        return Err(format!("Rule '{}' could not be compiled", rule));
    }

    println!("Rule:    {}", rule);
    println!("Pattern: {}", matcher.pattern_source());
    for candidate in candidates {
        let verdict = if matcher.test(candidate) { "match" } else { "no match" };
        println!("  {:<8} {}", verdict, candidate);
    }
    Ok(())
}

#[derive(Serialize)]
struct LintReport<'a> {
    rule: &'a str,
    issues: Vec<LintIssue>,
}

fn cmd_lint(rules: &[String], json: bool) -> Result<(), String> {
    let reports: Vec<LintReport<'_>> = rules
        .iter()
        .map(|rule| LintReport {
            rule,
            issues: lint_rule(rule),
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    for report in &reports {
        if report.issues.is_empty() {
            println!("{}: ok", report.rule);
            continue;
        }
        println!("{}:", report.rule);
        for issue in &report.issues {
            println!("  - {}", issue);
        }
    }
    Ok(())
}

fn cmd_suggest(host: &str) -> Result<(), String> {
    let host = ck_core::host::extract_host(host).unwrap_or(host);
    let suggestions = suggest_rules(host);
    if suggestions.is_empty() {
        return Err("No host given".to_string());
    }
    for rule in suggestions {
        println!("{}", rule);
    }
    Ok(())
}

#[derive(Serialize)]
struct DecideReport<'a> {
    host: &'a str,
    cleanup_type: CleanupType,
    rule: Option<&'a str>,
    matched: usize,
}

fn cmd_decide(
    mut rules: Vec<RuleSpec>,
    fallback: CleanupType,
    hosts: &[String],
    json: bool,
    verbose: bool,
) -> Result<(), String> {
    let stats = normalize_rules(&mut rules);
    if verbose {
        println!(
            "Rules: {} -> {} (empty {}, dedupe removed {})",
            stats.before, stats.after, stats.empty, stats.deduped
        );
        for spec in &rules {
            for issue in lint_rule(&spec.rule) {
                println!("  warning: {}: {}", spec.rule, issue);
            }
        }
    }

    let set = build_rule_set(&rules, fallback);

    let reports: Vec<DecideReport<'_>> = hosts
        .iter()
        .map(|input| {
            let host = ck_core::host::extract_host(input).unwrap_or(input);
            let decision = set.decide(host);
            DecideReport {
                host,
                cleanup_type: decision.cleanup_type,
                rule: decision
                    .rule_index
                    .map(|idx| set.entries()[idx].matcher.rule()),
                matched: decision.matched,
            }
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    for report in &reports {
        match report.rule {
            Some(rule) => println!(
                "{:<32} {:<10} (rule '{}', {} matching)",
                report.host, report.cleanup_type, rule, report.matched
            ),
            None => println!("{:<32} {:<10} (fallback)", report.host, report.cleanup_type),
        }
    }
    Ok(())
}
