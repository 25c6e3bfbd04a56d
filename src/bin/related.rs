// Demo harness: prints the related records for one detail artifact.
// Run with: cargo run --bin related -- index.json detail.json [k]
use crossterm::style::Stylize;
use related_core::{corpus, RelatedConfig, RelatedEngine};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (index_path, detail_path) = match (args.first(), args.get(1)) {
        (Some(index), Some(detail)) => (PathBuf::from(index), PathBuf::from(detail)),
        _ => {
            eprintln!("usage: related <index.json> <detail.json> [k]");
            return ExitCode::from(2);
        }
    };
    let mut config = RelatedConfig::default();
    if let Some(k) = args.get(2) {
        match k.parse::<usize>() {
            Ok(k) if k > 0 => config = config.with_top_k(k),
            _ => {
                eprintln!("k must be a positive integer, got '{}'", k);
                return ExitCode::from(2);
            }
        }
    }

    let index = match corpus::load_index(&index_path) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("[ERROR] Could not load index '{}': {}", index_path.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let detail = match corpus::load_detail(&detail_path) {
        Ok(detail) => detail,
        Err(e) => {
            eprintln!("[ERROR] Could not load detail '{}': {}", detail_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let engine = RelatedEngine::new(config);
    println!("{} {}", detail.id().bold(), detail.display_topic());
    println!("{}", detail.display_category().dim());
    if detail.is_unclear() {
        println!("{}", "source text flagged unclear".yellow());
    }

    let related = engine.related(&detail, &index);
    if related.is_empty() {
        println!("\nNo related records.");
        return ExitCode::SUCCESS;
    }
    println!("\nRelated (tokenizer: {:?}):", engine.strategy());
    for (i, candidate) in related.iter().enumerate() {
        let record = candidate.record;
        println!(
            "  {}. {} {} {}",
            i + 1,
            record.id().bold(),
            format!("({} matching words)", candidate.score).dim(),
            record.display_topic()
        );
        println!("     {}", record.display_category().cyan());
    }
    ExitCode::SUCCESS
}
