use std::io::Read;

use anyhow::Result;
use clap::Parser;
use steady_mind::analysis::AnalysisResponse;
use steady_mind::classify::classify;
use steady_mind::recommend::recommend;

/// Offline mood check using the keyword classifier
#[derive(Parser, Debug)]
#[command(author, version, about = "Classify journal text without calling an LLM", long_about = None)]
struct Args {
    /// Journal text; reads stdin when omitted
    text: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = match args.text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("no text provided");
    }

    let assessment = classify(text);
    let recommendations = recommend(&assessment, text);
    let response = AnalysisResponse::new(assessment, recommendations);

    let out = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", out);

    Ok(())
}
