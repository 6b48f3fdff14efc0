//! wordswap - fetch a page and rewrite a word in its visible text

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordswap::{envelope, rewrite, Fetcher, Rule};

#[derive(Parser)]
#[command(name = "wordswap")]
#[command(version, about = "Fetch a web page and rewrite a target word in its visible text", long_about = None)]
#[command(after_help = "EXAMPLES:
    wordswap https://www.yale.edu/                 Rewrite yale -> fale
    wordswap https://example.com/ -p cat -r dog    Custom rule
    wordswap https://example.com/ --json           Emit a JSON envelope")]
struct Cli {
    /// Page URL to fetch
    #[arg(value_name = "URL")]
    url: String,

    /// Word to replace in visible text
    #[arg(short, long, default_value = "yale")]
    pattern: String,

    /// Substitute word, case-folded to match each occurrence
    #[arg(short, long, default_value = "fale")]
    replacement: String,

    /// Emit {"success": true, "content": ...} instead of raw HTML
    #[arg(long)]
    json: bool,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if cli.json {
                println!("{}", envelope::error(&e.to_string()));
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> wordswap::Result<String> {
    let fetcher = Fetcher::new()?;
    let raw = fetcher.fetch(&cli.url).await?;

    let rule = Rule::new(&cli.pattern, &cli.replacement);
    let result = rewrite(&raw, &rule);

    if cli.json {
        Ok(envelope::success(&result).to_string())
    } else {
        Ok(result.html)
    }
}
