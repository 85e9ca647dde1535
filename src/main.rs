use clap::Parser;
use class_chain_suggest::{Catalog, ClassListProcessor, ProcessorOptions, LIMIT_SUGGESTIONS};
use tracing::Level;

/// Suggest completions for a partially typed utility-class chain.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON catalog of variants and classes
    catalog: String,
    /// Class chain typed so far, e.g. `hover:bg-r`
    #[arg(default_value = "")]
    query: String,
    /// Maximum number of suggestions
    #[arg(long, default_value_t = LIMIT_SUGGESTIONS)]
    limit: usize,
    /// Override the catalog's variant separator
    #[arg(long)]
    separator: Option<String>,
    /// Don't validate unknown variant names against the catalog
    #[arg(long)]
    no_probe: bool,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // Load the catalog.
    let mut catalog = match Catalog::from_path(&args.catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid catalog: {e}");
            std::process::exit(1);
        }
    };
    if let Some(sep) = args.separator {
        catalog.separator = sep;
    }
    let ctx = match catalog.into_context(!args.no_probe) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Invalid catalog: {e}");
            std::process::exit(1);
        }
    };

    let processor = ClassListProcessor::new().with_options(ProcessorOptions { limit: args.limit });
    let out = processor.process(&ctx, &args.query);

    match serde_json::to_string_pretty(&out) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize suggestions: {e}");
            std::process::exit(1);
        }
    }
}
