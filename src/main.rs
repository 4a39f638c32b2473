// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Seed a crawl session with the root catalogue URL
// 3. Run the crawl until the frontier is empty
// 4. Dump the fact store to stdout as DOT (default) or N-Quads (--nquads)
// 5. Exit with proper code (0 = success, 1 = usage error, 2 = error)
//
// The crawl is strictly sequential: one fetch in flight at a time, and a
// document is fully expanded before the next URL is taken. Progress and
// failures go to stderr so stdout stays a clean, machine-readable dump.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod catalogue;     // src/catalogue/ - document shape, fetching, expansion
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - crawl state and driver
mod output;        // src/output/ - DOT and N-Quads serializers

use clap::Parser;

use catalogue::HttpFetcher;
use cli::Cli;
use crawl::CrawlSession;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished and output was printed
//   Ok(1) = usage error (no --url)
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // The root URL is required; without it there is nothing to crawl
    let Some(root_url) = cli.url else {
        cli::print_usage();
        return Ok(1);
    };

    // Fresh session, seeded with the root catalogue
    let mut session = CrawlSession::seeded(root_url);
    let fetcher = HttpFetcher::new()?;

    // Runs until the frontier empties; per-URL and per-pass failures are
    // logged inside and never abort the crawl
    crawl::crawl(&mut session, &fetcher).await;

    // Single full dump once the crawl is done - nothing is streamed
    let dump = if cli.nquads {
        output::render_nquads(&session.facts)
    } else {
        output::render_dot(&session.facts)
    };
    print!("{}", dump);

    Ok(0)
}
