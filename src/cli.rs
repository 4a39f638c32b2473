// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The surface is deliberately tiny:
//   catcrawl --url <URL> [--nquads]
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "catcrawl",
    version = "0.1.0",
    about = "Crawl a hypermedia catalogue graph and dump the facts as DOT or N-Quads",
    long_about = "catcrawl fetches a catalogue document, extracts subject/predicate/object \
                  facts from its metadata and items, follows links to nested catalogues, \
                  and prints the deduplicated fact graph to stdout."
)]
pub struct Cli {
    /// Root catalogue URL to start crawling from
    ///
    /// Kept optional at the clap level so that leaving it out prints our
    /// usage message and exits with code 1 instead of clap's own code 2
    #[arg(long)]
    pub url: Option<String>,

    /// Output flat N-Quads instead of a DOT graph
    ///
    /// This is an optional flag: --nquads
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub nquads: bool,
}

// The usage line shown when --url is missing
pub fn print_usage() {
    eprintln!(" --url <Catalogue to crawl> [--nquads]");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_and_nquads() {
        let cli = Cli::try_parse_from(["catcrawl", "--url", "http://h/root", "--nquads"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://h/root"));
        assert!(cli.nquads);
    }

    #[test]
    fn test_dot_is_the_default() {
        let cli = Cli::try_parse_from(["catcrawl", "--url", "http://h/root"]).unwrap();
        assert!(!cli.nquads);
    }

    #[test]
    fn test_url_may_be_absent_at_parse_time() {
        // main turns this into a usage error with exit code 1
        let cli = Cli::try_parse_from(["catcrawl"]).unwrap();
        assert!(cli.url.is_none());
    }
}
