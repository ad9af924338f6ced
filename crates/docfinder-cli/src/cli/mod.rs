use clap::{Parser, Subcommand};

mod args;
mod parsers;

#[cfg(test)]
mod tests;

pub use args::{OpenArgs, SearchArgs, SuggestArgs};

#[derive(Debug, Parser)]
#[command(name = "docfinder")]
#[command(about = "Filter, sort and deep-link a doctor directory", version)]
pub struct Cli {
    /// Doctor list source: HTTP(S) URL or local JSON file. Overrides `DOCFINDER_DATA_URL`.
    #[arg(long, global = true, value_name = "URL|PATH")]
    pub source: Option<String>,
    /// Page location whose query carries the filter state. Overrides `DOCFINDER_PAGE_URL`.
    #[arg(long, global = true, value_name = "URL")]
    pub page_url: Option<String>,
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter and sort the directory with explicit criteria.
    Search(SearchArgs),
    /// Apply a deep-link query string such as `?speciality=Dentist&sort=fees`.
    Open(OpenArgs),
    /// Autocomplete names for a partial search text.
    Suggest(SuggestArgs),
    /// List the specialty checkboxes built from the loaded data.
    Specialities,
    /// Drive the directory interactively, one control event per stdin line.
    Session,
}
