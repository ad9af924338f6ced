use clap::Args;
use docfinder_core::models::SortKey;

use super::parsers::parse_sort_key;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring of the doctor's name.
    #[arg(long, allow_hyphen_values = true)]
    pub name: Option<String>,
    /// Repeat to match any of several specialties.
    #[arg(long = "speciality", value_name = "LABEL")]
    pub specialities: Vec<String>,
    /// Consultation mode, e.g. `Video Consult`. `All` disables the filter.
    #[arg(long)]
    pub consultation: Option<String>,
    #[arg(long, default_value = "none", value_parser = parse_sort_key)]
    pub sort: SortKey,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Query string, with or without the leading `?`.
    #[arg(allow_hyphen_values = true)]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct SuggestArgs {
    #[arg(allow_hyphen_values = true)]
    pub partial: String,
}
