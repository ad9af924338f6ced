use super::*;
use clap::Parser;
use docfinder_core::models::SortKey;

#[test]
fn search_collects_repeated_speciality_flags() {
    let cli = Cli::try_parse_from([
        "docfinder",
        "search",
        "--speciality",
        "Cardiologist",
        "--speciality",
        "Dentist",
        "--sort",
        "fees",
    ])
    .expect("parse");
    match cli.command {
        Commands::Search(SearchArgs {
            specialities,
            sort,
            name,
            consultation,
        }) => {
            assert_eq!(specialities, ["Cardiologist", "Dentist"]);
            assert_eq!(sort, SortKey::Fees);
            assert_eq!(name, None);
            assert_eq!(consultation, None);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_defaults_to_unsorted() {
    let cli = Cli::try_parse_from(["docfinder", "search"]).expect("parse");
    match cli.command {
        Commands::Search(args) => assert_eq!(args.sort, SortKey::None),
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_rejects_unknown_sort_key() {
    let parsed = Cli::try_parse_from(["docfinder", "search", "--sort", "rating"]);
    assert!(parsed.is_err(), "unknown sort key must be rejected");
}

#[test]
fn global_flags_are_accepted_after_subcommand() {
    let cli = Cli::try_parse_from([
        "docfinder",
        "specialities",
        "--source",
        "doctors.json",
        "--page-url",
        "http://localhost/?sort=fees",
        "-v",
    ])
    .expect("parse");
    assert!(matches!(cli.command, Commands::Specialities));
    assert_eq!(cli.source.as_deref(), Some("doctors.json"));
    assert_eq!(cli.page_url.as_deref(), Some("http://localhost/?sort=fees"));
    assert!(cli.verbose);
    assert!(!cli.quiet);
}

#[test]
fn open_accepts_query_with_leading_question_mark() {
    let cli = Cli::try_parse_from(["docfinder", "open", "?speciality=Dentist"]).expect("parse");
    match cli.command {
        Commands::Open(OpenArgs { query }) => assert_eq!(query, "?speciality=Dentist"),
        _ => panic!("expected open command"),
    }
}
