use anyhow::{Context, Result, bail};
use docfinder_core::config::AppConfig;
use docfinder_core::models::{DoctorCard, FilterCriteria};
use docfinder_core::provider::DoctorProvider;
use docfinder_core::render::LOAD_FAILED_MESSAGE;
use docfinder_core::{DatasetStore, QueryCodec, apply, provider_for, suggest};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{Cli, Commands, SearchArgs};

mod session;
mod support;


use self::support::print_json;

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.source.as_deref(), cli.page_url.as_deref())?;
    let codec = QueryCodec::from_config(&config.controls);
    let provider = provider_for(&config.provider).context("failed to build doctor provider")?;

    if let Commands::Session = cli.command {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return session::run_session(
            provider.as_ref(),
            codec,
            config.controls.page_url.clone(),
            stdin.lock(),
            stdout.lock(),
        );
    }

    let store = load_store(provider.as_ref())?;
    run_validated(&store, &codec, cli.command)
}

fn resolve_config(source: Option<&str>, page_url: Option<&str>) -> Result<AppConfig> {
    let mut config = AppConfig::from_env().context("failed to read configuration")?;
    if let Some(raw) = source {
        config.provider = config
            .provider
            .with_source(raw)
            .with_context(|| format!("invalid --source value '{raw}'"))?;
    }
    if let Some(raw) = page_url {
        config.controls = config
            .controls
            .with_page_url(raw)
            .with_context(|| format!("invalid --page-url value '{raw}'"))?;
    }
    Ok(config)
}

fn load_store(provider: &dyn DoctorProvider) -> Result<DatasetStore> {
    let source = provider.describe();
    match provider.fetch() {
        Ok(records) => {
            let store = DatasetStore::new(records);
            info!(source = %source, records = store.len(), "doctor list loaded");
            Ok(store)
        }
        Err(err) => {
            warn!(source = %source, code = err.code(), "doctor list load failed");
            let payload = err.to_payload("load", Some(source));
            eprintln!("{}", serde_json::to_string(&payload)?);
            Err(anyhow::Error::new(err).context(LOAD_FAILED_MESSAGE))
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchReport {
    query: String,
    criteria: FilterCriteria,
    count: usize,
    doctors: Vec<DoctorCard>,
}

/// Resolves `criteria` against the loaded controls first, as the page does.
fn search_report(
    store: &DatasetStore,
    codec: &QueryCodec,
    criteria: &FilterCriteria,
) -> SearchReport {
    let criteria = codec.resolve(criteria, store);
    let doctors = apply(store.records(), &criteria);
    SearchReport {
        query: codec.encode(&criteria),
        criteria,
        count: doctors.len(),
        doctors: doctors.iter().map(DoctorCard::from).collect(),
    }
}

fn criteria_from_args(codec: &QueryCodec, args: SearchArgs) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::default().with_sort(args.sort);
    if let Some(name) = args.name {
        criteria = criteria.with_name(name.trim());
    }
    for speciality in args.specialities {
        let speciality = speciality.trim();
        if !speciality.is_empty() {
            criteria = criteria.with_speciality(speciality);
        }
    }
    if let Some(raw) = args.consultation {
        let Some(mode) = codec.lookup_consultation(raw.trim()) else {
            bail!(
                "unknown consultation mode '{raw}' (expected All|{})",
                codec.consultation_modes().join("|")
            );
        };
        criteria = criteria.with_consultation(mode);
    }
    Ok(criteria)
}

fn run_validated(store: &DatasetStore, codec: &QueryCodec, command: Commands) -> Result<()> {
    match command {
        Commands::Search(args) => {
            let criteria = criteria_from_args(codec, args)?;
            print_json(&search_report(store, codec, &criteria))?;
        }
        Commands::Open(args) => {
            let criteria = codec.decode(&args.query);
            print_json(&search_report(store, codec, &criteria))?;
        }
        Commands::Suggest(args) => {
            let names = suggest(store.records(), &args.partial)
                .into_iter()
                .map(|doctor| doctor.name)
                .collect::<Vec<_>>();
            print_json(&names)?;
        }
        Commands::Specialities => {
            print_json(&store.speciality_options())?;
        }
        Commands::Session => bail!("session is handled before the dataset is loaded"),
    }
    Ok(())
}
