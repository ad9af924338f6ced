use std::io::{BufRead, Write};

use anyhow::{Result, anyhow, bail};
use docfinder_core::control::{ControlChange, ControlEvent, DispatchOutcome};
use docfinder_core::models::{SortKey, SpecialityOption};
use docfinder_core::provider::DoctorProvider;
use docfinder_core::render::{FilterOptionsSink, Renderer, ResultView};
use docfinder_core::{DirectorySession, History, QueryCodec, SessionHistory};
use reqwest::Url;

/// Renders frames as plain text lines, drained after every step.
#[derive(Debug, Default)]
pub(super) struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, view: ResultView<'_>) {
        if let Some(message) = view.message() {
            self.lines.push(message.to_string());
            return;
        }
        let cards = view.cards();
        self.lines.push(format!("{} doctor(s)", cards.len()));
        for card in cards {
            self.lines.extend(card.to_string().lines().map(ToString::to_string));
        }
    }
}

#[derive(Debug, Default)]
struct OptionList(Vec<SpecialityOption>);

impl FilterOptionsSink for OptionList {
    fn show_options(&mut self, options: &[SpecialityOption]) {
        self.0 = options.to_vec();
    }
}

/// One parsed line of the interactive protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Step {
    Event(ControlEvent),
    Open(String),
    Back,
    Forward,
    ShowUrl,
    Help,
    Quit,
}

pub(super) const HELP: &str = "commands: type <text> | enter | pick <n> | check <label> \
| uncheck <label> | consultation <mode> | sort <none|fees|experience> | open <query> | back \
| forward | url | help | quit | exit";

pub(super) fn parse_step(line: &str) -> Result<Option<Step>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line
        .trim_start()
        .split_once(' ')
        .unwrap_or((line.trim_start(), ""));
    let step = match verb {
        "type" => Step::Event(ControlEvent::SearchInput(rest.to_string())),
        "enter" => Step::Event(ControlEvent::EnterPressed),
        "pick" => {
            let index = rest
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| anyhow!("pick expects a suggestion number starting at 1"))?;
            Step::Event(ControlEvent::SuggestionPicked(index))
        }
        "check" | "uncheck" => Step::Event(ControlEvent::ControlChanged(
            ControlChange::SpecialityToggled {
                label: required(verb, rest)?,
                checked: verb == "check",
            },
        )),
        "consultation" => Step::Event(ControlEvent::ControlChanged(
            ControlChange::ConsultationSelected(required(verb, rest)?),
        )),
        "sort" => Step::Event(ControlEvent::ControlChanged(ControlChange::SortSelected(
            rest.parse::<SortKey>()?,
        ))),
        "open" => Step::Open(rest.trim().to_string()),
        "back" => Step::Back,
        "forward" => Step::Forward,
        "url" => Step::ShowUrl,
        "help" => Step::Help,
        "quit" | "exit" => Step::Quit,
        other => bail!("unknown command '{other}'"),
    };
    Ok(Some(step))
}

fn required(verb: &str, rest: &str) -> Result<String> {
    let value = rest.trim();
    if value.is_empty() {
        bail!("{verb} expects a value");
    }
    Ok(value.to_string())
}

pub(super) fn run_session(
    provider: &dyn DoctorProvider,
    codec: QueryCodec,
    page_url: Url,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut options = OptionList::default();
    let mut session = DirectorySession::start(
        provider,
        codec,
        SessionHistory::new(page_url),
        TextRenderer::default(),
        &mut options,
    );
    write_lines(&mut output, session.renderer_mut().drain())?;
    if let Some(failure) = session.load_failure() {
        bail!("{} ({})", failure.reason, failure.source);
    }

    let labels = options
        .0
        .iter()
        .map(|option| option.label.as_str())
        .collect::<Vec<_>>();
    writeln!(output, "specialities: {}", labels.join(", "))?;

    for line in input.lines() {
        let line = line?;
        let step = match parse_step(&line) {
            Ok(Some(step)) => step,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        let outcome = match step {
            Step::Event(event) => session.dispatch(event),
            Step::Open(query) => session.open_query(&query),
            Step::Back => session.go_back(),
            Step::Forward => session.go_forward(),
            Step::ShowUrl => {
                writeln!(output, "{}", session.history().location())?;
                continue;
            }
            Step::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Step::Quit => break,
        };

        match outcome {
            DispatchOutcome::Rendered { .. } => {
                write_lines(&mut output, session.renderer_mut().drain())?;
            }
            DispatchOutcome::SuggestionsRefreshed { count: 0 } => {
                writeln!(output, "no suggestions")?;
            }
            DispatchOutcome::SuggestionsRefreshed { .. } => {
                for (idx, doctor) in session.suggestions().iter().enumerate() {
                    writeln!(output, "{}. {}", idx + 1, doctor.name)?;
                }
            }
            DispatchOutcome::Ignored => writeln!(output, "ignored")?,
            DispatchOutcome::Inert => break,
        }
    }
    output.flush()?;
    Ok(())
}

fn write_lines(output: &mut impl Write, lines: Vec<String>) -> Result<()> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}
