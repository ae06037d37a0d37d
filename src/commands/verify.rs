//! Verify command implementation

use std::io::Write;

use anyhow::Result;

use taskmaster_verify::config::LoadedConfig;
use taskmaster_verify::presentation::Cli;
use taskmaster_verify::{create_verify_use_case, Config, VerifyOutcome};

use crate::ui::context::UiContext;
use crate::ui::json::{self, events};
use crate::ui::views::verify as view;

pub fn cmd_verify(cli: &Cli) -> Result<()> {
    let project_root = match super::project_root::resolve_project_root(cli.project_root.as_deref())
    {
        Ok(root) => root,
        Err(e) => return Err(report_startup_error(cli.json, "project_root", e.into())),
    };

    let loaded = match Config::load_for_project(&project_root) {
        Ok(loaded) => loaded,
        Err(e) => return Err(report_startup_error(cli.json, "config", e.into())),
    };
    let LoadedConfig {
        config,
        source,
        warnings,
    } = loaded;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    if let Some(path) = &source {
        crate::ui::output::print_config_warnings(path, &warnings, ui.unicode);
    }

    let use_case = create_verify_use_case(&project_root);

    let outcome = if ui.json {
        json::emit_event(&events::StartEvent::new())?;
        let outcome = use_case.execute_with_callback(|check| {
            let _ = json::emit_event(&events::CheckEvent::new(check));
        });
        json::emit_event(&events::CompleteEvent::from_outcome(&outcome))?;
        outcome
    } else {
        print!(
            "{}",
            view::render_verify_header(
                &project_root,
                source.as_deref(),
                ui.verbose,
                ui.color,
                ui.unicode
            )
        );
        let outcome = use_case.execute_with_callback(|check| {
            print!(
                "{}",
                view::render_check_line(check, ui.verbose, ui.color, ui.unicode)
            );
            let _ = std::io::stdout().flush();
        });
        render_verdict(&outcome, &ui);
        outcome
    };

    if ui.annotate() {
        emit_github_annotations(&outcome);
    }

    if !outcome.is_success() {
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}

fn render_verdict(outcome: &VerifyOutcome, ui: &UiContext) {
    print!(
        "{}",
        view::render_results_footer(&outcome.run, ui.verbose, ui.color, ui.unicode)
    );

    match &outcome.token {
        Some(token) => print!("{}", view::render_success_block(token, ui.color, ui.unicode)),
        None => print!("{}", view::render_failure_notice(ui.color, ui.unicode)),
    }
    println!();
}

fn emit_github_annotations(outcome: &VerifyOutcome) {
    for check in outcome.run.checks() {
        if let Some(annotation) = crate::ui::ci::check_annotation(check) {
            println!("{}", annotation);
        }
    }
}

/// Surface an error that stops the run before any check executes
fn report_startup_error(json: bool, code: &str, err: anyhow::Error) -> anyhow::Error {
    if json {
        let _ = json::emit_event(&events::ErrorEvent::new(code, err.to_string()));
    }
    err
}
