use crate::cli::commands::CommandDefinition;
use crate::cli::core::{flag_value, positional, CliContext, CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::terminal::DialoguerConfirm;
use crate::dashboard::{Dashboard, DeleteOutcome, DocumentView};
use crate::domain::Application;
use crate::errors::ApiError;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "dashboard",
            "List submitted applications",
            "dashboard [--page N]",
            cmd_dashboard,
        ),
        CommandDefinition::new(
            "delete",
            "Delete an application after confirmation",
            "delete <id>",
            cmd_delete,
        ),
    ]
}

fn open(context: &CliContext) -> Result<Dashboard, CommandError> {
    let mut dashboard = Dashboard::new(context.config.page_size());
    match dashboard.open(&context.client, &context.ui) {
        Ok(()) => Ok(dashboard),
        Err(ApiError::SessionExpired) => Err(ApiError::SessionExpired.into()),
        Err(_) => Err(CommandError::Reported),
    }
}

fn cmd_dashboard(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let page = match flag_value(args, "--page") {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| CommandError::InvalidArguments(format!("Invalid page `{}`", raw)))?,
        None => 1,
    };
    let mut dashboard = open(context)?;
    dashboard.go_to(page);
    render(context, &dashboard);
    Ok(())
}

fn cmd_delete(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let raw = positional(args, &[])
        .first()
        .copied()
        .ok_or_else(|| CommandError::InvalidArguments("Usage: delete <id>".into()))?;
    let id = raw
        .trim_start_matches('#')
        .parse::<u64>()
        .map_err(|_| CommandError::InvalidArguments(format!("Invalid application id `{}`", raw)))?;

    let mut dashboard = open(context)?;
    if dashboard.find(id).is_none() {
        io::print_warning(format!("Application #{} is not in the list.", id));
    }
    match dashboard.delete(id, &context.client, &DialoguerConfirm::new(), &context.ui) {
        DeleteOutcome::Cancelled => {
            io::print_info("Delete cancelled.");
            Ok(())
        }
        DeleteOutcome::Deleted => {
            render(context, &dashboard);
            Ok(())
        }
        DeleteOutcome::Failed(ApiError::SessionExpired) => Err(ApiError::SessionExpired.into()),
        DeleteOutcome::Failed(_) => Err(CommandError::Reported),
    }
}

fn render(context: &CliContext, dashboard: &Dashboard) {
    let page = dashboard.page_info();
    output::section("Applications");
    if page.total == 0 {
        io::print_info("No applications yet.");
        return;
    }
    for application in dashboard.visible() {
        render_application(context, application);
    }
    output::line("");
    io::print_info(page.summary());
    let links: Vec<String> = [
        ("first", page.first),
        ("prev", page.prev),
        ("next", page.next),
        ("last", page.last),
    ]
    .into_iter()
    .filter_map(|(label, target)| target.map(|target| format!("{} --page {}", label, target)))
    .collect();
    if !links.is_empty() {
        output::line(format!("  {}", links.join("  |  ")));
    }
}

fn render_application(context: &CliContext, application: &Application) {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".into());
    output::line(format!("#{}  {}", application.id, text(&application.name)));
    output::line(format!("    Email       : {}", text(&application.email)));
    output::line(format!("    Phone       : {}", text(&application.phone)));
    output::line(format!("    Nationality : {}", text(&application.nationality)));
    output::line(format!("    Visa        : {}", application.kind_label()));
    if application.people_count.is_some() || application.people.is_some() {
        output::line(format!(
            "    Dependents  : {} ({})",
            application
                .people_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "N/A".into()),
            application.people_label()
        ));
    }
    output::line(format!("    Submitted   : {}", application.submitted_label()));
    for (slot, view) in DocumentView::for_application(&context.config.storage_base_url, application) {
        output::line(format!("    {:<16}: {}", slot.label(), view.describe()));
    }
}
