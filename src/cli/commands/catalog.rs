//! Commands that need no sign-in: the service catalogue, document
//! requirements and the country search.

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{flag_value, positional, CliContext, CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::domain::{DocumentSlot, VisaType};
use crate::form::{MAX_DEPENDENTS, MIN_DEPENDENTS};
use crate::reference::CountryDirectory;
use crate::routes::Route;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "services",
            "List the offered visa services",
            "services",
            cmd_services,
        ),
        CommandDefinition::new(
            "requirements",
            "Show the documents a visa type needs",
            "requirements --type <ten_years|five_years|real_estate|family>",
            cmd_requirements,
        ),
        CommandDefinition::new(
            "countries",
            "Search the nationality list",
            "countries [term]",
            cmd_countries,
        ),
    ]
}

fn cmd_services(_context: &mut CliContext, _args: &[&str]) -> CommandResult {
    output::section("Services");
    for visa_type in VisaType::ALL {
        io::print_info(format!("{} ({})", visa_type.title(), visa_type.as_str()));
        output::line(format!("    {}", visa_type.summary()));
        output::line(format!(
            "    details: {}",
            Route::ServiceDetails(visa_type).path()
        ));
        output::line(format!(
            "    apply:   {}",
            Route::ApplicationForm(visa_type).path()
        ));
    }
    Ok(())
}

pub(crate) fn parse_visa_type(raw: &str) -> Result<VisaType, CommandError> {
    raw.parse::<VisaType>().map_err(CommandError::InvalidArguments)
}

fn cmd_requirements(_context: &mut CliContext, args: &[&str]) -> CommandResult {
    let raw = flag_value(args, "--type")
        .or_else(|| positional(args, &["--type"]).first().copied())
        .ok_or_else(|| CommandError::InvalidArguments("Usage: requirements --type <visa type>".into()))?;
    let visa_type = parse_visa_type(raw)?;

    output::section(format!("Requirements: {}", visa_type.title()));
    for slot in DocumentSlot::ALL {
        let marker = if slot.is_required(visa_type) {
            "required"
        } else {
            "optional"
        };
        output::line(format!(
            "  {:<18} {:<9} {}",
            slot.label(),
            marker,
            slot.accepted_description()
        ));
    }
    output::line("  Maximum file size: 10MB");
    if visa_type.is_family() {
        output::line(format!(
            "  Dependents: {} to {}, each with a relationship",
            MIN_DEPENDENTS, MAX_DEPENDENTS
        ));
    }
    Ok(())
}

fn cmd_countries(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let term = positional(args, &[]).join(" ");
    let mut directory = CountryDirectory::new();
    let notifier = context.ui.notifier.clone();

    let matches: Vec<String> = directory
        .search(&context.client, &term, notifier.as_ref())
        .into_iter()
        .map(|country| country.display_label())
        .collect();
    if directory.last_error().is_some() {
        return Err(CommandError::Reported);
    }

    if matches.is_empty() {
        io::print_warning(format!("No countries match `{}`.", term));
        if !term.is_empty() {
            // The suggestion needs the unfiltered list.
            directory.search(&context.client, "", notifier.as_ref());
            if let Some(country) = directory.suggestion(&term) {
                io::print_info(format!("Did you mean {}?", country.display_label()));
            }
        }
        return Ok(());
    }
    for label in matches {
        output::line(format!("  {}", label));
    }
    Ok(())
}
