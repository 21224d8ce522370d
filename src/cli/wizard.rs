//! Interactive terminal rendition of the three-step application form.

use std::path::Path;

use crate::cli::core::{CliContext, CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::domain::phone::CALLING_CODES;
use crate::domain::{DocumentSlot, FileHandle, Relationship, VisaType};
use crate::form::{IntakeForm, Step, SubmitOutcome, MAX_DEPENDENTS, MIN_DEPENDENTS};
use crate::reference::CountryDirectory;

/// What the user chose at a step boundary.
enum Flow {
    Continue,
    Cancelled,
}

pub fn run(context: &CliContext, visa_type: VisaType) -> CommandResult {
    let mut form = IntakeForm::new(visa_type);
    let mut countries = CountryDirectory::new();
    output::section(format!("Apply: {}", visa_type.title()));

    loop {
        output::section(form.step());
        let flow = match form.step() {
            Step::Personal => personal_step(context, &mut form, &mut countries)?,
            Step::Documents => documents_step(context, &mut form)?,
            Step::Review => match review_step(context, &mut form)? {
                Some(flow) => flow,
                None => return Ok(()),
            },
        };
        if let Flow::Cancelled = flow {
            io::print_info("Application cancelled.");
            return Ok(());
        }
    }
}

fn print_errors(form: &IntakeForm) {
    for (_, message) in form.errors().iter() {
        io::print_error(message);
    }
}

fn personal_step(
    context: &CliContext,
    form: &mut IntakeForm,
    countries: &mut CountryDirectory,
) -> Result<Flow, CommandError> {
    let theme = &context.theme;

    let name = io::prompt_text(theme, "Full name", &form.draft().contact.name)?;
    form.set_name(&name);
    let email = io::prompt_text(theme, "Email", &form.draft().contact.email)?;
    form.set_email(&email);

    let codes: Vec<String> = CALLING_CODES.iter().map(|code| code.display_label()).collect();
    let current = CALLING_CODES
        .iter()
        .position(|code| code.code == form.draft().contact.calling_code)
        .unwrap_or(0);
    let Some(index) = io::search(theme, "Country code", &codes, current)? else {
        return Ok(Flow::Cancelled);
    };
    form.select_calling_code(CALLING_CODES[index].code);

    let phone = io::prompt_text(theme, "Phone number", &form.draft().contact.phone)?;
    form.set_phone(&phone);

    if !pick_nationality(context, form, countries)? {
        return Ok(Flow::Cancelled);
    }

    if form.visa_type().is_family() && !pick_dependents(context, form)? {
        return Ok(Flow::Cancelled);
    }

    if !form.next_step() {
        print_errors(form);
    }
    Ok(Flow::Continue)
}

fn pick_nationality(
    context: &CliContext,
    form: &mut IntakeForm,
    countries: &mut CountryDirectory,
) -> Result<bool, CommandError> {
    let notifier = context.ui.notifier.clone();
    loop {
        let term = io::prompt_text(&context.theme, "Search nationality (blank for all)", "")?;
        let matches: Vec<_> = countries
            .search(&context.client, &term, notifier.as_ref())
            .into_iter()
            .cloned()
            .collect();
        if matches.is_empty() {
            if countries.last_error().is_none() {
                io::print_warning("No countries found.");
                if let Some(country) = countries.suggestion(&term) {
                    io::print_info(format!("Did you mean {}?", country.name));
                }
            }
            continue;
        }
        let labels: Vec<String> = matches.iter().map(|country| country.display_label()).collect();
        match io::search(&context.theme, "Nationality", &labels, 0)? {
            Some(index) => {
                form.select_nationality(&matches[index]);
                return Ok(true);
            }
            None => return Ok(false),
        }
    }
}

fn pick_dependents(context: &CliContext, form: &mut IntakeForm) -> Result<bool, CommandError> {
    let counts: Vec<String> = (MIN_DEPENDENTS..=MAX_DEPENDENTS)
        .map(|count| count.to_string())
        .collect();
    let current = form
        .draft()
        .dependents
        .as_ref()
        .and_then(|dependents| dependents.count)
        .map(|count| usize::from(count - MIN_DEPENDENTS))
        .unwrap_or(0);
    let Some(index) = io::choose(&context.theme, "Number of dependents", &counts, current)? else {
        return Ok(false);
    };
    form.set_dependent_count(MIN_DEPENDENTS + index as u8);

    let labels: Vec<String> = Relationship::ALL
        .iter()
        .map(|relationship| relationship.label().to_string())
        .collect();
    for person in 0..=index {
        let prompt = format!("Relationship for person {}", person + 1);
        let Some(choice) = io::choose(&context.theme, &prompt, &labels, 0)? else {
            return Ok(false);
        };
        form.set_relationship(person, Relationship::ALL[choice]);
    }
    Ok(true)
}

fn documents_step(context: &CliContext, form: &mut IntakeForm) -> Result<Flow, CommandError> {
    let visa_type = form.visa_type();
    for slot in DocumentSlot::ALL {
        let requirement = if slot.is_required(visa_type) {
            "required"
        } else {
            "optional"
        };
        let current = form
            .draft()
            .document(slot)
            .map(|file| format!(", current: {}", file.file_name))
            .unwrap_or_default();
        let prompt = format!(
            "{} ({}, {}{}) path, blank to skip",
            slot.label(),
            requirement,
            slot.accepted_description(),
            current
        );
        loop {
            let raw = io::prompt_text(&context.theme, &prompt, "")?;
            let raw = raw.trim();
            if raw.is_empty() {
                break;
            }
            let attached = FileHandle::from_path(Path::new(raw))
                .and_then(|file| form.attach_document(slot, file));
            match attached {
                Ok(()) => break,
                Err(err) => io::print_error(err),
            }
        }
    }

    let choices = vec!["Continue".to_string(), "Back".to_string()];
    match io::choose(&context.theme, "Next", &choices, 0)? {
        Some(0) => {
            if !form.next_step() {
                print_errors(form);
            }
            Ok(Flow::Continue)
        }
        Some(_) => {
            form.prev_step();
            Ok(Flow::Continue)
        }
        None => Ok(Flow::Cancelled),
    }
}

/// Returns `None` once the application has been submitted.
fn review_step(context: &CliContext, form: &mut IntakeForm) -> Result<Option<Flow>, CommandError> {
    output::line(form.review());

    let choices = vec!["Submit".to_string(), "Back".to_string()];
    match io::choose(&context.theme, "Ready to submit?", &choices, 0)? {
        Some(0) => {
            let outcome = form.submit(&context.client, &context.ui, context.config.redirect_delay());
            match outcome {
                SubmitOutcome::Submitted => Ok(None),
                SubmitOutcome::Invalid => {
                    print_errors(form);
                    Ok(Some(Flow::Continue))
                }
                SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => Ok(Some(Flow::Continue)),
            }
        }
        Some(_) => {
            form.prev_step();
            Ok(Some(Flow::Continue))
        }
        None => Ok(Some(Flow::Cancelled)),
    }
}
