use crate::cli::commands::catalog::parse_visa_type;
use crate::cli::commands::CommandDefinition;
use crate::cli::core::{flag_value, CliContext, CommandResult};
use crate::cli::wizard;
use crate::domain::VisaType;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "apply",
        "Fill in and submit an application",
        "apply [--type <ten_years|five_years|real_estate|family>]",
        cmd_apply,
    )]
}

fn cmd_apply(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let visa_type = match flag_value(args, "--type") {
        Some(raw) => parse_visa_type(raw)?,
        None => VisaType::default(),
    };
    wizard::run(context, visa_type)
}
