use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CliContext, CommandResult};
use crate::cli::io;
use crate::cli::output::section as output_section;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new(
            "version",
            "Show version information",
            "version",
            cmd_version,
        ),
        CommandDefinition::new(
            "config",
            "Show the active settings",
            "config",
            cmd_config,
        ),
    ]
}

fn cmd_help(context: &mut CliContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.registry.get(&name) {
            output_section(format!("Help: {}", command.name));
            io::print_info(format!("  Description: {}", command.description));
            io::print_info(format!("  Usage: {}", command.usage));
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    output_section("Available commands");
    for command in context.registry.iter() {
        io::print_info(format!("  {:<14} {}", command.name, command.description));
    }
    io::print_info("Use `help <command>` for details.");
    Ok(())
}

fn cmd_version(_context: &mut CliContext, _args: &[&str]) -> CommandResult {
    io::print_info(format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    Ok(())
}

fn cmd_config(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    let config = &context.config;
    output_section("Configuration");
    io::print_info(format!("  File           : {}", context.config_manager.path().display()));
    io::print_info(format!("  API base URL   : {}", config.api_base_url));
    io::print_info(format!("  Storage URL    : {}", config.storage_base_url));
    io::print_info(format!("  Redirect delay : {} ms", config.redirect_delay_ms));
    io::print_info(format!("  Page size      : {}", config.page_size()));
    Ok(())
}
