//! Command dispatch and the context shared by command handlers.

use std::io;
use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::api::{ApiClient, ReqwestTransport};
use crate::config::{Config, ConfigManager};
use crate::errors::{ApiError, IntakeError};
use crate::session::{JsonSessionStore, SessionContext};
use crate::ui::UiContext;

use super::commands::{self, CommandRegistry};
use super::io as cli_io;
use super::terminal::{TerminalNavigator, TerminalNotifier};

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    /// The failure has already been shown to the user.
    #[error("command failed")]
    Reported,
}

/// Everything a command handler needs: settings, session, API client and the
/// terminal UI seams.
pub struct CliContext {
    pub registry: CommandRegistry,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub client: ApiClient,
    pub ui: UiContext,
    pub theme: ColorfulTheme,
}

impl CliContext {
    pub fn new() -> Result<Self, CommandError> {
        let config_manager = ConfigManager::new();
        let config = config_manager.load()?;
        let session = Arc::new(SessionContext::new(Box::new(JsonSessionStore::new(
            config_manager.session_path(),
        ))));
        let ui = UiContext::new(Arc::new(TerminalNotifier), Arc::new(TerminalNavigator));
        let client = ApiClient::new(
            config.api_base_url.clone(),
            Box::new(ReqwestTransport::new()?),
            session,
            ui.navigator.clone(),
        );
        tracing::debug!(api = %config.api_base_url, "cli context ready");
        Ok(Self {
            registry: CommandRegistry::new(commands::all_definitions()),
            config_manager,
            config,
            client,
            ui,
            theme: ColorfulTheme::default(),
        })
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        let Some(definition) = self.registry.get(command) else {
            return Err(CommandError::UnknownCommand(command.to_string()));
        };
        let handler = definition.handler;
        handler(self, args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Run `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::UnknownCommand(name) => {
                self.suggest_command(&name);
            }
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                super::output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Reported => {}
            other => cli_io::print_error(other),
        }
    }
}

/// Runs a single command from process arguments (without the program name).
pub fn run_cli(args: Vec<String>) -> Result<(), CommandError> {
    let mut context = CliContext::new()?;
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.to_lowercase(), rest),
        None => ("help".to_string(), &[][..]),
    };
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

    match context.dispatch(&command, &rest) {
        Ok(()) => Ok(()),
        Err(err) => {
            context.report_error(err);
            Err(CommandError::Reported)
        }
    }
}

/// Value following `--name`, or an `--name=value` form.
pub(crate) fn flag_value<'a>(args: &[&'a str], name: &str) -> Option<&'a str> {
    let prefix = format!("{}=", name);
    args.iter().enumerate().find_map(|(index, arg)| {
        if *arg == name {
            args.get(index + 1).copied()
        } else {
            arg.strip_prefix(prefix.as_str())
        }
    })
}

/// Arguments that are neither flags nor flag values.
pub(crate) fn positional<'a>(args: &[&'a str], flags: &[&str]) -> Vec<&'a str> {
    let mut values = Vec::new();
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if flags.contains(arg) {
            skip = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        values.push(*arg);
    }
    values
}
