use crate::api::AuthService;
use crate::cli::commands::CommandDefinition;
use crate::cli::core::{positional, CliContext, CommandError, CommandResult};
use crate::cli::io;
use crate::errors::{ApiError, IntakeError};
use crate::routes::Route;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("login", "Sign in as an admin", "login [email]", cmd_login),
        CommandDefinition::new("logout", "Sign out and forget the token", "logout", cmd_logout),
        CommandDefinition::new(
            "whoami",
            "Show the signed-in admin and check the token",
            "whoami",
            cmd_whoami,
        ),
    ]
}

fn cmd_login(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let session = context.client.session();
    if AuthService::entry_route(session) == Route::Dashboard {
        io::print_info(format!(
            "Already signed in as {}.",
            session.email().unwrap_or_default()
        ));
        return Ok(());
    }

    let email = match positional(args, &[]).first() {
        Some(email) => email.to_string(),
        None => io::prompt_text(&context.theme, "Email", "")?,
    };
    let password = io::prompt_password(&context.theme, "Password")?;

    let auth = AuthService::new(&context.client, &context.ui);
    match auth.login(&email, &password) {
        Ok(()) => Ok(()),
        Err(IntakeError::InvalidInput(message)) => Err(CommandError::InvalidArguments(message)),
        Err(IntakeError::Api(_)) => Err(CommandError::Reported),
        Err(other) => Err(other.into()),
    }
}

fn cmd_logout(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    AuthService::new(&context.client, &context.ui).logout();
    Ok(())
}

fn cmd_whoami(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    match AuthService::new(&context.client, &context.ui).check_token() {
        Ok(_) => {
            io::print_info(format!(
                "Signed in as {}",
                context.client.session().email().unwrap_or_default()
            ));
            Ok(())
        }
        Err(ApiError::SessionExpired) => Err(ApiError::SessionExpired.into()),
        Err(_) => Err(CommandError::Reported),
    }
}
