//! Command handlers for the HR console.
//!
//! Each handler drives one service operation and renders its outcome as a
//! console message. Failures are logged and rendered with a status tag.

use crate::access::{self, RouteDecision};
use crate::auth::{Account, AuthService};
use crate::console::commands::{Command, CommandResult, CommandStatus, HELP_TEXT};
use crate::console::parser::{parse_profile, parse_update};
use crate::directory::{self, RoleFilter};
use crate::error::handlers::{error_to_status, handle_error, user_message};
use crate::error::{AppError, ConsoleError};
use crate::storage::KeyValueStore;

/// One-line summary of an account
pub fn describe(account: &Account) -> String {
    format!(
        "{:<9} {:<28} {:<15} {:<24} {}",
        account.employee_id, account.name, account.role, account.department, account.status
    )
}

fn into_result(outcome: Result<String, AppError>) -> CommandResult {
    match outcome {
        Ok(message) => CommandResult::success(message),
        Err(e) => {
            handle_error(&e);
            CommandResult::failure(
                error_to_status(&e),
                format!("{} {}", error_to_status(&e), user_message(&e)),
            )
        }
    }
}

/// Dispatches a parsed command to its handler.
pub async fn handle_command<S: KeyValueStore>(
    service: &mut AuthService<S>,
    command: &Command,
) -> CommandResult {
    match command {
        Command::Login {
            employee_id,
            password,
        } => into_result(handle_login(service, employee_id, password).await),
        Command::Logout => into_result(handle_logout(service)),
        Command::WhoAmI => into_result(handle_whoami(service)),
        Command::Users(search) => into_result(handle_users(
            service,
            search.as_deref().unwrap_or(""),
            RoleFilter::All,
        )),
        Command::Filter { role, search } => into_result(
            role.parse::<RoleFilter>()
                .map_err(|e| AppError::from(ConsoleError::from(e)))
                .and_then(|filter| {
                    handle_users(service, search.as_deref().unwrap_or(""), filter)
                }),
        ),
        Command::Create(raw) => into_result(handle_create(service, raw).await),
        Command::Set { id, field, value } => {
            into_result(handle_set(service, id, field, value).await)
        }
        Command::Delete(id) => into_result(handle_delete(service, id).await),
        Command::Open(path) => into_result(Ok(handle_open(service, path))),
        Command::Nav => into_result(handle_nav(service)),
        Command::Stats => into_result(handle_stats(service)),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult {
            status: CommandStatus::Exit,
            message: Some("Goodbye".into()),
        },
        Command::Unknown(line) => CommandResult::failure(
            "unknown command",
            format!("INVALID Unknown or incomplete command: '{line}' (try HELP)"),
        ),
    }
}

async fn handle_login<S: KeyValueStore>(
    service: &mut AuthService<S>,
    employee_id: &str,
    password: &str,
) -> Result<String, AppError> {
    let account = service.login(employee_id, password).await?;
    Ok(format!("Welcome, {} ({})", account.name, account.role))
}

fn handle_logout<S: KeyValueStore>(service: &mut AuthService<S>) -> Result<String, AppError> {
    if !service.session().is_authenticated() {
        return Ok("Not signed in".into());
    }
    service.logout()?;
    Ok("Signed out".into())
}

fn handle_whoami<S: KeyValueStore>(service: &AuthService<S>) -> Result<String, AppError> {
    Ok(match service.current_user() {
        Some(account) => describe(account),
        None => "Not signed in".into(),
    })
}

fn handle_users<S: KeyValueStore>(
    service: &AuthService<S>,
    search: &str,
    filter: RoleFilter,
) -> Result<String, AppError> {
    let accounts = service.get_all_users()?;
    let found = directory::filter_accounts(accounts, search, filter);
    if found.is_empty() {
        return Ok("No matching accounts".into());
    }
    let lines: Vec<String> = found.into_iter().map(describe).collect();
    Ok(lines.join("\n"))
}

async fn handle_create<S: KeyValueStore>(
    service: &mut AuthService<S>,
    raw: &str,
) -> Result<String, AppError> {
    let profile = parse_profile(raw)?;
    let created = service.create_user(profile).await?;
    Ok(format!(
        "User created successfully! Employee ID: {}, Password: {}",
        created.employee_id(),
        created.password
    ))
}

/// Resolves a console id (internal or employee id) to the internal id.
fn resolve_id<S: KeyValueStore>(service: &AuthService<S>, id: &str) -> String {
    service
        .find_account(id)
        .map(|a| a.id.clone())
        .unwrap_or_else(|| id.to_string())
}

async fn handle_set<S: KeyValueStore>(
    service: &mut AuthService<S>,
    id: &str,
    field: &str,
    value: &str,
) -> Result<String, AppError> {
    let changes = parse_update(field, value)?;
    let target = resolve_id(service, id);
    let account = service.update_user(&target, changes).await?;
    Ok(format!("Updated {}", describe(&account)))
}

async fn handle_delete<S: KeyValueStore>(
    service: &mut AuthService<S>,
    id: &str,
) -> Result<String, AppError> {
    let target = resolve_id(service, id);
    let removed = service.delete_user(&target).await?;
    Ok(format!("User {} deleted successfully", removed.employee_id))
}

fn handle_open<S: KeyValueStore>(service: &AuthService<S>, path: &str) -> String {
    match access::resolve(path, service.session()) {
        RouteDecision::Render(route) => format!("Showing {} ({})", route.name, route.path),
        RouteDecision::Redirect(target) => format!("Redirected to {target}"),
    }
}

fn handle_nav<S: KeyValueStore>(service: &AuthService<S>) -> Result<String, AppError> {
    let entries = access::navigation(service.session());
    if entries.is_empty() {
        return Ok("Sign in to see the navigation".into());
    }
    let lines: Vec<String> = entries
        .into_iter()
        .map(|route| format!("{:<18} {}", route.name, route.path))
        .collect();
    Ok(lines.join("\n"))
}

fn handle_stats<S: KeyValueStore>(service: &AuthService<S>) -> Result<String, AppError> {
    let stats = directory::stats(service.get_all_users()?);
    Ok(format!(
        "Total: {}  Active: {}  Management: {}",
        stats.total, stats.active, stats.management
    ))
}
