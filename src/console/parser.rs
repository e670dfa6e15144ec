//! Command parser
//!
//! Turns a raw console line into a [`Command`], and the argument payloads of
//! CREATE and SET into service inputs.

use super::commands::{CREATE_USAGE, Command, SET_USAGE};
use crate::auth::{AccountUpdate, EmergencyContact, NewAccount, Role};
use crate::directory::ALL_ROLES;
use crate::error::ConsoleError;

fn optional(arg: &str) -> Option<String> {
    (!arg.is_empty()).then(|| arg.to_string())
}

/// Splits a FILTER argument into the role name and the search text.
///
/// Role names may contain spaces ("Vice President"), so the longest known
/// name (or "all") at the start of `arg` wins. Anything else falls back to
/// the first word and is rejected later as an unknown role.
fn split_role(arg: &str) -> (&str, &str) {
    let known = Role::ALL
        .iter()
        .map(|role| role.as_str())
        .chain(std::iter::once(ALL_ROLES))
        .filter(|name| {
            arg.get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name))
                && arg[name.len()..]
                    .chars()
                    .next()
                    .is_none_or(char::is_whitespace)
        })
        .max_by_key(|name| name.len());

    match known {
        Some(name) => (&arg[..name.len()], arg[name.len()..].trim()),
        None => {
            let mut rest = arg.splitn(2, char::is_whitespace);
            let role = rest.next().unwrap_or("");
            (role, rest.next().unwrap_or("").trim())
        }
    }
}

/// Parses a raw console line. Verbs are case-insensitive.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "LOGIN" => {
            let mut words = arg.split_whitespace();
            match (words.next(), words.next(), words.next()) {
                (Some(employee_id), Some(password), None) => Command::Login {
                    employee_id: employee_id.to_string(),
                    password: password.to_string(),
                },
                _ => Command::Unknown(trimmed.to_string()),
            }
        }
        "LOGOUT" => Command::Logout,
        "WHOAMI" => Command::WhoAmI,
        "USERS" | "LIST" => Command::Users(optional(arg)),
        "FILTER" if !arg.is_empty() => {
            let (role, search) = split_role(arg);
            Command::Filter {
                role: role.to_string(),
                search: optional(search),
            }
        }
        "CREATE" if !arg.is_empty() => Command::Create(arg.to_string()),
        "SET" => {
            let mut rest = arg.splitn(3, char::is_whitespace);
            match (rest.next(), rest.next(), rest.next().map(str::trim)) {
                (Some(id), Some(field), Some(value)) if !id.is_empty() && !value.is_empty() => {
                    Command::Set {
                        id: id.to_string(),
                        field: field.to_ascii_lowercase(),
                        value: value.to_string(),
                    }
                }
                _ => Command::Unknown(trimmed.to_string()),
            }
        }
        "DELETE" | "DEL" if !arg.is_empty() => Command::Delete(arg.to_string()),
        "OPEN" | "GO" if !arg.is_empty() => Command::Open(arg.to_string()),
        "NAV" => Command::Nav,
        "STATS" => Command::Stats,
        "HELP" | "?" => Command::Help,
        "QUIT" | "EXIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// Splits the CREATE payload into a provisioning profile.
pub fn parse_profile(raw: &str) -> Result<NewAccount, ConsoleError> {
    let fields: Vec<&str> = raw.split('|').map(str::trim).collect();
    let [name, role, department, email, phone, address, employment, ec_name, ec_rel, ec_phone, ec_address] =
        fields.as_slice()
    else {
        return Err(ConsoleError::Usage(CREATE_USAGE));
    };

    Ok(NewAccount {
        name: name.to_string(),
        role: role.parse()?,
        department: department.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        employment_type: employment.parse()?,
        emergency_contact: EmergencyContact {
            name: ec_name.to_string(),
            relationship: ec_rel.to_string(),
            phone: ec_phone.to_string(),
            address: ec_address.to_string(),
        },
    })
}

/// Builds a single-field update from a SET command.
pub fn parse_update(field: &str, value: &str) -> Result<AccountUpdate, ConsoleError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConsoleError::Usage(SET_USAGE));
    }

    let mut update = AccountUpdate::default();
    match field {
        "name" => update.name = Some(value.to_string()),
        "role" => update.role = Some(value.parse()?),
        "department" | "dept" => update.department = Some(value.to_string()),
        "email" => update.email = Some(value.to_string()),
        "phone" => update.phone = Some(value.to_string()),
        "address" => update.address = Some(value.to_string()),
        "employment" | "employmenttype" => update.employment_type = Some(value.parse()?),
        "status" => update.status = Some(value.parse()?),
        other => return Err(ConsoleError::UnknownField(other.to_string())),
    }
    Ok(update)
}
