use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::AuthService;
use crate::console::commands::CommandStatus;
use crate::console::handlers::handle_command;
use crate::console::parser::parse_command;
use crate::error::AppError;
use crate::storage::KeyValueStore;

const MAX_COMMAND_LENGTH: usize = 1024;

/// Runs the operator console until QUIT or end of input.
///
/// - Reads one command per line from `reader`.
/// - Dispatches commands using `handle_command`.
/// - Writes every response line to `writer`.
pub async fn run_console<S, R, W>(
    service: &mut AuthService<S>,
    mut reader: R,
    mut writer: W,
) -> Result<(), AppError>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let greeting = match service.current_user() {
        Some(account) => format!(
            "HR console ready. Signed in as {} ({}). Type HELP for commands.\n",
            account.employee_id, account.role
        ),
        None => "HR console ready. Type HELP for commands.\n".to_string(),
    };
    writer.write_all(greeting.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            info!("Console input closed");
            break;
        }

        if line.len() > MAX_COMMAND_LENGTH {
            writer.write_all(b"INVALID Command too long\n").await?;
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = parse_command(trimmed);
        debug!("Console command: {:?}", command.verb());

        let result = handle_command(service, &command).await;
        if let Some(msg) = result.message {
            writer.write_all(msg.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        if result.status == CommandStatus::Exit {
            info!("Operator requested to quit");
            break;
        }
    }

    writer.flush().await?;
    Ok(())
}
