use tracing::{error, info, warn, debug};

use crate::bot::commands::Invocation;

/// `CMD_START: quran by amina(42) in channel 555 - 2 3 5`
pub fn log_command_start(command: &str, invocation: &Invocation, args: Option<&str>) {
    match args.filter(|a| !a.is_empty()) {
        Some(a) => info!("CMD_START: {} by {} - {}", command, invocation, a),
        None => info!("CMD_START: {} by {}", command, invocation),
    }
}

pub fn log_command_success(command: &str, invocation: &Invocation, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} by {} - {}", command, invocation, d),
        None => info!("CMD_SUCCESS: {} by {}", command, invocation),
    }
}

/// The full error chain goes here; the channel only ever sees the generic reply.
pub fn log_command_error(command: &str, invocation: &Invocation, error: &str) {
    error!("CMD_ERROR: {} by {} - {}", command, invocation, error);
}

pub fn log_validation_error(command: &str, field: &str, value: &str, error: &str, invocation: &Invocation) {
    warn!(
        "VALIDATION_ERROR: {} - {} field '{}' invalid: {} - {}",
        command, field, value, error, invocation
    );
}

/// Store reads are logged at debug level only.
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

pub fn log_database_error(operation: &str, table: &str, error: &str, details: Option<&str>) {
    match details {
        Some(d) => error!("DB_ERROR: {} on {} failed: {} - {}", operation, table, error, d),
        None => error!("DB_ERROR: {} on {} failed: {}", operation, table, error),
    }
}

pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
