//! Error handling and exit codes.

use strassen_core::constants::exit_codes;
use strassen_core::StrassenError;

/// Map a core error to its process exit code.
pub fn handle_error(err: &StrassenError) -> i32 {
    match err {
        StrassenError::InvalidConfig(_) => exit_codes::ERROR_CONFIG,
        StrassenError::Mismatch { .. } | StrassenError::CountMismatch { .. } => {
            exit_codes::ERROR_MISMATCH
        }
        StrassenError::NotSquare { .. }
        | StrassenError::ShapeMismatch { .. }
        | StrassenError::Empty
        | StrassenError::UnreachableBase { .. }
        | StrassenError::PaddingTooSmall { .. }
        | StrassenError::BlockTooLarge { .. }
        | StrassenError::Shape(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<StrassenError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
