use crate::error::{ErrorContext, SysidError};

pub fn format_error_chain(error: &SysidError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}
