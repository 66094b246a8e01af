//! Error reporting for the binaries

use crate::error::PrepError;

/// `Error: <message>` with the causes of non-library errors appended.
pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(prep) = err.downcast_ref::<PrepError>() {
        return format!("Error: {}", prep);
    }
    let mut message = format!("Error: {}", err);
    for cause in err.chain().skip(1) {
        message.push_str(&format!("\n  caused by: {}", cause));
    }
    message
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", format_error(err));
}
