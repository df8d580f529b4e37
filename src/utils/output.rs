use crate::core::CommandOutput;
use crate::utils::error::Result;
use std::io::Write;

/// Sends the command's result where it belongs: documents to `out`,
/// notices to stderr.
pub fn render<W: Write>(output: &CommandOutput, out: &mut W) -> Result<()> {
    match output {
        CommandOutput::Json(document) => {
            writeln!(out, "{}", document)?;
            out.flush()?;
            Ok(())
        }
        CommandOutput::Notice(message) => {
            tracing::warn!("{}", message);
            eprintln!("{}", message);
            Ok(())
        }
        CommandOutput::Empty => Ok(()),
    }
}
