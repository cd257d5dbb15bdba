use core::fmt;

use super::ChainedError;

impl fmt::Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compose(false))
    }
}

impl fmt::Debug for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_error())?;
        let trace = self.location_trace();
        if !trace.is_empty() {
            f.write_str("\n")?;
            f.write_str(trace.trim_end_matches('\n'))?;
        }
        Ok(())
    }
}

impl core::error::Error for ChainedError {
    // Ancestors stay behind the redaction boundary: a generic reporter
    // walking the source chain would print opaque parent text that the
    // public composition suppresses.
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        None
    }
}
