//! Core utilities shared by the output modes

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Adapts the minus pager to `std::io::Write`
///
/// Output written here is buffered by the pager and shown once
/// `minus::page_all` runs.
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "l/    r/")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Page only an interactive stdout, and never when `NO_PAGER` is set
pub fn should_page() -> bool {
    std::env::var_os("NO_PAGER").is_none() && io::stdout().is_terminal()
}

/// Colors stay on only for an interactive stdout without `NO_COLOR`
pub fn should_color(requested: bool) -> bool {
    requested && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}
