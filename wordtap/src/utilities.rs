use std::io::{self, Write};

pub const PROMPT: &str = ">> ";

pub fn prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

pub fn is_quit_command(line: &str) -> bool {
    matches!(line, ":q" | ":quit" | ":exit")
}
