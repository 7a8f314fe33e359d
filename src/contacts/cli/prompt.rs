use std::io::{self, BufRead, Write};

/// Line-oriented console: writes a prompt, blocks for one line of input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the trimmed line, or `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines_until_eof() {
        let mut console = Console::new(Cursor::new("  one \ntwo\n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), Some("one".to_string()));
        assert_eq!(console.prompt("> ").unwrap(), Some("two".to_string()));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.starts_with("> > > "));
    }

    #[test]
    fn blank_line_is_empty_not_eof() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("").unwrap(), Some(String::new()));
    }
}
