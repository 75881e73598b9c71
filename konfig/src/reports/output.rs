//! Where reports are rendered.

/// Line-oriented sink for reports.
///
/// Implementations only decide where a finished line goes; the layout of sections,
/// lists and dividers is shared.
pub trait Output {
    fn line(&mut self, text: &str);

    fn section(&mut self, name: &str) {
        self.line(&format!("{name}:"));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.line(&format!("  {key}: {value}"));
    }

    /// A newly created item, such as a written file.
    fn added_item(&mut self, text: &str) {
        self.line(&format!("  + {text}"));
    }

    fn divider(&mut self, label: &str) {
        self.line(&format!("── {label} ──"));
    }

    /// Multi-line text, emitted as is.
    fn preformatted(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }

    fn newline(&mut self) {
        self.line("");
    }
}

/// Something a command prints once it finishes.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout.
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Collects lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
