use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated source text, indenting nested blocks.
///
/// ```
/// use konfig_codegen::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::kotlin();
/// builder.apply_fragment(CodeFragment::block(
///     "object AppConfig {",
///     vec![CodeFragment::line("const val enabled: Boolean = true")],
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "object AppConfig {\n    const val enabled: Boolean = true\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            buffer: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    /// Append a line at the current depth.
    pub fn push_line(&mut self, text: &str) -> &mut Self {
        self.indent.write(&mut self.buffer, self.level);
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line; blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Render every fragment of `node` at the current depth.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => {
                self.push_line(&text);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block { header, body } => {
                self.push_line(&header);
                self.level += 1;
                body.into_iter().for_each(|f| self.apply_fragment(f));
                self.level -= 1;
                self.push_line("}");
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}
