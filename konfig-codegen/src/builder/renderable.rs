/// A piece of generated code, independent of indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `header` line, indented body, then a closing `}`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
    },
}

impl CodeFragment {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }
}

/// AST nodes that can describe themselves as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
