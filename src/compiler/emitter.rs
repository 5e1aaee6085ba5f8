//! Output text accumulation
//!
//! The [`Emitter`] keeps two buffers: the header (preamble and variable
//! declarations) and the body (translated statements). [`Emitter::finalize`]
//! joins them header first. It does no validation of its own; balanced braces
//! and declare-before-use are the parser's job.

/// Append-only sink for generated C text
#[derive(Debug, Default, Clone)]
pub struct Emitter {
    header: String,
    code: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the body without a line break
    pub fn emit(&mut self, code: &str) {
        self.code.push_str(code);
    }

    /// Append to the body and end the line
    pub fn emit_line(&mut self, code: &str) {
        self.code.push_str(code);
        self.code.push('\n');
    }

    /// Append a full line to the header
    pub fn header_line(&mut self, code: &str) {
        self.header.push_str(code);
        self.header.push('\n');
    }

    /// The complete translation unit: header followed by body
    pub fn finalize(self) -> String {
        let mut out = self.header;
        out.push_str(&self.code);
        out
    }
}
