//! Indentation-aware text buffer for emitting TypeScript.
//!
//! ```
//! use apigen_gen::writer::CodeWriter;
//!
//! let mut w = CodeWriter::new(4);
//! w.block("export class Example", |w| {
//!     w.line("private readonly x: number = 1;");
//! });
//! assert_eq!(w.finish(), "export class Example {\n    private readonly x: number = 1;\n}\n");
//! ```

/// Accumulates generated source, prefixing each line with the current indent.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    out: String,
    indent_unit: String,
    level: usize,
}

impl CodeWriter {
    /// Creates a writer indenting with `spaces` spaces per level.
    pub fn new(spaces: usize) -> Self {
        Self {
            out: String::new(),
            indent_unit: " ".repeat(spaces),
            level: 0,
        }
    }

    /// Writes one line at the current indentation. Empty text writes a bare newline.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.level {
                self.out.push_str(&self.indent_unit);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) {
        self.out.push('\n');
    }

    /// Writes `header {`, the indented body, then `}`.
    pub fn block<F>(&mut self, header: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.level += 1;
        body(self);
        self.level -= 1;
        self.line("}");
    }

    /// Like [`CodeWriter::block`], for bodies that can fail.
    pub fn try_block<F, E>(&mut self, header: &str, body: F) -> Result<(), E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.line(&format!("{} {{", header));
        self.level += 1;
        let result = body(self);
        self.level -= 1;
        self.line("}");
        result
    }

    /// Writes a JSDoc comment. Single-line text uses the compact `/** text */` form.
    pub fn doc_comment(&mut self, text: &str) {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        match lines.as_slice() {
            [] => {}
            [single] => self.line(&format!("/** {} */", single)),
            many => {
                self.line("/**");
                for line in many {
                    if line.is_empty() {
                        self.line(" *");
                    } else {
                        self.line(&format!(" * {}", line));
                    }
                }
                self.line(" */");
            }
        }
    }

    /// Returns the indent string for one level.
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Consumes the writer and returns the accumulated text.
    pub fn finish(self) -> String {
        self.out
    }
}
