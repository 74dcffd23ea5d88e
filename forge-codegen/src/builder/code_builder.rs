//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for loops over accumulated parts.
///
/// # Example (Consuming API)
///
/// ```
/// use cqlforge_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("public class Widget {")
///     .indent()
///     .line("private String id;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public class Widget {\n    private String id;\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use cqlforge_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("public void init() {")
///     .push_indent()
///     .push_line("build();")
///     .push_dedent()
///     .push_line("}");
/// let code = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Java default).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add pre-rendered lines, each at the current indentation (mutable).
    ///
    /// Empty lines stay empty rather than receiving trailing indentation.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add pre-rendered lines at the current indentation.
    pub fn lines(mut self, text: &str) -> Self {
        self.push_lines(text);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use cqlforge_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::java()
    ///     .block_with_close("public void init() {", "}", |b: CodeBuilder| {
    ///         b.line("build();")
    ///     })
    ///     .build();
    ///
    /// assert_eq!(code, "public void init() {\n    build();\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a brace-delimited block: `header {`, body, `}`.
    pub fn braced<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.block_with_close(&format!("{header} {{"), "}", f)
    }

    /// Add a line comment (`// text`).
    pub fn comment(mut self, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}
