const INDENT: &str = "  ";

/// Line buffer that prefixes every line with a fixed indentation.
#[derive(Debug, Default)]
pub struct Printer {
    indent: String,
    output: String,
}

impl Printer {
    pub fn new(indent_level: usize) -> Self {
        Self {
            indent: INDENT.repeat(indent_level),
            output: String::new(),
        }
    }

    pub fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn print_ln(&mut self, line: &str) {
        self.output.push_str(&self.indent);
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// One level deeper than the printer's own indentation.
    pub fn print_indented_ln(&mut self, line: &str) {
        self.output.push_str(&self.indent);
        self.output.push_str(INDENT);
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn print_empty_ln(&mut self) {
        self.output.push('\n');
    }

    pub fn into_output(self) -> String {
        self.output
    }
}
