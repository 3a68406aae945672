use super::ast::*;

/// Renders statements as an indented tree, one node per line.
pub struct ASTPrinter {
    indent: i32,
    lines: Vec<String>,
}

impl ASTPrinter {
    pub fn new() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            lines: Vec::new(),
        }
    }

    pub fn print(&mut self, program: &Program) {
        program.statements.iter().for_each(|s| s.accept(self));
    }

    pub fn collected(&self) -> &[String] {
        &self.lines
    }

    fn write_ln(&mut self, text: &str) {
        let indent = if self.indent > 0 {
            (1..self.indent).map(|_| "|  ").collect::<String>() + "|--"
        } else {
            String::new()
        };

        self.lines.push(format!("{}{}", indent, text));
    }

    fn indent<T>(&mut self, block: T)
    where
        T: Fn(&mut ASTPrinter),
    {
        self.indent += 1;
        block(self);
        self.indent -= 1;
    }
}

impl Default for ASTPrinter {
    fn default() -> Self {
        ASTPrinter::new()
    }
}

impl StatementVisitor for ASTPrinter {
    type StatementResult = ();

    fn visit_let_stmt(&mut self, stmt: &LetStatement) {
        self.write_ln("LetStmt");
        self.indent(|printer| {
            printer.write_ln(&format!("Identifier({})", stmt.name.value));
        });
    }

    fn visit_return_stmt(&mut self, _stmt: &ReturnStatement) {
        self.write_ln("ReturnStmt");
    }
}
