//! Statement rendering. Every statement renders with its leading
//! indent and a terminating newline; header positions (`for` init,
//! `if` init, `switch` init) re-trim the embedded statement.

use go_syntax::ast::{
    AssignStmt, BlockStmt, CaseClause, ElseBranch, Expr, ForStmt, IfStmt, RangeStmt, Stmt,
    SwitchStmt,
};

use crate::printer::Printer;

impl Printer {
    pub(crate) fn fmt_stmt(&mut self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expr(s) => {
                let expr = self.fmt_expr(&s.expr);
                format!("{}{}\n", self.indent_str(), expr)
            }
            Stmt::Assign(s) => self.fmt_assign_stmt(s),
            Stmt::Return(s) => {
                let mut out = format!("{}return", self.indent_str());
                if !s.results.is_empty() {
                    out.push(' ');
                    out.push_str(&self.fmt_expr_list(&s.results));
                }
                out.push('\n');
                out
            }
            Stmt::Branch(s) => {
                let mut out = format!("{}{}", self.indent_str(), s.tok);
                if let Some(label) = &s.label {
                    out.push(' ');
                    out.push_str(label);
                }
                out.push('\n');
                out
            }
            Stmt::Labeled(s) => format!("{}{}:\n", self.indent_str(), s.label),
            Stmt::If(s) => self.fmt_if_stmt(s),
            Stmt::For(s) => self.fmt_for_stmt(s),
            Stmt::Range(s) => self.fmt_range_stmt(s),
            Stmt::Switch(s) => self.fmt_switch_stmt(s),
            Stmt::Case(s) => self.fmt_case_clause(s),
            Stmt::Block(s) => {
                let block = self.fmt_block(s);
                format!("{}{}", self.indent_str(), block)
            }
            Stmt::Decl(s) => {
                let mut out = self.fmt_gen_decl(&s.decl);
                out.push('\n');
                out
            }
        }
    }

    /// An assignment whose left side is only blank identifiers elides
    /// the left side and the operator entirely.
    fn fmt_assign_stmt(&mut self, stmt: &AssignStmt) -> String {
        let elide = !stmt.lhs.is_empty() && stmt.lhs.iter().all(Expr::is_blank_ident);
        let rhs = self.fmt_expr_list(&stmt.rhs);

        if elide {
            return format!("{}{}\n", self.indent_str(), rhs);
        }

        let lhs = self.fmt_expr_list(&stmt.lhs);
        format!("{}{} {} {}\n", self.indent_str(), lhs, stmt.op, rhs)
    }

    fn fmt_if_stmt(&mut self, stmt: &IfStmt) -> String {
        let mut out = format!("{}if ", self.indent_str());

        if let Some(init) = &stmt.init {
            let init = self.fmt_stmt(init);
            out.push_str(init.trim());
            out.push_str("; ");
        }

        out.push_str(&self.fmt_expr(&stmt.cond));
        out.push(' ');
        out.push_str(&self.fmt_block(&stmt.body));

        if let Some(els) = &stmt.els {
            let mut trimmed = out.trim_end().to_string();
            trimmed.push_str(" else ");
            let tail = match els {
                ElseBranch::If(nested) => self.fmt_if_stmt(nested),
                ElseBranch::Block(block) => self.fmt_block(block),
            };
            trimmed.push_str(tail.trim_start());
            out = trimmed;
        }

        out
    }

    fn fmt_for_stmt(&mut self, stmt: &ForStmt) -> String {
        let mut out = format!("{}for ", self.indent_str());

        if let (Some(init), Some(cond), Some(post)) = (&stmt.init, &stmt.cond, &stmt.post) {
            let init = self.fmt_stmt(init);
            out.push_str(init.trim());
            out.push_str("; ");
            out.push_str(&self.fmt_expr(cond));
            out.push_str("; ");
            let post = self.fmt_stmt(post);
            out.push_str(post.trim());
            out.push(' ');
        } else if let Some(cond) = &stmt.cond {
            out.push_str(&self.fmt_expr(cond));
            out.push(' ');
        }

        out.push_str(&self.fmt_block(&stmt.body));
        out
    }

    fn fmt_range_stmt(&mut self, stmt: &RangeStmt) -> String {
        let mut out = format!("{}for", self.indent_str());

        if let Some(key) = &stmt.key {
            out.push(' ');
            out.push_str(&self.fmt_expr(key));
        }
        if let Some(value) = &stmt.value {
            out.push_str(", ");
            out.push_str(&self.fmt_expr(value));
        }
        if let Some(tok) = &stmt.tok {
            out.push(' ');
            out.push_str(&tok.to_string());
        }

        out.push_str(" range ");
        out.push_str(&self.fmt_expr(&stmt.x));
        out.push(' ');
        out.push_str(&self.fmt_block(&stmt.body));
        out
    }

    fn fmt_switch_stmt(&mut self, stmt: &SwitchStmt) -> String {
        let mut out = format!("{}switch ", self.indent_str());

        if let Some(init) = &stmt.init {
            let init = self.fmt_stmt(init);
            out.push_str(init.trim());
            out.push(' ');
        }
        if let Some(tag) = &stmt.tag {
            if stmt.init.is_some() {
                out = out.trim_end().to_string();
                out.push_str("; ");
            }
            out.push_str(&self.fmt_expr(tag));
            out.push(' ');
        }

        out.push_str(&self.fmt_block(&stmt.body));
        out
    }

    /// The `case`/`default` keyword outdents one level; the clause
    /// body stays at the current indent.
    fn fmt_case_clause(&mut self, clause: &CaseClause) -> String {
        let mut out = if clause.list.is_empty() {
            format!("{}default", self.outdent_str())
        } else {
            let list = self.fmt_expr_list(&clause.list);
            format!("{}case {}", self.outdent_str(), list)
        };
        out.push_str(":\n");

        for stmt in &clause.body {
            out.push_str(&self.fmt_stmt(stmt));
        }
        out
    }

    pub(crate) fn fmt_block(&mut self, block: &BlockStmt) -> String {
        let mut out = String::from("{\n");
        self.indent += 1;
        for stmt in &block.list {
            out.push_str(&self.fmt_stmt(stmt));
        }
        self.indent -= 1;
        out.push_str(&self.indent_str());
        out.push_str("}\n");
        out
    }
}
