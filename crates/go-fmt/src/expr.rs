//! Expression and type rendering. One arm per AST variant; the match
//! is exhaustive, so a missing renderer cannot compile.

use go_syntax::ast::{
    BasicLit, CallExpr, CompositeLit, Expr, Field, FieldList, FuncType, InterfaceType, LitKind,
    SliceExpr, StructType,
};

use crate::printer::{Printer, INDENT};
use crate::util::escape_quotes;

impl Printer {
    pub(crate) fn fmt_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Ident(ident) => ident.name.clone(),
            Expr::BasicLit(lit) => self.fmt_basic_lit(lit),
            Expr::Binary(binary) => {
                let x = self.fmt_expr(&binary.x);
                let y = self.fmt_expr(&binary.y);
                format!("{} {} {}", x, binary.op, y)
            }
            Expr::Unary(unary) => {
                let x = self.fmt_expr(&unary.x);
                if unary.right {
                    format!("{}{}", x, unary.op)
                } else {
                    format!("{}{}", unary.op, x)
                }
            }
            Expr::Paren(paren) => format!("({})", self.fmt_expr(&paren.x)),
            Expr::Selector(selector) => {
                let x = self.fmt_expr(&selector.x);
                format!("{}.{}", x, selector.sel.name)
            }
            Expr::Index(index) => {
                let x = self.fmt_expr(&index.x);
                let idx = self.fmt_expr(&index.index);
                format!("{}[{}]", x, idx)
            }
            Expr::Slice(slice) => self.fmt_slice_expr(slice),
            Expr::Call(call) => self.fmt_call_expr(call),
            Expr::Star(star) => format!("*{}", self.fmt_expr(&star.x)),
            Expr::TypeAssert(assert) => {
                let x = self.fmt_expr(&assert.x);
                let ty = match &assert.ty {
                    Some(ty) => self.fmt_expr(ty),
                    None => "type".to_string(),
                };
                format!("{}.({})", x, ty)
            }
            Expr::Composite(composite) => self.fmt_composite_lit(composite),
            Expr::KeyValue(kv) => {
                let key = self.fmt_expr(&kv.key);
                let value = self.fmt_expr(&kv.value);
                format!("{}: {}", key, value)
            }
            Expr::FuncLit(func) => {
                let ty = self.fmt_func_type(&func.ty);
                let body = self.fmt_block(&func.body);
                format!("func{} {}", ty, body.trim_end())
            }
            Expr::Ellipsis(ellipsis) => format!("...{}", self.fmt_expr(&ellipsis.ty)),
            Expr::FuncType(func) => format!("func{}", self.fmt_func_type(func)),
            Expr::ArrayType(array) => {
                let len = match &array.len {
                    Some(len) => self.fmt_expr(len),
                    None => String::new(),
                };
                let elt = self.fmt_expr(&array.elt);
                format!("[{}]{}", len, elt)
            }
            Expr::MapType(map) => {
                let key = self.fmt_expr(&map.key);
                let value = self.fmt_expr(&map.value);
                format!("map[{}]{}", key, value)
            }
            Expr::StructType(st) => self.fmt_struct_type(st),
            Expr::InterfaceType(it) => self.fmt_interface_type(it),
            Expr::Comment(comment) => format!("// {}", comment.text),
        }
    }

    pub(crate) fn fmt_expr_list(&mut self, exprs: &[Expr]) -> String {
        let mut parts = Vec::with_capacity(exprs.len());
        for expr in exprs {
            parts.push(self.fmt_expr(expr));
        }
        parts.join(", ")
    }

    pub(crate) fn fmt_basic_lit(&mut self, lit: &BasicLit) -> String {
        let value = lit.value.as_deref().unwrap_or("");
        match lit.kind {
            LitKind::Str => format!("\"{}\"", escape_quotes(value)),
            LitKind::Char => format!("'{}'", value),
            LitKind::True => "true".to_string(),
            LitKind::False => "false".to_string(),
            LitKind::Int | LitKind::Float | LitKind::Imag => value.to_string(),
        }
    }

    fn fmt_slice_expr(&mut self, slice: &SliceExpr) -> String {
        let x = self.fmt_expr(&slice.x);
        let low = slice
            .low
            .as_deref()
            .map_or_else(String::new, |e| self.fmt_expr(e));
        let high = slice
            .high
            .as_deref()
            .map_or_else(String::new, |e| self.fmt_expr(e));

        let mut out = format!("{}[{}:{}", x, low, high);
        if slice.slice3 {
            out.push(':');
            if let Some(max) = &slice.max {
                out.push_str(&self.fmt_expr(max));
            }
        }
        out.push(']');
        out
    }

    fn fmt_call_expr(&mut self, call: &CallExpr) -> String {
        let fun = self.fmt_expr(&call.fun);
        let args = self.fmt_expr_list(&call.args);
        let spread = if call.ellipsis && !call.args.is_empty() {
            "..."
        } else {
            ""
        };
        format!("{}({}{})", fun, args, spread)
    }

    /// Empty composites render `T{}`; otherwise each element sits on
    /// its own indented line with a trailing comma.
    fn fmt_composite_lit(&mut self, composite: &CompositeLit) -> String {
        let ty = self.fmt_expr(&composite.ty);

        if composite.elts.is_empty() {
            return format!("{}{{}}", ty);
        }

        let mut out = format!("{}{{\n", ty);
        self.indent += 1;
        for elt in &composite.elts {
            let elt = self.fmt_expr(elt);
            out.push_str(&self.indent_str());
            out.push_str(&elt);
            out.push_str(",\n");
        }
        self.indent -= 1;
        out.push_str(&self.indent_str());
        out.push('}');
        out
    }

    /// The signature part of a function type, without the `func`
    /// keyword: `(params)`, then results — parenthesized only when
    /// there is more than one.
    pub(crate) fn fmt_func_type(&mut self, func: &FuncType) -> String {
        let params = self.fmt_field_list(&func.params, ", ", "");
        let mut out = format!("({})", params);

        if !func.results.is_empty() {
            out.push(' ');
            let parenthesized = func.results.list.len() > 1;
            if parenthesized {
                out.push('(');
            }
            out.push_str(&self.fmt_field_list(&func.results, ", ", ""));
            if parenthesized {
                out.push(')');
            }
        }
        out
    }

    pub(crate) fn fmt_field_list(
        &mut self,
        fields: &FieldList,
        separator: &str,
        line_prefix: &str,
    ) -> String {
        let mut parts = Vec::with_capacity(fields.list.len());
        for field in &fields.list {
            let field = self.fmt_field(field);
            parts.push(format!("{}{}", line_prefix, field));
        }
        parts.join(separator)
    }

    fn fmt_field(&mut self, field: &Field) -> String {
        match &field.name {
            None => match &field.ty {
                Expr::FuncType(func) => format!("func{}", self.fmt_func_type(func)),
                ty => self.fmt_expr(ty),
            },
            // A named function-typed field keeps the method shorthand:
            // `Area() float64` rather than `Area func() float64`.
            Some(name) => match &field.ty {
                Expr::FuncType(func) => format!("{}{}", name, self.fmt_func_type(func)),
                ty => {
                    let ty = self.fmt_expr(ty);
                    format!("{} {}", name, ty)
                }
            },
        }
    }

    fn fmt_struct_type(&mut self, st: &StructType) -> String {
        let field_indent = INDENT.repeat(self.indent + 1);
        let fields = self.fmt_field_list(&st.fields, "\n", &field_indent);

        let mut out = String::from("struct {\n");
        out.push_str(&fields);
        out.push('\n');
        out.push_str(&self.indent_str());
        out.push('}');
        out
    }

    fn fmt_interface_type(&mut self, it: &InterfaceType) -> String {
        if it.methods.is_empty() {
            return "interface{}".to_string();
        }

        let method_indent = INDENT.repeat(self.indent + 1);
        let methods = self.fmt_field_list(&it.methods, "\n", &method_indent);

        let mut out = String::from("interface {\n");
        out.push_str(&methods);
        out.push('\n');
        out.push_str(&self.indent_str());
        out.push('}');
        out
    }
}
