//! Read-only AST traversal in source order.
//!
//! Implement [`Visitor`] and override the hooks you care about; each
//! default forwards to the matching `walk_*` function, which descends
//! into child nodes. Call `walk_*` from an override to keep
//! descending below the node you intercepted.

use crate::ast::{Decl, ElseBranch, Expr, Field, FieldList, FuncType, GenDecl, IfStmt, Node, Spec, Stmt};

pub trait Visitor {
    fn visit_decl(&mut self, decl: &Decl) {
        walk_decl(self, decl);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_field(&mut self, field: &Field) {
        walk_field(self, field);
    }
}

pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
    match node {
        Node::File(file) => {
            for decl in &file.decls {
                visitor.visit_decl(decl);
            }
        }
        Node::Decl(decl) => visitor.visit_decl(decl),
        Node::Seq(decls) => {
            for decl in decls {
                visitor.visit_decl(decl);
            }
        }
    }
}

pub fn walk_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &Decl) {
    match decl {
        Decl::Gen(gen) => walk_gen_decl(visitor, gen),
        Decl::Func(func) => {
            if let Some(recv) = &func.recv {
                walk_field_list(visitor, recv);
            }
            walk_func_type(visitor, &func.ty);
            for stmt in &func.body.list {
                visitor.visit_stmt(stmt);
            }
        }
        Decl::Comment(_) => {}
        Decl::Stmt(stmt) => visitor.visit_stmt(stmt),
    }
}

pub fn walk_gen_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &GenDecl) {
    for spec in &decl.specs {
        match spec {
            Spec::Import(_) => {}
            Spec::Value(value) => {
                if let Some(ty) = &value.ty {
                    visitor.visit_expr(ty);
                }
                for expr in &value.values {
                    visitor.visit_expr(expr);
                }
            }
            Spec::Type(ty) => visitor.visit_expr(&ty.ty),
        }
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Expr(s) => visitor.visit_expr(&s.expr),
        Stmt::Assign(s) => {
            for expr in &s.lhs {
                visitor.visit_expr(expr);
            }
            for expr in &s.rhs {
                visitor.visit_expr(expr);
            }
        }
        Stmt::Return(s) => {
            for expr in &s.results {
                visitor.visit_expr(expr);
            }
        }
        Stmt::Branch(_) | Stmt::Labeled(_) => {}
        Stmt::If(s) => walk_if_stmt(visitor, s),
        Stmt::For(s) => {
            if let Some(init) = &s.init {
                visitor.visit_stmt(init);
            }
            if let Some(cond) = &s.cond {
                visitor.visit_expr(cond);
            }
            if let Some(post) = &s.post {
                visitor.visit_stmt(post);
            }
            for stmt in &s.body.list {
                visitor.visit_stmt(stmt);
            }
        }
        Stmt::Range(s) => {
            if let Some(key) = &s.key {
                visitor.visit_expr(key);
            }
            if let Some(value) = &s.value {
                visitor.visit_expr(value);
            }
            visitor.visit_expr(&s.x);
            for stmt in &s.body.list {
                visitor.visit_stmt(stmt);
            }
        }
        Stmt::Switch(s) => {
            if let Some(init) = &s.init {
                visitor.visit_stmt(init);
            }
            if let Some(tag) = &s.tag {
                visitor.visit_expr(tag);
            }
            for stmt in &s.body.list {
                visitor.visit_stmt(stmt);
            }
        }
        Stmt::Case(s) => {
            for expr in &s.list {
                visitor.visit_expr(expr);
            }
            for stmt in &s.body {
                visitor.visit_stmt(stmt);
            }
        }
        Stmt::Block(s) => {
            for stmt in &s.list {
                visitor.visit_stmt(stmt);
            }
        }
        Stmt::Decl(s) => walk_gen_decl(visitor, &s.decl),
    }
}

pub fn walk_if_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &IfStmt) {
    if let Some(init) = &stmt.init {
        visitor.visit_stmt(init);
    }
    visitor.visit_expr(&stmt.cond);
    for inner in &stmt.body.list {
        visitor.visit_stmt(inner);
    }
    match &stmt.els {
        Some(ElseBranch::If(nested)) => walk_if_stmt(visitor, nested),
        Some(ElseBranch::Block(block)) => {
            for inner in &block.list {
                visitor.visit_stmt(inner);
            }
        }
        None => {}
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Ident(_) | Expr::BasicLit(_) | Expr::Comment(_) => {}
        Expr::Binary(e) => {
            visitor.visit_expr(&e.x);
            visitor.visit_expr(&e.y);
        }
        Expr::Unary(e) => visitor.visit_expr(&e.x),
        Expr::Paren(e) => visitor.visit_expr(&e.x),
        Expr::Selector(e) => visitor.visit_expr(&e.x),
        Expr::Index(e) => {
            visitor.visit_expr(&e.x);
            visitor.visit_expr(&e.index);
        }
        Expr::Slice(e) => {
            visitor.visit_expr(&e.x);
            if let Some(low) = &e.low {
                visitor.visit_expr(low);
            }
            if let Some(high) = &e.high {
                visitor.visit_expr(high);
            }
            if let Some(max) = &e.max {
                visitor.visit_expr(max);
            }
        }
        Expr::Call(e) => {
            visitor.visit_expr(&e.fun);
            for arg in &e.args {
                visitor.visit_expr(arg);
            }
        }
        Expr::Star(e) => visitor.visit_expr(&e.x),
        Expr::TypeAssert(e) => {
            visitor.visit_expr(&e.x);
            if let Some(ty) = &e.ty {
                visitor.visit_expr(ty);
            }
        }
        Expr::Composite(e) => {
            visitor.visit_expr(&e.ty);
            for elt in &e.elts {
                visitor.visit_expr(elt);
            }
        }
        Expr::KeyValue(e) => {
            visitor.visit_expr(&e.key);
            visitor.visit_expr(&e.value);
        }
        Expr::FuncLit(e) => {
            walk_func_type(visitor, &e.ty);
            for stmt in &e.body.list {
                visitor.visit_stmt(stmt);
            }
        }
        Expr::Ellipsis(e) => visitor.visit_expr(&e.ty),
        Expr::FuncType(e) => walk_func_type(visitor, e),
        Expr::ArrayType(e) => {
            if let Some(len) = &e.len {
                visitor.visit_expr(len);
            }
            visitor.visit_expr(&e.elt);
        }
        Expr::MapType(e) => {
            visitor.visit_expr(&e.key);
            visitor.visit_expr(&e.value);
        }
        Expr::StructType(e) => walk_field_list(visitor, &e.fields),
        Expr::InterfaceType(e) => walk_field_list(visitor, &e.methods),
    }
}

pub fn walk_func_type<V: Visitor + ?Sized>(visitor: &mut V, func: &FuncType) {
    walk_field_list(visitor, &func.params);
    walk_field_list(visitor, &func.results);
}

pub fn walk_field_list<V: Visitor + ?Sized>(visitor: &mut V, fields: &FieldList) {
    for field in &fields.list {
        visitor.visit_field(field);
    }
}

pub fn walk_field<V: Visitor + ?Sized>(visitor: &mut V, field: &Field) {
    visitor.visit_expr(&field.ty);
}
