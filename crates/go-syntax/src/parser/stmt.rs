//! Statement parsing: blocks, simple statements, and the
//! newline-sensitive `if`/`for`/`switch` heads.

use tracing::instrument;

use super::{Parser, Result};
use crate::ast::{
    AssignOp, AssignStmt, BlockStmt, BranchStmt, BranchTok, CaseClause, DeclStmt, DeclTok,
    ElseBranch, Expr, ExprStmt, ForStmt, GenDecl, Ident, IfStmt, LabeledStmt, RangeStmt, RangeTok,
    ReturnStmt, Spec, Stmt, SwitchStmt, TypeSpec, ValueSpec,
};
use crate::syntax::TokenKind::*;

impl<'src> Parser<'src> {
    /// Parse one statement including its terminator.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt> {
        match self.peek() {
            // A comment's newline is part of its token.
            COMMENT => Ok(Stmt::Expr(ExprStmt {
                expr: Expr::Comment(self.parse_comment()),
            })),
            KW_VAR | KW_CONST | KW_TYPE => {
                let stmt = self.parse_decl_stmt()?;
                self.terminator()?;
                Ok(stmt)
            }
            KW_RETURN => {
                self.bump();
                let results = if self.at(NEWLINE) || self.at(RBRACE) || self.at_eof() {
                    Vec::new()
                } else {
                    self.parse_expr_list()?
                };
                self.terminator()?;
                Ok(Stmt::Return(ReturnStmt { results }))
            }
            KW_BREAK | KW_CONTINUE | KW_FALLTHROUGH => {
                let tok = match self.peek() {
                    KW_BREAK => BranchTok::Break,
                    KW_CONTINUE => BranchTok::Continue,
                    _ => BranchTok::Fallthrough,
                };
                self.bump();
                self.terminator()?;
                Ok(Stmt::Branch(BranchStmt { tok, label: None }))
            }
            KW_GOTO => {
                self.bump();
                let label = self.expect(IDENT)?.to_string();
                self.terminator()?;
                Ok(Stmt::Branch(BranchStmt {
                    tok: BranchTok::Goto,
                    label: Some(label),
                }))
            }
            KW_IF => {
                let stmt = self.parse_if_stmt()?;
                self.terminator()?;
                Ok(Stmt::If(stmt))
            }
            KW_FOR => {
                let stmt = self.parse_for_stmt()?;
                self.terminator()?;
                Ok(stmt)
            }
            KW_SWITCH => {
                let stmt = self.parse_switch_stmt()?;
                self.terminator()?;
                Ok(Stmt::Switch(stmt))
            }
            // A free-standing label; the labeled statement is parsed
            // as its sibling.
            IDENT if self.nth(1) == COLON => {
                let label = self.bump().to_string();
                self.bump();
                self.eat(NEWLINE);
                Ok(Stmt::Labeled(LabeledStmt { label }))
            }
            _ => {
                let stmt = self.parse_simple_stmt()?;
                self.terminator()?;
                Ok(stmt)
            }
        }
    }

    /// An expression or assignment statement, without a terminator.
    /// This is what `if`/`for`/`switch` heads embed.
    pub(crate) fn parse_simple_stmt(&mut self) -> Result<Stmt> {
        let mut lhs = self.parse_expr_list()?;

        if let Some(op) = assign_op(self.peek()) {
            self.bump();
            let rhs = self.parse_expr_list()?;
            return Ok(Stmt::Assign(AssignStmt { lhs, op, rhs }));
        }

        if lhs.len() == 1 {
            Ok(Stmt::Expr(ExprStmt {
                expr: lhs.remove(0),
            }))
        } else {
            self.unexpected()
        }
    }

    pub(crate) fn parse_expr_list(&mut self) -> Result<Vec<Expr>> {
        let mut list = vec![self.parse_expr()?];
        while self.eat(COMMA) {
            self.skip_newlines();
            list.push(self.parse_expr()?);
        }
        Ok(list)
    }

    /// `var`/`const`/`type` declarations, at top level or inside a
    /// block.
    fn parse_decl_stmt(&mut self) -> Result<Stmt> {
        let tok = match self.peek() {
            KW_VAR => DeclTok::Var,
            KW_CONST => DeclTok::Const,
            _ => DeclTok::Type,
        };

        // `type Name struct { ... }` / `type Name interface { ... }`.
        if tok == DeclTok::Type
            && self.nth(1) == IDENT
            && matches!(self.nth(2), KW_STRUCT | KW_INTERFACE)
        {
            self.bump();
            let name = Ident::new(self.expect(IDENT)?);
            let ty = if self.at(KW_STRUCT) {
                Expr::StructType(self.parse_struct_type()?)
            } else {
                Expr::InterfaceType(self.parse_interface_type()?)
            };
            return Ok(Stmt::Decl(DeclStmt {
                decl: GenDecl {
                    tok,
                    specs: vec![Spec::Type(TypeSpec { name, ty })],
                },
            }));
        }

        self.bump();
        let spec = self.parse_value_spec()?;
        Ok(Stmt::Decl(DeclStmt {
            decl: GenDecl {
                tok,
                specs: vec![Spec::Value(spec)],
            },
        }))
    }

    fn parse_value_spec(&mut self) -> Result<ValueSpec> {
        let mut names = vec![self.expect(IDENT)?.to_string()];
        while self.eat(COMMA) {
            names.push(self.expect(IDENT)?.to_string());
        }

        let ty = if self.peek().starts_type() {
            Some(self.parse_type()?)
        } else {
            None
        };

        let values = if self.eat(ASSIGN) {
            self.parse_expr_list()?
        } else {
            Vec::new()
        };

        Ok(ValueSpec { names, ty, values })
    }

    #[instrument(level = "trace", skip(self))]
    fn parse_if_stmt(&mut self) -> Result<IfStmt> {
        self.expect(KW_IF)?;

        let header = self.try_parse(|p| {
            let init = p.parse_simple_stmt()?;
            p.expect(SEMICOLON)?;
            let cond = p.parse_expr()?;
            Ok((init, cond))
        });
        let (init, cond) = match header {
            Some((init, cond)) => (Some(Box::new(init)), cond),
            None => (None, self.parse_expr()?),
        };

        let body = self.parse_block()?;

        let els = if self.eat(KW_ELSE) {
            if self.at(KW_IF) {
                Some(ElseBranch::If(Box::new(self.parse_if_stmt()?)))
            } else {
                Some(ElseBranch::Block(self.parse_block()?))
            }
        } else {
            None
        };

        Ok(IfStmt {
            init,
            cond,
            body,
            els,
        })
    }

    /// All `for` forms: infinite, condition-only, three-clause, and the
    /// `range` variants.
    #[instrument(level = "trace", skip(self))]
    fn parse_for_stmt(&mut self) -> Result<Stmt> {
        self.expect(KW_FOR)?;

        if self.at(LBRACE) {
            let body = self.parse_block()?;
            return Ok(Stmt::For(ForStmt {
                init: None,
                cond: None,
                post: None,
                body,
            }));
        }

        if self.eat(KW_RANGE) {
            let x = self.parse_expr()?;
            let body = self.parse_block()?;
            return Ok(Stmt::Range(RangeStmt {
                key: None,
                value: None,
                tok: None,
                x,
                body,
            }));
        }

        if let Some((init, cond, post)) = self.try_parse(|p| {
            let init = p.parse_simple_stmt()?;
            p.expect(SEMICOLON)?;
            let cond = p.parse_expr()?;
            p.expect(SEMICOLON)?;
            let post = p.parse_simple_stmt()?;
            Ok((init, cond, post))
        }) {
            let body = self.parse_block()?;
            return Ok(Stmt::For(ForStmt {
                init: Some(Box::new(init)),
                cond: Some(cond),
                post: Some(Box::new(post)),
                body,
            }));
        }

        if let Some((key, value, tok)) = self.try_parse(|p| {
            let key = p.parse_expr()?;
            let value = if p.eat(COMMA) {
                Some(p.parse_expr()?)
            } else {
                None
            };
            let tok = match p.peek() {
                DEFINE => RangeTok::Define,
                ASSIGN => RangeTok::Assign,
                _ => return p.unexpected(),
            };
            p.bump();
            p.expect(KW_RANGE)?;
            Ok((key, value, tok))
        }) {
            let x = self.parse_expr()?;
            let body = self.parse_block()?;
            return Ok(Stmt::Range(RangeStmt {
                key: Some(key),
                value,
                tok: Some(tok),
                x,
                body,
            }));
        }

        let cond = self.parse_expr()?;
        let body = self.parse_block()?;
        Ok(Stmt::For(ForStmt {
            init: None,
            cond: Some(cond),
            post: None,
            body,
        }))
    }

    /// `switch { ... }`, `switch tag { ... }`, `switch init; tag { ... }`
    /// and the type-switch head `switch t := i.(type) { ... }`.
    #[instrument(level = "trace", skip(self))]
    fn parse_switch_stmt(&mut self) -> Result<SwitchStmt> {
        self.expect(KW_SWITCH)?;

        let (init, tag) = if self.at(LBRACE) {
            (None, None)
        } else if let Some((init, tag)) = self.try_parse(|p| {
            let init = p.parse_simple_stmt()?;
            p.expect(SEMICOLON)?;
            let tag = p.parse_expr()?;
            Ok((init, tag))
        }) {
            (Some(Box::new(init)), Some(tag))
        } else {
            // A bare expression head is the tag, an assignment head
            // (notably a type switch) is the init.
            match self.parse_simple_stmt()? {
                Stmt::Assign(assign) => (Some(Box::new(Stmt::Assign(assign))), None),
                Stmt::Expr(expr_stmt) => (None, Some(expr_stmt.expr)),
                _ => unreachable!("parse_simple_stmt returns assignments or expressions"),
            }
        };

        let body = self.parse_block()?;
        Ok(SwitchStmt { init, tag, body })
    }

    /// A braced statement list, or a braced `case`/`default` clause
    /// list when used as a switch body. Blocks may not be empty.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn parse_block(&mut self) -> Result<BlockStmt> {
        self.expect(LBRACE)?;
        self.skip_newlines();

        let mut list = Vec::new();

        if matches!(self.peek(), KW_CASE | KW_DEFAULT) {
            while !self.at(RBRACE) && !self.at_eof() {
                list.push(Stmt::Case(self.parse_case_clause()?));
            }
        } else {
            if self.at(RBRACE) {
                return self.unexpected();
            }
            loop {
                self.skip_newlines();
                if self.at(RBRACE) || self.at_eof() {
                    break;
                }
                list.push(self.parse_stmt()?);
            }
        }

        self.expect(RBRACE)?;
        Ok(BlockStmt { list })
    }

    fn parse_case_clause(&mut self) -> Result<CaseClause> {
        let list = if self.eat(KW_DEFAULT) {
            Vec::new()
        } else {
            self.expect(KW_CASE)?;
            self.parse_expr_list()?
        };
        self.expect(COLON)?;
        self.expect(NEWLINE)?;

        let mut body = Vec::new();
        loop {
            self.skip_newlines();
            if matches!(self.peek(), KW_CASE | KW_DEFAULT | RBRACE | EOF) {
                break;
            }
            body.push(self.parse_stmt()?);
        }

        Ok(CaseClause { list, body })
    }
}

fn assign_op(kind: crate::syntax::TokenKind) -> Option<AssignOp> {
    let op = match kind {
        ASSIGN => AssignOp::Assign,
        DEFINE => AssignOp::Define,
        ADD_ASSIGN => AssignOp::AddAssign,
        SUB_ASSIGN => AssignOp::SubAssign,
        MUL_ASSIGN => AssignOp::MulAssign,
        QUO_ASSIGN => AssignOp::QuoAssign,
        REM_ASSIGN => AssignOp::RemAssign,
        AND_ASSIGN => AssignOp::AndAssign,
        OR_ASSIGN => AssignOp::OrAssign,
        XOR_ASSIGN => AssignOp::XorAssign,
        AND_NOT_ASSIGN => AssignOp::AndNotAssign,
        SHL_ASSIGN => AssignOp::ShlAssign,
        SHR_ASSIGN => AssignOp::ShrAssign,
        _ => return None,
    };
    Some(op)
}
