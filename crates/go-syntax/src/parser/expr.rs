//! Expression parsing: a Pratt loop over binary operators with
//! postfix call/index/slice/selector handling.
//!
//! Composite literal braces attach only to array and map type
//! expressions, which is what keeps `if x { ... }` unambiguous
//! without a lookahead flag.

use tracing::instrument;

use super::{strip_quotes, Parser, Result};
use crate::ast::{
    BasicLit, BinOp, BinaryExpr, CallExpr, CompositeLit, Expr, FuncLit, Ident, IndexExpr,
    KeyValueExpr, LitKind, ParenExpr, SelectorExpr, SliceExpr, StarExpr, TypeAssertExpr, UnOp,
    UnaryExpr,
};
use crate::syntax::{TokenKind, TokenKind::*};

impl<'src> Parser<'src> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_expr_bp(0)
    }

    #[instrument(level = "trace", skip(self))]
    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr> {
        let mut lhs = self.parse_unary()?;

        while let Some(op) = bin_op(self.peek()) {
            let (l_bp, r_bp) = op.binding_power();
            if l_bp < min_bp {
                break;
            }
            self.bump();
            let rhs = self.parse_expr_bp(r_bp)?;
            lhs = Expr::Binary(BinaryExpr {
                x: Box::new(lhs),
                op,
                y: Box::new(rhs),
            });
        }

        Ok(lhs)
    }

    /// Prefix operators bind tighter than any binary operator.
    fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.peek() {
            SUB => UnOp::Sub,
            XOR => UnOp::Xor,
            NOT => UnOp::Not,
            AND => UnOp::And,
            INC => UnOp::Inc,
            DEC => UnOp::Dec,
            MUL => {
                self.bump();
                return Ok(Expr::Star(StarExpr {
                    x: Box::new(self.parse_unary()?),
                }));
            }
            _ => return self.parse_postfix(),
        };
        self.bump();
        Ok(Expr::Unary(UnaryExpr {
            op,
            x: Box::new(self.parse_unary()?),
            right: false,
        }))
    }

    fn parse_postfix(&mut self) -> Result<Expr> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.peek() {
                LPAREN => expr = self.parse_call(expr)?,
                LBRACK => expr = self.parse_index_or_slice(expr)?,
                PERIOD => {
                    self.bump();
                    if self.eat(LPAREN) {
                        let ty = if self.eat(KW_TYPE) {
                            None
                        } else {
                            Some(Box::new(self.parse_type()?))
                        };
                        self.expect(RPAREN)?;
                        expr = Expr::TypeAssert(TypeAssertExpr {
                            x: Box::new(expr),
                            ty,
                        });
                    } else {
                        let sel = Ident::new(self.expect(IDENT)?);
                        expr = Expr::Selector(SelectorExpr {
                            x: Box::new(expr),
                            sel,
                        });
                    }
                }
                INC | DEC => {
                    let op = if self.at(INC) { UnOp::Inc } else { UnOp::Dec };
                    self.bump();
                    expr = Expr::Unary(UnaryExpr {
                        op,
                        x: Box::new(expr),
                        right: true,
                    });
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.peek() {
            IDENT => Ok(Expr::Ident(Ident::new(self.bump()))),
            LIT_INT => Ok(Expr::BasicLit(BasicLit::new(LitKind::Int, self.bump()))),
            LIT_FLOAT => Ok(Expr::BasicLit(BasicLit::new(LitKind::Float, self.bump()))),
            LIT_IMAG => Ok(Expr::BasicLit(BasicLit::new(LitKind::Imag, self.bump()))),
            LIT_STR => {
                let text = self.bump();
                Ok(Expr::BasicLit(BasicLit::new(
                    LitKind::Str,
                    strip_quotes(text),
                )))
            }
            LIT_CHAR => {
                let text = self.bump();
                Ok(Expr::BasicLit(BasicLit::new(
                    LitKind::Char,
                    strip_quotes(text),
                )))
            }
            LIT_TRUE => {
                self.bump();
                Ok(Expr::BasicLit(BasicLit {
                    kind: LitKind::True,
                    value: None,
                }))
            }
            LIT_FALSE => {
                self.bump();
                Ok(Expr::BasicLit(BasicLit {
                    kind: LitKind::False,
                    value: None,
                }))
            }
            LPAREN => {
                self.bump();
                let x = self.parse_expr()?;
                self.expect(RPAREN)?;
                Ok(Expr::Paren(ParenExpr { x: Box::new(x) }))
            }
            LBRACK => {
                let ty = self.parse_array_type()?;
                self.maybe_composite(ty)
            }
            KW_MAP => {
                let ty = self.parse_map_type()?;
                self.maybe_composite(ty)
            }
            KW_FUNC => {
                self.bump();
                let ty = self.parse_func_signature()?;
                let body = self.parse_block()?;
                Ok(Expr::FuncLit(FuncLit { ty, body }))
            }
            KW_STRUCT => Ok(Expr::StructType(self.parse_struct_type()?)),
            KW_INTERFACE => Ok(Expr::InterfaceType(self.parse_interface_type()?)),
            kind if kind.is_type_keyword() => Ok(Expr::Ident(Ident::new(self.bump()))),
            _ => self.unexpected(),
        }
    }

    /// A brace after an array or map type opens a composite literal.
    fn maybe_composite(&mut self, ty: Expr) -> Result<Expr> {
        if !self.at(LBRACE) {
            return Ok(ty);
        }

        self.bump();
        self.skip_newlines();

        let mut elts = Vec::new();
        while !self.at(RBRACE) {
            elts.push(self.parse_composite_elt()?);
            if self.eat(COMMA) {
                self.skip_newlines();
                continue;
            }
            self.skip_newlines();
            break;
        }
        self.expect(RBRACE)?;

        Ok(Expr::Composite(CompositeLit {
            ty: Box::new(ty),
            elts,
            incomplete: false,
        }))
    }

    fn parse_composite_elt(&mut self) -> Result<Expr> {
        let key_or_elt = self.parse_expr()?;
        if self.eat(COLON) {
            let value = self.parse_expr()?;
            return Ok(Expr::KeyValue(KeyValueExpr {
                key: Box::new(key_or_elt),
                value: Box::new(value),
            }));
        }
        Ok(key_or_elt)
    }

    fn parse_call(&mut self, fun: Expr) -> Result<Expr> {
        self.expect(LPAREN)?;
        self.skip_newlines();

        let mut args = Vec::new();
        let mut ellipsis = false;
        while !self.at(RPAREN) {
            args.push(self.parse_expr()?);
            if self.eat(ELLIPSIS) {
                ellipsis = true;
                self.skip_newlines();
                break;
            }
            if self.eat(COMMA) {
                self.skip_newlines();
                continue;
            }
            self.skip_newlines();
            break;
        }
        self.expect(RPAREN)?;

        Ok(Expr::Call(CallExpr {
            fun: Box::new(fun),
            args,
            ellipsis,
        }))
    }

    /// `x[i]`, `x[low:high]`, and the full three-index slice
    /// `x[low:high:max]`.
    fn parse_index_or_slice(&mut self, x: Expr) -> Result<Expr> {
        self.expect(LBRACK)?;

        if self.eat(COLON) {
            let high = self.parse_expr()?;
            self.expect(RBRACK)?;
            return Ok(Expr::Slice(SliceExpr {
                x: Box::new(x),
                low: None,
                high: Some(Box::new(high)),
                max: None,
                slice3: false,
            }));
        }

        let first = self.parse_expr()?;

        if self.eat(RBRACK) {
            return Ok(Expr::Index(IndexExpr {
                x: Box::new(x),
                index: Box::new(first),
            }));
        }

        self.expect(COLON)?;

        if self.eat(RBRACK) {
            return Ok(Expr::Slice(SliceExpr {
                x: Box::new(x),
                low: Some(Box::new(first)),
                high: None,
                max: None,
                slice3: false,
            }));
        }

        let high = self.parse_expr()?;

        if self.eat(COLON) {
            let max = self.parse_expr()?;
            self.expect(RBRACK)?;
            return Ok(Expr::Slice(SliceExpr {
                x: Box::new(x),
                low: Some(Box::new(first)),
                high: Some(Box::new(high)),
                max: Some(Box::new(max)),
                slice3: true,
            }));
        }

        self.expect(RBRACK)?;
        Ok(Expr::Slice(SliceExpr {
            x: Box::new(x),
            low: Some(Box::new(first)),
            high: Some(Box::new(high)),
            max: None,
            slice3: false,
        }))
    }
}

fn bin_op(kind: TokenKind) -> Option<BinOp> {
    let op = match kind {
        ADD => BinOp::Add,
        SUB => BinOp::Sub,
        MUL => BinOp::Mul,
        QUO => BinOp::Quo,
        REM => BinOp::Rem,
        AND => BinOp::And,
        OR => BinOp::Or,
        XOR => BinOp::Xor,
        SHL => BinOp::Shl,
        SHR => BinOp::Shr,
        AND_NOT => BinOp::AndNot,
        LAND => BinOp::Land,
        LOR => BinOp::Lor,
        ARROW => BinOp::Arrow,
        EQL => BinOp::Eql,
        NEQ => BinOp::Neq,
        LSS => BinOp::Lss,
        LEQ => BinOp::Leq,
        GTR => BinOp::Gtr,
        GEQ => BinOp::Geq,
        _ => return None,
    };
    Some(op)
}
