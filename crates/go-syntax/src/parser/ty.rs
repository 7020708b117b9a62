//! Type expression parsing: named and qualified types, pointers,
//! arrays/slices, maps, function signatures, struct and interface
//! bodies, field lists.

use super::{Parser, Result};
use crate::ast::{
    ArrayType, Ellipsis, Expr, Field, FieldList, FuncType, Ident, InterfaceType, MapType,
    SelectorExpr, StarExpr, StructType,
};
use crate::syntax::TokenKind::*;

impl<'src> Parser<'src> {
    /// A type expression. Primitive type keywords are plain
    /// identifiers as far as the tree is concerned.
    pub(crate) fn parse_type(&mut self) -> Result<Expr> {
        match self.peek() {
            MUL => {
                self.bump();
                Ok(Expr::Star(StarExpr {
                    x: Box::new(self.parse_type()?),
                }))
            }
            LBRACK => self.parse_array_type(),
            KW_MAP => self.parse_map_type(),
            KW_FUNC => {
                self.bump();
                Ok(Expr::FuncType(self.parse_func_signature()?))
            }
            KW_STRUCT => Ok(Expr::StructType(self.parse_struct_type()?)),
            KW_INTERFACE => Ok(Expr::InterfaceType(self.parse_interface_type()?)),
            IDENT => {
                let ident = Ident::new(self.bump());
                // Qualified types such as `fmt.Stringer`.
                if self.at(PERIOD) && self.nth(1) == IDENT {
                    self.bump();
                    let sel = Ident::new(self.bump());
                    Ok(Expr::Selector(SelectorExpr {
                        x: Box::new(Expr::Ident(ident)),
                        sel,
                    }))
                } else {
                    Ok(Expr::Ident(ident))
                }
            }
            kind if kind.is_type_keyword() => Ok(Expr::Ident(Ident::new(self.bump()))),
            _ => self.unexpected(),
        }
    }

    /// `[len]T` or the slice form `[]T`.
    pub(crate) fn parse_array_type(&mut self) -> Result<Expr> {
        self.expect(LBRACK)?;
        let len = if self.at(RBRACK) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        self.expect(RBRACK)?;
        let elt = Box::new(self.parse_type()?);
        Ok(Expr::ArrayType(ArrayType { len, elt }))
    }

    pub(crate) fn parse_map_type(&mut self) -> Result<Expr> {
        self.expect(KW_MAP)?;
        self.expect(LBRACK)?;
        let key = Box::new(self.parse_type()?);
        self.expect(RBRACK)?;
        let value = Box::new(self.parse_type()?);
        Ok(Expr::MapType(MapType { key, value }))
    }

    /// `(params) results` — the parenthesized parameter list followed
    /// by either a parenthesized result list, a single bare result
    /// type, or nothing.
    pub(crate) fn parse_func_signature(&mut self) -> Result<FuncType> {
        self.expect(LPAREN)?;
        let params = self.parse_field_list()?;
        self.expect(RPAREN)?;

        let results = if self.at(LPAREN) {
            self.bump();
            let list = self.parse_field_list()?;
            self.expect(RPAREN)?;
            list
        } else if self.peek().starts_type() {
            FieldList::new(vec![Field {
                name: None,
                ty: self.parse_type()?,
            }])
        } else {
            FieldList::new(Vec::new())
        };

        Ok(FuncType { params, results })
    }

    /// Comma-separated fields up to the closing parenthesis, newlines
    /// permitted after commas.
    fn parse_field_list(&mut self) -> Result<FieldList> {
        let mut list = Vec::new();
        self.skip_newlines();
        while !self.at(RPAREN) {
            list.push(self.parse_field()?);
            if self.eat(COMMA) {
                self.skip_newlines();
                continue;
            }
            self.skip_newlines();
            break;
        }
        Ok(FieldList::new(list))
    }

    /// A single parameter, result, struct field, or interface method:
    /// `name T`, `name ...T`, `name(params) results`, or a bare type
    /// for unnamed and embedded fields.
    pub(crate) fn parse_field(&mut self) -> Result<Field> {
        if self.at(IDENT)
            && (self.nth(1).starts_type() || matches!(self.nth(1), ELLIPSIS | LPAREN))
        {
            let name = self.bump().to_string();
            let ty = if self.eat(ELLIPSIS) {
                Expr::Ellipsis(Ellipsis {
                    ty: Box::new(self.parse_type()?),
                })
            } else if self.at(LPAREN) {
                // Interface method shorthand: `Area() float64`.
                Expr::FuncType(self.parse_func_signature()?)
            } else {
                self.parse_type()?
            };
            return Ok(Field {
                name: Some(name),
                ty,
            });
        }

        if self.eat(ELLIPSIS) {
            return Ok(Field {
                name: None,
                ty: Expr::Ellipsis(Ellipsis {
                    ty: Box::new(self.parse_type()?),
                }),
            });
        }

        Ok(Field {
            name: None,
            ty: self.parse_type()?,
        })
    }

    pub(crate) fn parse_struct_type(&mut self) -> Result<StructType> {
        self.expect(KW_STRUCT)?;
        self.expect(LBRACE)?;
        let fields = self.parse_field_block()?;
        self.expect(RBRACE)?;
        Ok(StructType {
            fields,
            incomplete: false,
        })
    }

    pub(crate) fn parse_interface_type(&mut self) -> Result<InterfaceType> {
        self.expect(KW_INTERFACE)?;
        self.expect(LBRACE)?;
        let methods = self.parse_field_block()?;
        self.expect(RBRACE)?;
        Ok(InterfaceType {
            methods,
            incomplete: false,
        })
    }

    /// Newline- (or comma-) separated fields up to the closing brace
    /// of a struct or interface body.
    fn parse_field_block(&mut self) -> Result<FieldList> {
        let mut list = Vec::new();
        self.skip_newlines();
        while !self.at(RBRACE) {
            list.push(self.parse_field()?);
            if self.eat(NEWLINE) || self.eat(COMMA) {
                self.skip_newlines();
                continue;
            }
            break;
        }
        Ok(FieldList::new(list))
    }
}
