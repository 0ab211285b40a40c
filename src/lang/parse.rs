use super::ast::{BinaryOp, UnaryOp};
use super::{cst::*, token::*, Column, Error, LineNumber};
use std::collections::HashSet;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Parse a token stream into one program tree.
///
/// A syntax error abandons the rest of its line; parsing resumes at the next
/// line so that every bad line is reported.
pub fn parse(tokens: &[Located]) -> std::result::Result<Program, Vec<Error>> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Located>,
    peeked: Option<&'a Located>,
    col: Column,
    row: usize,
    line_number: Option<LineNumber>,
    at_newline: bool,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Located]) -> std::result::Result<Program, Vec<Error>> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            row: 1,
            line_number: None,
            at_newline: true,
        };
        let mut program = Program::default();
        let mut errors: Vec<Error> = vec![];
        let mut seen: HashSet<LineNumber> = HashSet::new();
        loop {
            match parse.peek() {
                None => break,
                Some(Token::Newline) => {
                    parse.next();
                    continue;
                }
                Some(_) => {}
            }
            parse.line_number = None;
            match parse.line() {
                Ok(line) => {
                    if seen.insert(line.number) {
                        program.lines.push(line);
                    } else {
                        let column = line.column.start..line.column.start;
                        errors.push(error!(DuplicateLine, line.number, ..&column).in_row(line.row));
                    }
                }
                Err(e) => {
                    let e = match parse.line_number {
                        Some(n) if e.line_number().is_none() => e.in_line_number(n),
                        _ => e,
                    };
                    errors.push(e.in_row(parse.row));
                    parse.skip_line();
                }
            }
        }
        if errors.is_empty() {
            Ok(program)
        } else {
            Err(errors)
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        let located = match self.peeked.take() {
            Some(located) => located,
            None => self.token_stream.next()?,
        };
        self.col = located.column.clone();
        self.row = located.row;
        self.at_newline = located.token == Token::Newline;
        Some(&located.token)
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.token_stream.next();
        }
        self.peeked.map(|located| &located.token)
    }

    fn peek_column(&mut self) -> Column {
        self.peek();
        match self.peeked {
            Some(located) => located.column.clone(),
            None => self.col.end..self.col.end,
        }
    }

    fn skip_line(&mut self) {
        while !self.at_newline {
            if self.next().is_none() {
                break;
            }
        }
    }

    fn line(&mut self) -> Result<Line> {
        let number = match self.next() {
            Some(Token::LineNumber(n)) => *n,
            _ => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED LINE NUMBER")),
        };
        self.line_number = Some(number);
        let row = self.row;
        let start = self.col.start;
        let statement = self.statement()?;
        let end = self.col.end;
        match self.next() {
            None | Some(Token::Newline) => {}
            Some(_) => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED END OF LINE")),
        }
        Ok(Line {
            number,
            row,
            column: start..end,
            statement,
        })
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.peek() {
            Some(Token::Ident(_)) => {
                let column = self.peek_column();
                Statement::r#let(self, column, None)
            }
            Some(Token::Word(word)) => {
                self.next();
                Statement::for_word(self, word)
            }
            _ => {
                self.next();
                Err(error!(SyntaxError, ..&self.column(); "EXPECTED STATEMENT"))
            }
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = this.unary()?;
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => op,
                    _ => break,
                };
                let (op_precedence, op) = match Expression::binary_op(op) {
                    Some(binary) => binary,
                    None => break,
                };
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let column = this.column();
                let rhs = parse(this, op_precedence + 1)?;
                lhs = Expression::Binary(column, op, Box::new(lhs), Box::new(rhs));
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn unary(&mut self) -> Result<Expression> {
        let op = match self.peek() {
            Some(Token::Operator(op)) => Expression::unary_op(op),
            _ => None,
        };
        match op {
            Some(op) => {
                self.next();
                let column = self.column();
                let operand = self.unary()?;
                Ok(Expression::Unary(column, op, Box::new(operand)))
            }
            None => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::LParen) => {
                let start = self.col.start;
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(Expression::Paren(start..self.col.end, Box::new(expr)))
            }
            Some(Token::Ident(ident)) => {
                let column = self.column();
                let var = self.variable(column.clone(), ident)?;
                Ok(Expression::Var(column, var))
            }
            Some(Token::Function(function)) => {
                let column = self.column();
                self.expect(Token::LParen)?;
                let arg = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(Expression::Function(column, *function, Box::new(arg)))
            }
            Some(Token::Literal(lit)) => Ok(Expression::Literal(self.column(), lit.clone())),
            _ => Err(error!(SyntaxError, ..&self.column(); "EXPECTED EXPRESSION")),
        }
    }

    fn variable(&mut self, column: Column, ident: &Ident) -> Result<Variable> {
        match self.peek() {
            Some(Token::LParen) => Ok(Variable::Array(
                column,
                ident.clone(),
                self.expression_list()?,
            )),
            _ => Ok(Variable::Unary(column, ident.clone())),
        }
    }

    fn target(&mut self) -> Result<Variable> {
        let (column, ident) = self.ident()?;
        self.variable(column, &ident)
    }

    fn target_list(&mut self) -> Result<Vec<Variable>> {
        let mut v: Vec<Variable> = vec![self.target()?];
        while let Some(Token::Comma) = self.peek() {
            self.next();
            v.push(self.target()?);
        }
        Ok(v)
    }

    fn expression_list(&mut self) -> Result<Vec<Expression>> {
        self.expect(Token::LParen)?;
        let mut v: Vec<Expression> = vec![];
        loop {
            v.push(self.expression()?);
            match self.next() {
                Some(Token::RParen) => return Ok(v),
                Some(Token::Comma) => continue,
                _ => {
                    return Err(error!(SyntaxError, ..&self.column(); "EXPECTED END OR SEPARATOR"))
                }
            }
        }
    }

    fn printer_list(&mut self) -> Result<Vec<PrintItem>> {
        let mut v: Vec<PrintItem> = vec![];
        loop {
            match self.peek() {
                None | Some(Token::Newline) => return Ok(v),
                Some(Token::Comma) => {
                    self.next();
                    v.push(PrintItem::Separator(self.column(), Separator::Comma));
                }
                Some(Token::Semicolon) => {
                    self.next();
                    v.push(PrintItem::Separator(self.column(), Separator::Semicolon));
                }
                _ => v.push(PrintItem::Expression(self.expression()?)),
            }
        }
    }

    fn data_list(&mut self) -> Result<Vec<Datum>> {
        let mut v: Vec<Datum> = vec![];
        loop {
            let minus = match self.peek() {
                Some(Token::Operator(Operator::Minus)) => {
                    self.next();
                    Some(self.column())
                }
                _ => None,
            };
            match self.next() {
                Some(Token::Literal(Literal::String(_))) if minus.is_some() => {
                    return Err(error!(SyntaxError, ..&self.column(); "EXPECTED NUMBER"));
                }
                Some(Token::Literal(literal)) => v.push(Datum {
                    column: self.column(),
                    minus,
                    literal: literal.clone(),
                }),
                _ => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED LITERAL")),
            }
            match self.peek() {
                Some(Token::Comma) => {
                    self.next();
                }
                _ => return Ok(v),
            }
        }
    }

    fn ident(&mut self) -> Result<(Column, Ident)> {
        let ident = match self.next() {
            Some(Token::Ident(i)) => i.clone(),
            _ => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED VARIABLE")),
        };
        Ok((self.column(), ident))
    }

    fn line_number_target(&mut self) -> Result<(Column, LineNumber)> {
        let token = match self.next() {
            Some(token) => token,
            None => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED LINE NUMBER")),
        };
        let column = self.column();
        match LineNumber::try_from(token) {
            Ok(n) => Ok((column, n)),
            Err(e) => Err(e.in_column(&column)),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(SyntaxError, ..&self.column();
            match token {
                Token::LineNumber(_) => "EXPECTED LINE NUMBER",
                Token::Literal(_) => "EXPECTED LITERAL",
                Token::Word(Word::Then) => "EXPECTED THEN",
                Token::Word(Word::To) => "EXPECTED TO",
                Token::Word(_) => "EXPECTED RESERVED WORD",
                Token::Function(_) => "EXPECTED FUNCTION",
                Token::Operator(Operator::Equal) => "EXPECTED =",
                Token::Operator(_) => "EXPECTED OPERATOR",
                Token::Ident(_) => "EXPECTED VARIABLE",
                Token::Remark(_) | Token::Newline => "UNEXPECTED TOKEN",
                Token::LParen => "EXPECTED LEFT PARENTHESIS",
                Token::RParen => "EXPECTED RIGHT PARENTHESIS",
                Token::Comma => "EXPECTED COMMA",
                Token::Semicolon => "EXPECTED SEMICOLON",
            }
        ))
    }
}

impl Expression {
    /// Precedence and meaning of an infix operator.
    fn binary_op(op: &Operator) -> Option<(usize, BinaryOp)> {
        match op {
            Operator::Or => Some((1, BinaryOp::Or)),
            Operator::And => Some((2, BinaryOp::And)),
            Operator::Equal => Some((3, BinaryOp::Equal)),
            Operator::NotEqual => Some((3, BinaryOp::NotEqual)),
            Operator::Less => Some((3, BinaryOp::Less)),
            Operator::LessEqual => Some((3, BinaryOp::LessEqual)),
            Operator::Greater => Some((3, BinaryOp::Greater)),
            Operator::GreaterEqual => Some((3, BinaryOp::GreaterEqual)),
            Operator::Plus => Some((4, BinaryOp::Add)),
            Operator::Minus => Some((4, BinaryOp::Subtract)),
            Operator::Multiply => Some((5, BinaryOp::Multiply)),
            Operator::Divide => Some((5, BinaryOp::Divide)),
            Operator::Caret => Some((6, BinaryOp::Power)),
            Operator::Not => None,
        }
    }

    fn unary_op(op: &Operator) -> Option<UnaryOp> {
        match op {
            Operator::Minus => Some(UnaryOp::Negate),
            Operator::Not => Some(UnaryOp::Not),
            Operator::Or
            | Operator::And
            | Operator::Equal
            | Operator::NotEqual
            | Operator::Less
            | Operator::LessEqual
            | Operator::Greater
            | Operator::GreaterEqual
            | Operator::Plus
            | Operator::Multiply
            | Operator::Divide
            | Operator::Caret => None,
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Data => Ok(Statement::Data(column, parse.data_list()?)),
            Dim => Self::r#dim(parse, column),
            End => Ok(Statement::End(column)),
            For => Self::r#for(parse, column),
            Gosub => Ok(Statement::Gosub(column, parse.line_number_target()?)),
            Goto => Ok(Statement::Goto(column, parse.line_number_target()?)),
            If => Self::r#if(parse, column),
            Input => Ok(Statement::Input(column, parse.target_list()?)),
            Let => Self::r#let(parse, column.clone(), Some(column)),
            Next => Ok(Statement::Next(column, parse.ident()?)),
            Print => Ok(Statement::Print(column, parse.printer_list()?)),
            Read => Ok(Statement::Read(column, parse.target_list()?)),
            Rem => Self::r#rem(parse, column),
            Restore => Ok(Statement::Restore(column)),
            Return => Ok(Statement::Return(column)),
            Stop => Ok(Statement::Stop(column)),
            Step | Then | To => Err(error!(SyntaxError, ..&column; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser, column: Column, keyword: Option<Column>) -> Result<Statement> {
        let var = parse.target()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, keyword, var, expr))
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let start = parse.expression()?;
        parse.expect(Token::Word(Word::To))?;
        let end = parse.expression()?;
        let step = match parse.peek() {
            Some(Token::Word(Word::Step)) => {
                parse.next();
                Some(parse.expression()?)
            }
            _ => None,
        };
        Ok(Statement::For(column, ident, start, end, step))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let predicate = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let then = match parse.peek() {
            Some(Token::Literal(Literal::Number(_))) => {
                let (col, n) = parse.line_number_target()?;
                Then::Line(col, n)
            }
            _ => Then::Statement(Box::new(parse.statement()?)),
        };
        Ok(Statement::If(column, predicate, then))
    }

    fn r#dim(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut v: Vec<Declaration> = vec![];
        loop {
            let (col, ident) = parse.ident()?;
            let sizes = parse.expression_list()?;
            v.push(Declaration {
                column: col.start..parse.column().end,
                ident,
                sizes,
            });
            match parse.peek() {
                Some(Token::Comma) => {
                    parse.next();
                }
                _ => return Ok(Statement::Dim(column, v)),
            }
        }
    }

    fn r#rem(parse: &mut Parser, column: Column) -> Result<Statement> {
        let text = match parse.peek() {
            Some(Token::Remark(s)) => s.clone(),
            _ => return Ok(Statement::Rem(column, String::new())),
        };
        parse.next();
        Ok(Statement::Rem(column, text))
    }
}
