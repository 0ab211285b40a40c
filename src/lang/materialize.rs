use super::ast::*;
use super::cst;
use super::token::Literal as Lit;

/// Turn a parse tree into the AST.
///
/// Columns are dropped, parentheses vanish into the tree shape, numeric
/// spellings become numbers and lines come out in ascending order.
pub fn materialize(tree: &cst::Program) -> ProgramNode {
    let mut lines: Vec<LineNode> = tree
        .lines
        .iter()
        .map(|line| LineNode {
            line_number: line.number,
            statement: statement(&line.statement),
        })
        .collect();
    lines.sort_by_key(|line| line.line_number);
    ProgramNode { lines }
}

fn number(s: &str) -> f64 {
    // The lexer rejects any spelling that is not a finite f64.
    s.parse::<f64>().unwrap_or(0.0)
}

fn statement(statement: &cst::Statement) -> StatementNode {
    use cst::Statement as S;
    match statement {
        S::Data(_, data) => StatementNode::Data {
            values: data.iter().map(datum).collect(),
        },
        S::Dim(_, decls) => StatementNode::Dim {
            arrays: decls
                .iter()
                .map(|decl| ArrayDecl {
                    name: decl.ident.clone(),
                    dimensions: decl.sizes.iter().map(expression).collect(),
                })
                .collect(),
        },
        S::End(_) => StatementNode::End,
        S::For(_, (_, ident), start, end, step) => StatementNode::For {
            variable: ident.clone(),
            start: expression(start),
            end: expression(end),
            step: step.as_ref().map(expression),
        },
        S::Gosub(_, (_, line)) => StatementNode::Gosub { line: *line },
        S::Goto(_, (_, line)) => StatementNode::Goto { line: *line },
        S::If(_, predicate, then) => StatementNode::If {
            condition: expression(predicate),
            then: Box::new(match then {
                cst::Then::Line(_, line) => StatementNode::Goto { line: *line },
                cst::Then::Statement(st) => self::statement(st),
            }),
        },
        S::Input(_, vars) => StatementNode::Input {
            targets: vars.iter().map(variable).collect(),
        },
        S::Let(_, _, var, expr) => StatementNode::Let {
            target: variable(var),
            value: expression(expr),
        },
        S::Next(_, (_, ident)) => StatementNode::Next {
            variable: ident.clone(),
        },
        S::Print(_, items) => StatementNode::Print {
            items: items
                .iter()
                .map(|item| match item {
                    cst::PrintItem::Separator(_, cst::Separator::Comma) => PrintItem::Comma,
                    cst::PrintItem::Separator(_, cst::Separator::Semicolon) => {
                        PrintItem::Semicolon
                    }
                    cst::PrintItem::Expression(expr) => PrintItem::Expression(expression(expr)),
                })
                .collect(),
        },
        S::Read(_, vars) => StatementNode::Read {
            targets: vars.iter().map(variable).collect(),
        },
        S::Rem(_, text) => StatementNode::Rem {
            comment: text.clone(),
        },
        S::Restore(_) => StatementNode::Restore,
        S::Return(_) => StatementNode::Return,
        S::Stop(_) => StatementNode::Stop,
    }
}

fn datum(datum: &cst::Datum) -> Literal {
    match &datum.literal {
        Lit::Number(s) if datum.minus.is_some() => Literal::Number(-number(s)),
        Lit::Number(s) => Literal::Number(number(s)),
        Lit::String(s) => Literal::String(s.clone()),
    }
}

fn variable(var: &cst::Variable) -> Variable {
    match var {
        cst::Variable::Unary(_, ident) => Variable::Scalar(ident.clone()),
        cst::Variable::Array(_, ident, indices) => {
            Variable::Array(ident.clone(), indices.iter().map(expression).collect())
        }
    }
}

fn expression(expr: &cst::Expression) -> ExpressionNode {
    use cst::Expression as E;
    match expr {
        E::Literal(_, Lit::Number(s)) => ExpressionNode::Number(number(s)),
        E::Literal(_, Lit::String(s)) => ExpressionNode::String(s.clone()),
        E::Var(_, cst::Variable::Unary(_, ident)) => ExpressionNode::Variable(ident.clone()),
        E::Var(_, cst::Variable::Array(_, ident, indices)) => {
            ExpressionNode::Array(ident.clone(), indices.iter().map(expression).collect())
        }
        E::Function(_, function, arg) => {
            ExpressionNode::Function(*function, Box::new(expression(arg)))
        }
        E::Paren(_, inner) => expression(inner),
        E::Unary(_, op, operand) => ExpressionNode::Unary(*op, Box::new(expression(operand))),
        E::Binary(_, op, lhs, rhs) => ExpressionNode::Binary(
            *op,
            Box::new(expression(lhs)),
            Box::new(expression(rhs)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::super::{lex, parse, Ident};
    use super::*;

    fn program(s: &str) -> ProgramNode {
        materialize(&parse(&lex(s).unwrap()).unwrap())
    }

    fn plain(s: &str) -> Ident {
        Ident::Plain(s.to_string())
    }

    #[test]
    fn test_lines_are_sorted() {
        let p = program("30 END\n10 PRINT\n20 REM HI\n");
        let numbers: Vec<_> = p.lines.iter().map(|l| l.line_number).collect();
        assert_eq!(numbers, vec![10, 20, 30]);
        assert_eq!(
            p.lines[1].statement,
            StatementNode::Rem {
                comment: "HI".to_string()
            }
        );
    }

    #[test]
    fn test_paren_folds_away() {
        let p = program("10 LET X = (1 + 2) * 3");
        assert_eq!(
            p.lines[0].statement,
            StatementNode::Let {
                target: Variable::Scalar(plain("X")),
                value: ExpressionNode::Binary(
                    BinaryOp::Multiply,
                    Box::new(ExpressionNode::Binary(
                        BinaryOp::Add,
                        Box::new(ExpressionNode::Number(1.0)),
                        Box::new(ExpressionNode::Number(2.0)),
                    )),
                    Box::new(ExpressionNode::Number(3.0)),
                ),
            }
        );
    }

    #[test]
    fn test_then_line_becomes_goto() {
        let p = program("10 IF A <> 0 THEN 50");
        match &p.lines[0].statement {
            StatementNode::If { then, .. } => {
                assert_eq!(**then, StatementNode::Goto { line: 50 })
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_data_values() {
        let p = program("10 DATA 1.5, -2, \"HI\", 1E3");
        assert_eq!(
            p.lines[0].statement,
            StatementNode::Data {
                values: vec![
                    Literal::Number(1.5),
                    Literal::Number(-2.0),
                    Literal::String("HI".to_string()),
                    Literal::Number(1000.0),
                ]
            }
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let p = program("10 PRINT \"A\";");
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"line_number\":10"));
        let back: ProgramNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
