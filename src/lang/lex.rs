use super::{token::*, Error, LineNumber, MAX_LINE_NUMBER};

/// Tokenize a whole program. Every lexical error is collected; if any were
/// found the token stream is discarded.
pub fn lex(s: &str) -> Result<Vec<Located>, Vec<Error>> {
    let mut tokens: Vec<Located> = vec![];
    let mut errors: Vec<Error> = vec![];
    for (index, text) in s.lines().enumerate() {
        let row = index + 1;
        let mut lexer = BasicLexer::new(text, row);
        let mut line: Vec<Located> = lexer.by_ref().collect();
        errors.append(&mut lexer.errors);
        if let Some(last) = line.last() {
            let end = last.column.end;
            line.push(Located {
                token: Token::Newline,
                row,
                column: end..end,
            });
            tokens.append(&mut line);
        }
    }
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

struct BasicLexer<'a> {
    chars: Chars<'a>,
    row: usize,
    col: usize,
    start_of_line: bool,
    remark: bool,
    errors: Vec<Error>,
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Located;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.whitespace();
            let pk = *self.chars.peek()?;
            let start = self.col;
            let token = if self.remark {
                Some(self.remark())
            } else if self.start_of_line && is_basic_digit(pk) {
                self.line_number()
            } else if is_basic_digit(pk) || pk == '.' {
                self.number()
            } else if is_basic_alphabetic(pk) {
                self.alphabetic()
            } else if pk == '"' {
                self.string()
            } else {
                self.minutia()
            };
            self.start_of_line = false;
            if let Some(token) = token {
                return Some(Located {
                    token,
                    row: self.row,
                    column: start..self.col,
                });
            }
        }
    }
}

impl<'a> BasicLexer<'a> {
    fn new(s: &'a str, row: usize) -> BasicLexer<'a> {
        BasicLexer {
            chars: s.chars().peekable(),
            row,
            col: 0,
            start_of_line: true,
            remark: false,
            errors: vec![],
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn fail(&mut self, start: usize, msg: String) {
        let column = start..self.col;
        self.errors
            .push(error!(LexError, ..&column; msg).in_row(self.row));
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.bump();
        }
    }

    fn remark(&mut self) -> Token {
        let mut s = String::new();
        while let Some(ch) = self.bump() {
            s.push(ch);
        }
        self.remark = false;
        Token::Remark(s.trim_end().to_string())
    }

    fn line_number(&mut self) -> Option<Token> {
        let start = self.col;
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.bump();
        }
        match s.parse::<LineNumber>() {
            Ok(n) if n <= MAX_LINE_NUMBER => Some(Token::LineNumber(n)),
            _ => {
                self.fail(start, format!("LINE NUMBER {} TOO LARGE", s));
                None
            }
        }
    }

    fn number(&mut self) -> Option<Token> {
        let start = self.col;
        let mut s = String::new();
        let mut digits = 0;
        let mut decimal = false;
        while let Some(pk) = self.chars.peek() {
            let ch = *pk;
            if is_basic_digit(ch) {
                digits += 1;
            } else if ch == '.' && !decimal {
                decimal = true;
            } else {
                break;
            }
            s.push(ch);
            self.bump();
        }
        if digits == 0 {
            self.fail(start, "EXPECTED DIGITS".to_string());
            return None;
        }
        if let Some('E') | Some('e') = self.chars.peek() {
            let mut ahead = self.chars.clone();
            ahead.next();
            let mut exp = String::from("E");
            if let Some(sign) = ahead.peek().copied() {
                if sign == '+' || sign == '-' {
                    exp.push(sign);
                    ahead.next();
                }
            }
            if let Some(d) = ahead.peek() {
                if is_basic_digit(*d) {
                    for _ in 0..exp.len() {
                        self.bump();
                    }
                    s.push_str(&exp);
                    while let Some(pk) = self.chars.peek() {
                        if !is_basic_digit(*pk) {
                            break;
                        }
                        s.push(*pk);
                        self.bump();
                    }
                }
            }
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(Token::Literal(Literal::Number(s))),
            _ => {
                self.fail(start, format!("NUMBER TOO LARGE {}", s));
                None
            }
        }
    }

    fn string(&mut self) -> Option<Token> {
        let start = self.col;
        let mut s = String::new();
        self.bump();
        loop {
            match self.bump() {
                None => {
                    self.fail(start, "UNTERMINATED STRING".to_string());
                    return None;
                }
                Some('"') => return Some(Token::Literal(Literal::String(s))),
                Some('\\') => match self.chars.peek() {
                    Some('"') | Some('\\') => {
                        if let Some(ch) = self.bump() {
                            s.push(ch);
                        }
                    }
                    _ => s.push('\\'),
                },
                Some(ch) => s.push(ch),
            }
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut word = String::new();
        let mut ahead = self.chars.clone();
        while let Some(pk) = ahead.peek() {
            if !is_basic_alphabetic(*pk) {
                break;
            }
            word.push(pk.to_ascii_uppercase());
            ahead.next();
        }
        if word == "GO" {
            if let Some(token) = self.go(ahead) {
                return Some(token);
            }
        }
        for len in (2..=word.len()).rev() {
            if let Some(token) = Token::from_string(&word[..len]) {
                for _ in 0..len {
                    self.bump();
                }
                if let Token::Word(Word::Rem) = token {
                    self.remark = true;
                }
                return Some(token);
            }
        }
        let mut name = String::new();
        if let Some(ch) = self.bump() {
            name.push(ch.to_ascii_uppercase());
        }
        if let Some(pk) = self.chars.peek() {
            if is_basic_digit(*pk) {
                name.push(*pk);
                self.bump();
            }
        }
        if let Some('$') = self.chars.peek() {
            name.push('$');
            self.bump();
        }
        Some(Token::Ident(Ident::from_name(&name)))
    }

    // GO TO and GO SUB with a space.
    fn go(&mut self, mut ahead: Chars<'a>) -> Option<Token> {
        let mut skipped = 2;
        while let Some(pk) = ahead.peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            skipped += 1;
            ahead.next();
        }
        let mut word = String::new();
        while let Some(pk) = ahead.peek() {
            if !is_basic_alphabetic(*pk) {
                break;
            }
            word.push(pk.to_ascii_uppercase());
            ahead.next();
        }
        let token = if word.starts_with("SUB") {
            skipped += 3;
            Token::Word(Word::Gosub)
        } else if word.starts_with("TO") {
            skipped += 2;
            Token::Word(Word::Goto)
        } else {
            return None;
        };
        for _ in 0..skipped {
            self.bump();
        }
        Some(token)
    }

    fn minutia(&mut self) -> Option<Token> {
        let start = self.col;
        let ch = self.bump()?;
        if let Some(pk) = self.chars.peek() {
            let pair: String = [ch, *pk].iter().collect();
            if let Some(token) = Token::from_string(&pair) {
                self.bump();
                return Some(token);
            }
        }
        match Token::from_string(&ch.to_string()) {
            Some(token) => Some(token),
            None => {
                self.fail(start, format!("UNEXPECTED CHARACTER {:?}", ch));
                None
            }
        }
    }
}
