// SPDX: CC0-1.0

//! Recursive-descent evaluation of a single-variable expression.
//!
//! The grammar, lowest to highest precedence:
//!
//! ```text
//! expression := term (('+'|'-') term)*
//! term       := factor (('*'|'/') factor)*
//! factor     := ('+' factor) | ('-' factor) | primary ('^' exponent)*
//! primary    := '(' expression ')' | number | identifier
//! exponent   := ('+' exponent) | ('-' exponent) | primary
//! ```
//!
//! `^` chains reduce left to right, so `2^3^2` is `(2^3)^2`. Evaluation is
//! total: anything that fails to match a grammar alternative contributes
//! `0` and scanning continues, and IEEE-754 degeneracies (division by zero,
//! `log` of a negative) propagate as inf/NaN instead of failing. This keeps
//! the curve redraw robust against half-typed input.

use crate::Number;

/// Evaluates `expr` with the free variable bound to `x`. Trailing input
/// that the grammar cannot consume is ignored.
pub fn evaluate(expr: &str, x: Number) -> Number {
    Scanner::new(expr, x).expression()
}

/// Known unary function names. Anything else consumes its argument and
/// yields zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
}

impl Function {
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "sqrt" => Some(Self::Sqrt),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    pub fn apply(self, arg: Number) -> Number {
        match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Sqrt => arg.sqrt(),
            Self::Log => arg.ln(),
        }
    }
}

/// Single-character-lookahead cursor over an expression. One scanner lives
/// for exactly one evaluation; the cursor is plain local state, nothing is
/// shared between calls.
#[derive(Debug)]
struct Scanner<'src> {
    src: &'src str, // ascii
    pos: usize,
    x: Number,
}

impl<'src> Scanner<'src> {
    const fn new(src: &'src str, x: Number) -> Self {
        Self { src, pos: 0, x }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Skips spaces, then consumes `want` if it is the next character.
    fn eat(&mut self, want: u8) -> bool {
        while self.peek() == Some(b' ') {
            self.bump();
        }
        if self.peek() == Some(want) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expression(&mut self) -> Number {
        let mut val = self.term();
        loop {
            if self.eat(b'+') {
                val += self.term();
            } else if self.eat(b'-') {
                val -= self.term();
            } else {
                return val;
            }
        }
    }

    fn term(&mut self) -> Number {
        let mut val = self.factor();
        loop {
            if self.eat(b'*') {
                val *= self.factor();
            } else if self.eat(b'/') {
                val /= self.factor();
            } else {
                return val;
            }
        }
    }

    fn factor(&mut self) -> Number {
        if self.eat(b'+') {
            return self.factor();
        }
        if self.eat(b'-') {
            return -self.factor();
        }

        let mut val = self.primary();
        while self.eat(b'^') {
            val = val.powf(self.exponent());
        }
        val
    }

    /// Right operand of `^`: signs and a primary, but no further `^` chain
    /// (the chain reduces left to right in `factor`).
    fn exponent(&mut self) -> Number {
        if self.eat(b'+') {
            return self.exponent();
        }
        if self.eat(b'-') {
            return -self.exponent();
        }
        self.primary()
    }

    fn primary(&mut self) -> Number {
        if self.eat(b'(') {
            let val = self.expression();
            self.eat(b')');
            return val;
        }

        // eat() above has already skipped any spaces
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_digit() || c == b'.' => {
                while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == b'.') {
                    self.bump();
                }
                self.src[start..self.pos].parse().unwrap_or(0.0)
            }

            Some(c) if c.is_ascii_alphabetic() => {
                while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
                    self.bump();
                }
                let name = &self.src[start..self.pos];
                if name == "x" {
                    self.x
                } else {
                    // the argument is consumed either way
                    let arg = self.factor();
                    match Function::lookup(name) {
                        Some(fun) => fun.apply(arg),
                        None => 0.0,
                    }
                }
            }

            // end of input, unexpected operator, unmatched paren content
            _ => 0.0,
        }
    }
}
