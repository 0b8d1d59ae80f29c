use std::cmp::Ordering;

/// One maximal run of digits or non-digits from a filename.
///
/// Digit runs compare by numeric value (leading zeros stripped, then longer
/// means larger), so runs of any length order correctly without overflow.
/// Text runs compare case-insensitively. A number always orders before text,
/// which keeps the comparison total when two names diverge in token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(String),
    Text(String),
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Number(a), Token::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key: the alternating (text, number, text, ...) token sequence of `s`.
pub fn natural_key(s: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let first_is_digit = rest.starts_with(|c: char| c.is_ascii_digit());
        let split = rest
            .find(|c: char| c.is_ascii_digit() != first_is_digit)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(split);
        if first_is_digit {
            let stripped = run.trim_start_matches('0');
            // All-zero runs normalize to "0" so 000 == 0.
            let digits = if stripped.is_empty() { "0" } else { stripped };
            tokens.push(Token::Number(digits.to_string()));
        } else {
            tokens.push(Token::Text(run.to_lowercase()));
        }
        rest = tail;
    }
    tokens
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}
