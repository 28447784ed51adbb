// src/noyau/jetons.rs

use num_bigint::BigInt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigInt),

    // Variable : lettres seulement, remplacée par Num au moment de la résolution.
    Ident(String),

    Op(Op),

    LPar,
    RPar,

    // Morceau non classé ("$", "é", ...). Le tokenizer ne refuse rien :
    // c’est la conversion RPN qui le rejette.
    Inconnu(String),
}

/// Tokenize un texte déjà normalisé (unités séparées par des espaces).
///
/// - suite de chiffres   -> Num
/// - suite de lettres    -> Ident
/// - + - * / ^           -> Op
/// - ( )                 -> LPar / RPar
/// - le reste            -> Inconnu
pub fn tokenize(s: &str) -> Vec<Tok> {
    s.split_whitespace().map(classer).collect()
}

fn classer(morceau: &str) -> Tok {
    let mut chars = morceau.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        match c {
            '(' => return Tok::LPar,
            ')' => return Tok::RPar,
            _ => {}
        }
        if let Some(op) = Op::depuis_char(c) {
            return Tok::Op(op);
        }
    }

    if morceau.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(n) = BigInt::parse_bytes(morceau.as_bytes(), 10) {
            return Tok::Num(n);
        }
    }

    if morceau.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Tok::Ident(morceau.to_string());
    }

    Tok::Inconnu(morceau.to_string())
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.to_string(),
            Tok::Ident(name) => name.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Inconnu(brut) => brut.clone(),
        };
        out.push(s);
    }
    out.join(" ")
}
