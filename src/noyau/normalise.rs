// src/noyau/normalise.rs
//
// Normalisation du texte brut (avant jetons)
// ------------------------------------------
// Étapes, dans cet ordre :
// 1) repli des suites de signes :  "---" -> "-", "--" -> "+", "+++" -> "+"
// 2) refus des opérateurs * / ^ collés ("1 ** 2", "3 /^ 4")
// 3) espacement : un espace exactement entre chaque unité lexicale
// 4) raccourci : si tout le texte est un seul entier signé ("- 42"), on rend directement le nombre
//
// Le scanner est explicite (classes de caractères), sans regex.

use num_bigint::BigInt;

use super::erreur::{ErreurEval, Resultat};

/// Sortie du normaliseur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Normalise {
    /// Texte espacé, prêt pour `tokenize`.
    Texte(String),
    /// Toute l’entrée était un seul entier négatif : on court-circuite le pipeline.
    Litteral(BigInt),
}

/// Vérification autonome des parenthèses, sur la ligne brute.
///
/// Refuse une `)` sans `(` ouverte, et toute `(` restée ouverte.
pub fn verifier_parentheses(s: &str) -> Resultat<()> {
    let mut profondeur: usize = 0;
    for c in s.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur = profondeur
                    .checked_sub(1)
                    .ok_or(ErreurEval::ExpressionInvalide)?;
            }
            _ => {}
        }
    }
    if profondeur == 0 {
        Ok(())
    } else {
        Err(ErreurEval::ExpressionInvalide)
    }
}

pub fn normaliser(s: &str) -> Resultat<Normalise> {
    let replie = replier_signes(s);

    if contient_multiplicatifs_colles(&replie) {
        return Err(ErreurEval::ExpressionInvalide);
    }

    let texte = espacer(&replie);

    if let Some(n) = litteral_negatif(&texte) {
        return Ok(Normalise::Litteral(n));
    }

    Ok(Normalise::Texte(texte))
}

/* ------------------------ 1) Suites de signes ------------------------ */

/// Moins d’abord (parité), plus ensuite : "+--" donne "++" puis "+".
fn replier_signes(s: &str) -> String {
    replier_suites(&replier_suites(s, '-'), '+')
}

/// Remplace chaque suite de `signe` de longueur >= 2.
/// - '+' : toujours '+'
/// - '-' : '+' si longueur paire, '-' sinon
fn replier_suites(s: &str, signe: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != signe {
            out.push(c);
            continue;
        }

        let mut n: usize = 1;
        while chars.peek() == Some(&signe) {
            chars.next();
            n += 1;
        }

        let remplace = match signe {
            '-' if n % 2 == 0 => '+',
            _ => signe,
        };
        out.push(remplace);
    }

    out
}

/* ------------------------ 2) Opérateurs multiplicatifs collés ------------------------ */

fn est_multiplicatif(c: char) -> bool {
    matches!(c, '*' | '/' | '^')
}

fn contient_multiplicatifs_colles(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars
        .windows(2)
        .any(|w| est_multiplicatif(w[0]) && est_multiplicatif(w[1]))
}

/* ------------------------ 3) Espacement ------------------------ */

/// Découpe en unités : suite de lettres, suite de chiffres, symbole isolé.
/// Tout autre caractère non blanc forme sa propre unité (rejeté plus loin).
fn espacer(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut unites: Vec<String> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        if c.is_ascii_alphabetic() {
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
        } else if c.is_ascii_digit() {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        } else {
            // ( ) * / + - ^ ou caractère inconnu : une seule position
            i += 1;
        }

        unites.push(chars[start..i].iter().collect());
    }

    unites.join(" ")
}

/* ------------------------ 4) Raccourci entier signé ------------------------ */

/// "- 42" (espaces optionnels) -> Some(-42). Rien d’autre.
fn litteral_negatif(s: &str) -> Option<BigInt> {
    let reste = s.trim().strip_prefix('-')?.trim_start();
    if reste.is_empty() || !reste.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let chiffres: String = format!("-{reste}");
    BigInt::parse_bytes(chiffres.as_bytes(), 10)
}
