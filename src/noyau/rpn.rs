// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (déjà résolue : plus d’Ident) en RPN (postfix)
//
// Règles:
// - Num : sortie directe
// - "(" : empilé ; ")" : dépile jusqu’à "(" (jetée)
// - opérateur : dépile tant que précédence(sommet) >= précédence(op), puis empile
//
// NOTE:
// - La comparaison >= vaut pour TOUS les opérateurs, "^" compris :
//   "2 ^ 3 ^ 2" = (2^3)^2 = 64. C’est le comportement attendu, pas un oubli.

use super::erreur::{ErreurEval, Resultat};
use super::jetons::{Op, Tok};

fn precedence(op: Op) -> u8 {
    match op {
        Op::Plus | Op::Minus => 1,
        Op::Star | Op::Slash => 2,
        Op::Caret => 3,
    }
}

/// Élément de la pile d’opérateurs : "(" sert de sentinelle.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Par,
    Op(Op),
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Op(+), Num(4), Op(*), Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(Pile::Par),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile épuisée = parenthèse orpheline
                loop {
                    match ops.pop() {
                        Some(Pile::Par) => break,
                        Some(Pile::Op(op)) => out.push(Tok::Op(op)),
                        None => return Err(ErreurEval::ExpressionInvalide),
                    }
                }
            }

            Tok::Op(op) => {
                while let Some(Pile::Op(top)) = ops.last().copied() {
                    if precedence(top) >= precedence(op) {
                        ops.pop();
                        out.push(Tok::Op(top));
                    } else {
                        break;
                    }
                }
                ops.push(Pile::Op(op));
            }

            // Ident non résolu ou morceau inconnu : rien à convertir
            Tok::Ident(_) | Tok::Inconnu(_) => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    // vide la pile ops (dernier empilé, premier sorti)
    while let Some(p) = ops.pop() {
        match p {
            Pile::Op(op) => out.push(Tok::Op(op)),
            Pile::Par => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    Ok(out)
}
