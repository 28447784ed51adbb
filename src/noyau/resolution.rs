// src/noyau/resolution.rs
//
// Résolution des jetons avant RPN
// -------------------------------
// 1) Ident(name) -> Num(valeur) via la table (lecture seule)
// 2) signes unaires : un + / - en position unaire (début, après un opérateur, après "(")
//    - devant un nombre : replié dans le nombre ("3 * - 5" -> 3, *, -5)
//    - "-" devant "(" : groupe fermé "( -1 * ( … ) )", un seul opérande pour
//      l’opérateur qui précède ("8 / -(2)" -> 8 / ( -1 * ( 2 ) ))
//    - "+" devant "(" : disparaît
//    - suite de signes unaires ("- - 5") : parité, comme le normaliseur

use num_bigint::BigInt;

use super::erreur::{ErreurEval, Resultat};
use super::jetons::{Op, Tok};
use super::table::TableSymboles;

pub fn resoudre(jetons: Vec<Tok>, table: &TableSymboles) -> Resultat<Vec<Tok>> {
    let valeurs = jetons
        .into_iter()
        .map(|t| match t {
            Tok::Ident(name) => match table.get(&name) {
                Some(v) => Ok(Tok::Num(v.clone())),
                None => Err(ErreurEval::VariableInconnue(name)),
            },
            autre => Ok(autre),
        })
        .collect::<Resultat<Vec<Tok>>>()?;

    Ok(replier_signes_unaires(valeurs))
}

fn est_signe(t: &Tok) -> bool {
    matches!(t, Tok::Op(Op::Plus | Op::Minus))
}

fn replier_signes_unaires(jetons: Vec<Tok>) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(jetons.len());
    let mut iter = jetons.into_iter().peekable();

    // profondeur des "(" d’origine + profondeurs des groupes "-( … )" à refermer deux fois
    let mut profondeur = 0usize;
    let mut fermetures: Vec<usize> = Vec::new();

    while let Some(tok) = iter.next() {
        let unaire = matches!(out.last(), None | Some(Tok::Op(_)) | Some(Tok::LPar));
        if !(unaire && est_signe(&tok)) {
            match tok {
                Tok::LPar => profondeur += 1,
                Tok::RPar => {
                    out.push(Tok::RPar);
                    if fermetures.last() == Some(&profondeur) {
                        fermetures.pop();
                        out.push(Tok::RPar);
                    }
                    profondeur = profondeur.saturating_sub(1);
                    continue;
                }
                _ => {}
            }
            out.push(tok);
            continue;
        }

        let mut negatif = tok == Tok::Op(Op::Minus);
        while let Some(suivant) = iter.next_if(est_signe) {
            if suivant == Tok::Op(Op::Minus) {
                negatif = !negatif;
            }
        }

        if let Some(Tok::Num(n)) = iter.next_if(|t| matches!(t, Tok::Num(_))) {
            out.push(Tok::Num(if negatif { -n } else { n }));
        } else if iter.peek() == Some(&Tok::LPar) {
            if negatif {
                out.push(Tok::LPar);
                out.push(Tok::Num(BigInt::from(-1)));
                out.push(Tok::Op(Op::Star));
                fermetures.push(profondeur + 1);
            }
        } else {
            // signe orphelin ("3 * -", "( - )") : laissé tel quel, la RPN le refusera
            out.push(Tok::Op(if negatif { Op::Minus } else { Op::Plus }));
        }
    }

    out
}
