//! Noyau — évaluation (pipeline réel)
//!
//! ligne -> affectation | lecture | expression
//! expression : parenthèses -> normalise -> jetons -> résolution -> RPN -> pile
//!
//! Remarque : la table n’est modifiée QUE par l’affectation ; tout le reste la lit.

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::affectation::{affecter, est_identifiant, lire};
use super::erreur::{ErreurEval, Resultat};
use super::jetons::{format_tokens, tokenize, Op, Tok};
use super::normalise::{normaliser, verifier_parentheses, Normalise};
use super::resolution::resoudre;
use super::rpn::to_rpn;
use super::table::TableSymboles;

/// Borne d’exposant par défaut (anti-gel : 2^100000 reste instantané).
pub const EXPOSANT_MAX_DEFAUT: u32 = 100_000;

/// Taille max (en bits) d’un résultat de "^" (anti-gel sur les chaînes : 3^100000^100000).
pub const BITS_MAX_DEFAUT: u64 = 1 << 20;

/// Garde-fous du calcul.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub exposant_max: u32,
    pub bits_max: u64,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            exposant_max: EXPOSANT_MAX_DEFAUT,
            bits_max: BITS_MAX_DEFAUT,
        }
    }
}

/// Étapes intermédiaires (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub normalise: String,
    pub jetons: String,
    pub resolus: String,
    pub rpn: String,
    pub note: String,
}

/// API publique : évalue une ligne avec les limites par défaut.
///
/// - `Ok(Some(v))` : valeur à afficher
/// - `Ok(None)`    : affectation ou ligne vide (rien à afficher)
pub fn evaluate(ligne: &str, table: &mut TableSymboles) -> Resultat<Option<BigInt>> {
    evaluate_with(ligne, table, &Limites::default())
}

pub fn evaluate_with(
    ligne: &str,
    table: &mut TableSymboles,
    limites: &Limites,
) -> Resultat<Option<BigInt>> {
    evaluate_trace(ligne, table, limites).map(|(v, _d)| v)
}

/// Comme `evaluate_with`, en gardant la démarche.
pub fn evaluate_trace(
    ligne: &str,
    table: &mut TableSymboles,
    limites: &Limites,
) -> Resultat<(Option<BigInt>, DemarcheNoyau)> {
    let s = ligne.trim();

    if s.is_empty() {
        return Ok((None, DemarcheNoyau::default()));
    }

    if s.contains('=') {
        affecter(s, table)?;
        let d = DemarcheNoyau {
            note: "Affectation".into(),
            ..Default::default()
        };
        return Ok((None, d));
    }

    if est_identifiant(s) {
        let v = lire(s, table)?;
        let d = DemarcheNoyau {
            note: "Lecture de variable".into(),
            ..Default::default()
        };
        return Ok((Some(v), d));
    }

    // Les commandes connues sont traitées par la session avant d’arriver ici.
    if s.starts_with('/') {
        return Err(ErreurEval::CommandeInconnue(s.to_string()));
    }

    verifier_parentheses(s)?;

    let (v, d) = eval_expression(s, table, limites)?;
    Ok((Some(v), d))
}

/// Pipeline expression (table en lecture seule).
fn eval_expression(
    s: &str,
    table: &TableSymboles,
    limites: &Limites,
) -> Resultat<(BigInt, DemarcheNoyau)> {
    // 1) Normalisation (+ raccourci entier signé)
    let texte = match normaliser(s)? {
        Normalise::Litteral(n) => {
            let d = DemarcheNoyau {
                normalise: n.to_string(),
                note: "Entier signé seul : pipeline court-circuité.".into(),
                ..Default::default()
            };
            return Ok((n, d));
        }
        Normalise::Texte(t) => t,
    };
    tracing::debug!(normalise = %texte, "normalisation");

    // 2) Jetons
    let jetons = tokenize(&texte);
    let jetons_txt = format_tokens(&jetons);

    // 3) Variables + signes unaires
    let resolus = resoudre(jetons, table)?;
    let resolus_txt = format_tokens(&resolus);

    // 4) RPN
    let rpn = to_rpn(&resolus)?;
    let rpn_txt = format_tokens(&rpn);
    tracing::debug!(rpn = %rpn_txt, "conversion postfixe");

    // 5) Pile
    let v = eval_rpn(&rpn, limites)?;

    let d = DemarcheNoyau {
        normalise: texte,
        jetons: jetons_txt,
        resolus: resolus_txt,
        rpn: rpn_txt,
        note: "Pipeline: normalise → jetons → résolution → RPN → pile.".into(),
    };

    Ok((v, d))
}

/// Évalue une RPN sur une pile d’entiers exacts.
///
/// Une RPN mal formée (pile vide, valeurs en trop) donne `ExpressionInvalide`.
pub fn eval_rpn(rpn: &[Tok], limites: &Limites) -> Resultat<BigInt> {
    let mut st: Vec<BigInt> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(n) => st.push(n),

            Tok::Op(op) => {
                let second = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let first = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(appliquer(op, first, second, limites)?);
            }

            Tok::Ident(_) | Tok::LPar | Tok::RPar | Tok::Inconnu(_) => {
                return Err(ErreurEval::ExpressionInvalide)
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}

/// `first OP second` (ordre important pour - / ^).
fn appliquer(op: Op, first: BigInt, second: BigInt, limites: &Limites) -> Resultat<BigInt> {
    match op {
        Op::Plus => Ok(first + second),
        Op::Minus => Ok(first - second),
        Op::Star => Ok(first * second),
        Op::Slash => {
            if second.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            // BigInt : troncature vers zéro (-7 / 2 = -3)
            Ok(first / second)
        }
        Op::Caret => puissance(first, second, limites),
    }
}

/// base ^ exposant, exposant entier >= 0 et <= limites.exposant_max.
///
/// 0, 1 et -1 acceptent n’importe quel exposant >= 0 (résultat connu sans calcul).
/// Ailleurs, |base|^n occupe au moins (bits(base) - 1) * n bits : si ce minimum
/// dépasse `limites.bits_max`, l’exposant est refusé avant tout calcul.
fn puissance(base: BigInt, exposant: BigInt, limites: &Limites) -> Resultat<BigInt> {
    if exposant.is_negative() {
        return Err(ErreurEval::ExposantInvalide(exposant));
    }

    if base.is_zero() {
        return Ok(if exposant.is_zero() {
            BigInt::one()
        } else {
            BigInt::zero()
        });
    }
    if base.is_one() {
        return Ok(base);
    }
    if base == BigInt::from(-1) {
        let pair = (&exposant % BigInt::from(2)).is_zero();
        return Ok(if pair { BigInt::one() } else { base });
    }

    let n = match exposant.to_u32() {
        Some(n) if n <= limites.exposant_max => n,
        _ => return Err(ErreurEval::ExposantInvalide(exposant)),
    };

    let bits = (base.bits() - 1).saturating_mul(u64::from(n));
    if n > 1 && bits > limites.bits_max {
        tracing::debug!(bits, bits_max = limites.bits_max, "puissance refusée (résultat trop grand)");
        return Err(ErreurEval::ExposantInvalide(exposant));
    }

    Ok(base.pow(n))
}
