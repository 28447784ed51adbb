// src/noyau/affectation.rs
//
// Affectation "nom = valeur" et lecture "nom".
// Contrat : on valide les deux côtés AVANT de toucher la table (pas d’état partiel).

use num_bigint::BigInt;

use super::erreur::{ErreurEval, Resultat};
use super::table::TableSymboles;

/// `[A-Za-z]+`
pub fn est_identifiant(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// `[+-]?[0-9]+` -> valeur exacte.
fn entier_signe(s: &str) -> Option<BigInt> {
    let (negatif, chiffres) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some(if negatif { -n } else { n })
}

/// Applique une ligne contenant '='.
///
/// - exactement un '=' (espaces autour permis)
/// - gauche : identifiant
/// - droite : identifiant (copie de sa valeur) ou entier signé
pub fn affecter(ligne: &str, table: &mut TableSymboles) -> Resultat<()> {
    let mut cotes = ligne.split('=').map(str::trim);
    let (gauche, droite) = match (cotes.next(), cotes.next(), cotes.next()) {
        (Some(g), Some(d), None) => (g, d),
        _ => return Err(ErreurEval::AffectationInvalide),
    };

    if !est_identifiant(gauche) {
        return Err(ErreurEval::AffectationInvalide);
    }

    let valeur = if est_identifiant(droite) {
        lire(droite, table)?
    } else {
        entier_signe(droite).ok_or(ErreurEval::AffectationInvalide)?
    };

    tracing::debug!(nom = gauche, %valeur, "affectation");
    table.affecter(gauche, valeur);
    Ok(())
}

/// Lecture d’une variable (copie de la valeur).
pub fn lire(nom: &str, table: &TableSymboles) -> Resultat<BigInt> {
    table
        .get(nom)
        .cloned()
        .ok_or_else(|| ErreurEval::VariableInconnue(nom.to_string()))
}
