//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! But : figer les contrats visibles depuis la session.
//! - précédence + associativité (gauche PARTOUT, "^" compris)
//! - parité des signes
//! - affectations / lectures (idempotence, copie)
//! - erreurs : chaque faute donne son erreur, sans toucher la table
//! - entiers exacts (pas de débordement natif)

use num_bigint::BigInt;

use super::{evaluate, ErreurEval, TableSymboles};

fn eval_ok(table: &mut TableSymboles, expr: &str) -> Option<BigInt> {
    evaluate(expr, table).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: i64) {
    let mut t = TableSymboles::new();
    assert_eq!(
        eval_ok(&mut t, expr),
        Some(BigInt::from(attendu)),
        "expr={expr:?}"
    );
}

fn assert_err(expr: &str, attendu: ErreurEval) {
    let mut t = TableSymboles::new();
    assert_eq!(evaluate(expr, &mut t), Err(attendu), "expr={expr:?}");
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence() {
    assert_val("3 + 4 * 2", 11);
    assert_val("(3 + 4) * 2", 14);
    assert_val("2 * 3 ^ 2", 18);
    assert_val("8 / 2 * 3", 12);
    assert_val("1 - 2 - 3", -4);
}

#[test]
fn sci_puissance_associative_a_gauche() {
    // (2^3)^2 = 64, et non 2^(3^2) = 512
    assert_val("2 ^ 3 ^ 2", 64);
    assert_val("2^(3^2)", 512);
}

#[test]
fn sci_espaces_indifferents() {
    assert_val("3+4*2", 11);
    assert_val("   3   +4 *   2 ", 11);
    assert_val("((((7))))", 7);
}

/* ------------------------ Signes ------------------------ */

#[test]
fn sci_parite_des_signes() {
    assert_val("--5", 5);
    assert_val("---5", -5);
    assert_val("----5", 5);
    assert_val("3 --- 2", 1);
    assert_val("3 ++++ 2", 5);
    assert_val("8 -- -2", 6);
}

#[test]
fn sci_moins_unaire() {
    assert_val("-5 + 3", -2);
    assert_val("3 * -5", -15);
    assert_val("-(2 + 3) * 2", -10);
    assert_val("2 * (-3)", -6);
    assert_val("-2 ^ 2", 4);
}

#[test]
fn sci_moins_devant_groupe() {
    // "-( … )" est un seul opérande, quel que soit l’opérateur qui précède
    assert_val("8 / -(2)", -4);
    assert_val("8 / (-2)", -4);
    assert_val("12 / -(3)", -4);
    assert_val("2 ^ -(1 - 2)", 2);
    assert_val("2 ^ (0 - (1 - 2))", 2);
    assert_val("2 * -(3) ^ 2", 18);
    assert_val("-(1 + 2) / -(3)", 1);
    assert_val("-(-(5))", 5);
    assert_val("10 - -(4)", 14);
}

#[test]
fn sci_moins_unaire_lie_avant_puissance() {
    // Convention unique : le "-" unaire porte sur l’opérande, "^" vient après.
    assert_val("-2 ^ 2", 4);
    assert_val("-(2) ^ 2", 4);
    assert_val("-(2 + 3) ^ 2", 25);
    assert_val("-2 ^ 3", -8);
    assert_val("-(2) ^ 3", -8);
    // pour l’opposé d’une puissance : l’écrire
    assert_val("-(2 ^ 2)", -4);
    assert_val("0 - 2 ^ 2", -4);
}

/* ------------------------ Variables ------------------------ */

#[test]
fn sci_idempotence_lecture() {
    let mut t = TableSymboles::new();
    assert_eq!(eval_ok(&mut t, "x = 42"), None);
    for _ in 0..3 {
        assert_eq!(eval_ok(&mut t, "x"), Some(BigInt::from(42)));
    }
    assert_eq!(eval_ok(&mut t, "x = -1"), None);
    assert_eq!(eval_ok(&mut t, "x"), Some(BigInt::from(-1)));
}

#[test]
fn sci_copie_par_valeur() {
    let mut t = TableSymboles::new();
    eval_ok(&mut t, "a = 5");
    eval_ok(&mut t, "b = a");
    assert_eq!(eval_ok(&mut t, "b"), Some(BigInt::from(5)));

    // b garde sa valeur quand a change
    eval_ok(&mut t, "a = 6");
    assert_eq!(eval_ok(&mut t, "b"), Some(BigInt::from(5)));
}

#[test]
fn sci_variables_dans_expression() {
    let mut t = TableSymboles::new();
    eval_ok(&mut t, "a = 4");
    eval_ok(&mut t, "b = 5");
    eval_ok(&mut t, "c = 6");
    assert_eq!(
        eval_ok(&mut t, "a*2+b*3+c*(2+3)"),
        Some(BigInt::from(53))
    );
    assert_eq!(eval_ok(&mut t, "-a + b"), Some(BigInt::from(1)));
    assert_eq!(eval_ok(&mut t, "a--b"), Some(BigInt::from(9)));
}

#[test]
fn sci_variable_inconnue() {
    assert_err("c", ErreurEval::VariableInconnue("c".into()));
    assert_err("1 + zz", ErreurEval::VariableInconnue("zz".into()));
    assert_err("a = zz", ErreurEval::VariableInconnue("zz".into()));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_expressions_invalides() {
    assert_err("(1 + 2", ErreurEval::ExpressionInvalide);
    assert_err("1 + 2)", ErreurEval::ExpressionInvalide);
    assert_err(")(", ErreurEval::ExpressionInvalide);
    assert_err("1 ** 2", ErreurEval::ExpressionInvalide);
    assert_err("1 */ 2", ErreurEval::ExpressionInvalide);
    assert_err("2 ^^ 2", ErreurEval::ExpressionInvalide);
    assert_err("1 $ 2", ErreurEval::ExpressionInvalide);
}

#[test]
fn sci_affectations_invalides() {
    assert_err("a b = 5", ErreurEval::AffectationInvalide);
    assert_err("a = 1 = 2", ErreurEval::AffectationInvalide);
    assert_err("a2 = 5", ErreurEval::AffectationInvalide);
    assert_err("a = 7a", ErreurEval::AffectationInvalide);
}

#[test]
fn sci_echec_ne_modifie_pas_la_table() {
    let mut t = TableSymboles::new();
    eval_ok(&mut t, "a = 1");

    assert!(evaluate("a = b", &mut t).is_err());
    assert!(evaluate("a = 2 = 3", &mut t).is_err());
    assert!(evaluate("a + (", &mut t).is_err());

    assert_eq!(eval_ok(&mut t, "a"), Some(BigInt::from(1)));
    assert_eq!(t.len(), 1);
}

/* ------------------------ Entiers exacts ------------------------ */

#[test]
fn sci_grands_entiers() {
    let mut t = TableSymboles::new();
    let v = eval_ok(&mut t, "2 ^ 100").unwrap_or_default();
    assert_eq!(v.to_string(), "1267650600228229401496703205376");

    eval_ok(&mut t, "g = 99999999999999999999999999999");
    let v = eval_ok(&mut t, "g * g + 1").unwrap_or_default();
    assert_eq!(
        v.to_string(),
        "9999999999999999999999999999800000000000000000000000000002"
    );
}

#[test]
fn sci_litteral_negatif_seul() {
    let mut t = TableSymboles::new();
    let v = eval_ok(&mut t, " -  123456789012345678901234567890 ");
    assert_eq!(
        v.map(|n| n.to_string()),
        Some("-123456789012345678901234567890".to_string())
    );
}
