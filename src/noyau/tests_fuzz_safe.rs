//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée, exposants petits
//! - budget temps global
//! - invariant clé : jamais de panique, seulement une valeur ou une erreur du noyau
//! - une expression équilibrée sur variables liées ne donne que des erreurs de calcul attendues

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::{evaluate, evaluate_with, ErreurEval, Limites, TableSymboles};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurEval) -> bool {
    // Sur une expression bien formée, seules les fautes de calcul sont normales.
    matches!(
        e,
        ErreurEval::DivisionParZero | ErreurEval::ExposantInvalide(_)
    )
}

fn table_fuzz() -> TableSymboles {
    let mut t = TableSymboles::new();
    t.affecter("a", BigInt::from(3));
    t.affecter("b", BigInt::from(-7));
    t.affecter("zero", BigInt::from(0));
    t.affecter("big", BigInt::from(10).pow(30));
    t
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "a".to_string(),
        1 => "b".to_string(),
        2 => "zero".to_string(),
        3 => "big".to_string(),
        4 => format!("-{}", rng.pick(20)),
        _ => format!("{}", rng.pick(1000)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let op = match rng.pick(6) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        4 => "--",
        _ => {
            // exposant toujours petit : le fuzz teste la forme, pas la taille
            return format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4));
        }
    };

    format!(
        "({} {op} {})",
        gen_expr(rng, depth - 1),
        gen_expr(rng, depth - 1)
    )
}

/// Soupe de caractères : n’importe quoi, y compris des lignes absurdes.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789+-*/^() ab=$/";
    let n = 1 + rng.pick(24) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let mut t = table_fuzz();

        match evaluate(&expr, &mut t) {
            Ok(Some(_)) => seen_ok += 1,
            Ok(None) => panic!("aucune valeur: expr={expr:?}"),
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e:?}"
                );
                seen_err += 1;
            }
        }

        // la table ne bouge jamais hors affectation
        assert_eq!(t.len(), 4);
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..50 {
        let e1 = gen_expr(&mut r1, 3);
        let e2 = gen_expr(&mut r2, 3);
        assert_eq!(e1, e2);

        let mut t1 = table_fuzz();
        let mut t2 = table_fuzz();
        assert_eq!(evaluate(&e1, &mut t1), evaluate(&e2, &mut t2));
    }
}

#[test]
fn fuzz_safe_soupe_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);
    let limites = Limites {
        exposant_max: 16,
        ..Limites::default()
    };

    for _ in 0..1000 {
        budget(t0, max);

        let ligne = gen_soupe(&mut rng);
        let mut t = table_fuzz();

        // Seul compte : pas de panique. Toute issue (valeur, rien, erreur) est permise.
        let _ = evaluate_with(&ligne, &mut t, &limites);
    }
}

#[test]
fn fuzz_safe_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = vec!["1"; 5000].join(" + ");
    let mut t = TableSymboles::new();
    let v = evaluate(&expr, &mut t).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, Some(BigInt::from(5000)));
}
