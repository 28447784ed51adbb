//! Noyau exact Z-pur
//!
//! Organisation interne :
//! - erreur.rs      : enum fermée des erreurs (une par faute)
//! - table.rs       : table des symboles (nom -> entier exact)
//! - affectation.rs : "nom = valeur" + lecture "nom"
//! - normalise.rs   : parenthèses, suites de signes, espacement
//! - jetons.rs      : tokenisation
//! - resolution.rs  : variables -> nombres, signes unaires
//! - rpn.rs         : shunting-yard
//! - eval.rs        : pile RPN + pipeline complet

pub mod affectation;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod normalise;
pub mod resolution;
pub mod rpn;
pub mod table;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluate, evaluate_trace, evaluate_with, DemarcheNoyau, Limites};
pub use table::TableSymboles;
