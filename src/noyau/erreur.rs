// src/noyau/erreur.rs

use num_bigint::BigInt;
use thiserror::Error;

/// Erreurs du noyau (une variante par type de faute).
///
/// Les messages affichés sont volontairement courts et stables :
/// la session les montre tels quels, puis passe à la ligne suivante.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Parenthèses déséquilibrées, opérateurs `* / ^` collés, forme postfixée mal formée.
    #[error("Invalid expression")]
    ExpressionInvalide,

    /// Forme `nom = valeur` incorrecte (côté gauche/droit, ou plusieurs `=`).
    #[error("Invalid assignment")]
    AffectationInvalide,

    /// Nom sans liaison dans la table.
    #[error("Unknown variable")]
    VariableInconnue(String),

    /// Ligne commençant par `/` hors des commandes connues.
    #[error("Unknown command")]
    CommandeInconnue(String),

    #[error("Division by zero")]
    DivisionParZero,

    /// Exposant négatif ou au-delà de la borne configurée.
    #[error("Invalid exponent")]
    ExposantInvalide(BigInt),
}

pub type Resultat<T> = Result<T, ErreurEval>;
