//! Calculatrice Z-pur — bibliothèque
//!
//! - noyau   : pipeline exact (normalise -> jetons -> résolution -> RPN -> pile)
//! - session : commandes /exit /help /print autour du noyau
//!
//! Les façades (fenêtre egui, console) vivent dans le binaire.

pub mod noyau;
pub mod session;

pub use noyau::{evaluate, ErreurEval, TableSymboles};
