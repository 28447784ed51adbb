// src/console.rs
//
// Mode console (--console) : même Session que la fenêtre, sur stdin/stdout.
// - une ligne lue = une réponse écrite (rien pour une affectation)
// - "/exit" ou fin d’entrée : "Bye!" puis sortie

use std::io::{self, BufRead, Write};

use calculatrice_zpur::noyau::Limites;
use calculatrice_zpur::session::{Reponse, Session, MESSAGE_FIN};

/// Boucle sur `entree` jusqu’à /exit ou EOF.
pub fn boucle<R: BufRead, W: Write>(entree: R, mut sortie: W, limites: Limites) -> io::Result<()> {
    let mut session = Session::new(limites);

    for ligne in entree.lines() {
        let ligne = ligne?;
        match session.traiter_ligne(&ligne) {
            Reponse::Rien => {}
            Reponse::Afficher(msg) => writeln!(sortie, "{msg}")?,
            Reponse::Quitter(msg) => {
                writeln!(sortie, "{msg}")?;
                return sortie.flush();
            }
        }
    }

    tracing::debug!("fin d’entrée sans /exit");
    writeln!(sortie, "{MESSAGE_FIN}")?;
    sortie.flush()
}

pub fn run(limites: Limites) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    boucle(stdin.lock(), stdout.lock(), limites)
}
