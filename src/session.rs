//! Session ligne par ligne (commandes + noyau).
//!
//! Une `Session` possède la table des symboles et transforme chaque ligne en une
//! réponse texte. Les deux façades (fenêtre et console) s’appuient dessus.
//!
//! Contrats :
//! - une erreur ne termine jamais la session (message, puis ligne suivante)
//! - `/exit` demande l’arrêt, rien d’autre ne le fait

use crate::noyau::{evaluate_trace, DemarcheNoyau, ErreurEval, Limites, TableSymboles};

pub const MESSAGE_AIDE: &str = "The program calculates the sum of numbers";
pub const MESSAGE_FIN: &str = "Bye!";

/// Commandes reconnues (tout le reste commençant par '/' est inconnu).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Exit,
    Help,
    Print,
}

impl Commande {
    pub fn depuis(ligne: &str) -> Option<Commande> {
        match ligne {
            "/exit" => Some(Commande::Exit),
            "/help" => Some(Commande::Help),
            "/print" => Some(Commande::Print),
            _ => None,
        }
    }
}

/// Ce que la façade doit faire après une ligne.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reponse {
    /// Rien à afficher (ligne vide, affectation réussie).
    Rien,
    /// Valeur ou message (y compris les erreurs).
    Afficher(String),
    /// Afficher le message d’adieu puis s’arrêter.
    Quitter(String),
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    table: TableSymboles,
    limites: Limites,
    derniere_demarche: DemarcheNoyau,
}

impl Session {
    pub fn new(limites: Limites) -> Self {
        Self {
            table: TableSymboles::new(),
            limites,
            derniere_demarche: DemarcheNoyau::default(),
        }
    }

    pub fn table(&self) -> &TableSymboles {
        &self.table
    }

    pub fn limites(&self) -> Limites {
        self.limites
    }

    /// Démarche de la dernière évaluation réussie (vide après une erreur).
    pub fn derniere_demarche(&self) -> &DemarcheNoyau {
        &self.derniere_demarche
    }

    /// Traite une ligne brute (elle est d’abord rognée).
    pub fn traiter_ligne(&mut self, ligne: &str) -> Reponse {
        let ligne = ligne.trim();

        match Commande::depuis(ligne) {
            Some(Commande::Exit) => {
                tracing::info!("fin de session demandée");
                return Reponse::Quitter(MESSAGE_FIN.to_string());
            }
            Some(Commande::Help) => return Reponse::Afficher(MESSAGE_AIDE.to_string()),
            Some(Commande::Print) => return Reponse::Afficher(self.table.to_string()),
            None => {}
        }

        match evaluate_trace(ligne, &mut self.table, &self.limites) {
            Ok((valeur, demarche)) => {
                self.derniere_demarche = demarche;
                match valeur {
                    Some(v) => Reponse::Afficher(v.to_string()),
                    None => Reponse::Rien,
                }
            }
            Err(e) => {
                self.derniere_demarche = DemarcheNoyau::default();
                journaliser_erreur(ligne, &e);
                Reponse::Afficher(e.to_string())
            }
        }
    }
}

fn journaliser_erreur(ligne: &str, e: &ErreurEval) {
    match e {
        ErreurEval::VariableInconnue(nom) => {
            tracing::warn!(ligne, nom = nom.as_str(), "variable inconnue")
        }
        ErreurEval::CommandeInconnue(cmd) => {
            tracing::warn!(ligne, commande = cmd.as_str(), "commande inconnue")
        }
        ErreurEval::ExposantInvalide(exposant) => {
            tracing::warn!(ligne, %exposant, "exposant refusé")
        }
        autre => tracing::warn!(ligne, erreur = %autre, "ligne refusée"),
    }
}
