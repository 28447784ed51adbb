//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la fenêtre (entrée, historique des échanges, démarche)
//! et offrir des opérations simples (C/CLR/AC, valider) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun parsing ici : chaque ligne part telle quelle dans la `Session`.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : historique borné.

use calculatrice_zpur::noyau::{DemarcheNoyau, Limites};
use calculatrice_zpur::session::{Reponse, Session};

/// Garde-fou : nombre d’échanges gardés à l’écran (les plus anciens partent).
const HISTORIQUE_MAX: usize = 500;

/// Une ligne validée et ce que la session a répondu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Echange {
    pub entree: String,
    pub sortie: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- session (table des symboles + limites) ---
    pub session: Session,

    // --- sorties ---
    pub historique: Vec<Echange>,
    pub demarche: DemarcheNoyau,

    // /exit reçu : la vue ferme la fenêtre à la prochaine frame
    pub quitter: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Limites::default())
    }
}

impl AppCalc {
    pub fn new(limites: Limites) -> Self {
        Self {
            entree: String::new(),
            session: Session::new(limites),
            historique: Vec::new(),
            demarche: DemarcheNoyau::default(),
            quitter: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + historique + variables).
    pub fn reset_total(&mut self) {
        let limites = self.session.limites();
        self.entree.clear();
        self.session = Session::new(limites);
        self.clear_historique();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer historique + démarche (les variables restent).
    pub fn clear_historique(&mut self) {
        self.historique.clear();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// Envoie l’entrée à la session et range la réponse.
    ///
    /// Une entrée vide ne laisse pas de trace dans l’historique.
    pub fn valider(&mut self) {
        let ligne = self.entree.trim().to_string();
        self.entree.clear();
        self.focus_entree = true;

        if ligne.is_empty() {
            return;
        }

        let sortie = match self.session.traiter_ligne(&ligne) {
            Reponse::Rien => None,
            Reponse::Afficher(msg) => Some(msg),
            Reponse::Quitter(msg) => {
                self.quitter = true;
                Some(msg)
            }
        };

        self.demarche = self.session.derniere_demarche().clone();
        self.pousser(Echange {
            entree: ligne,
            sortie,
        });
    }

    fn pousser(&mut self, e: Echange) {
        self.historique.push(e);
        if self.historique.len() > HISTORIQUE_MAX {
            let trop = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..trop);
        }
    }
}
