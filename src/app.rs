// src/app.rs
//
// Calculatrice Z-pur — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ a le focus).
// - /exit : on ferme la fenêtre à la frame suivante (sans effet sur le web).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        if self.quitter {
            tracing::info!("fermeture de la fenêtre");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
