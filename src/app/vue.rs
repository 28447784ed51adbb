// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter valide la ligne (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Historique : plus récent en haut
// - Pavé : insère le texte tel quel (le noyau s’occupe des espaces)
//
// Note :
// - Backspace clavier : laissé au TextEdit (pas de double effacement)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Z-pur");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_variables(ui);
                self.ui_demarche(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: a = 5, a * (2 + 3) ^ 2, /print, /help")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter valide (seulement si le champ est focus) ---
        // Un singleline perd le focus sur Enter : on teste aussi lost_focus().
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.valider();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = historique ; AC = tout (variables comprises)
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface l’historique et la démarche",
                Action::ClearHistorique,
            );
            self.bouton_action(
                ui,
                "AC",
                "Remise à zéro totale (variables comprises)",
                Action::ResetTotal,
            );

            ui.separator();

            self.bouton_action(ui, "/print", "Affiche les variables", Action::Commande("/print"));
            self.bouton_action(ui, "/help", "Aide", Action::Commande("/help"));
        });

        ui.add_space(8.0);

        // Touches rapides : le noyau normalise les espaces, on insère donc le texte brut.
        ui.horizontal_wrapped(|ui| {
            for t in ["(", ")", "+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, t);
            }

            ui.separator();

            // Variables (optionnel, mais super utile sur mobile)
            for t in ["x", "y", "="] {
                self.bouton_insert(ui, t);
            }

            ui.add_space(10.0);

            let ok = ui.add_sized([64.0, 32.0], egui::Button::new("↵"));
            if ok.clicked() {
                self.valider();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        const RANGEES: [[&str; 3]; 4] = [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", "", ""]];

        egui::Grid::new("pave_numerique_zpur")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, rangee) in RANGEES.iter().enumerate() {
                    for chiffre in rangee {
                        if chiffre.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, chiffre);
                        }
                    }
                    if i == 0 {
                        self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                    }
                    ui.end_row();
                }
            });
    }

    /// DEL du pavé : dernier caractère non blanc.
    fn backspace_entree(&mut self) {
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.entree.pop();
    }

    fn ui_variables(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Variables")
            .default_open(true)
            .show(ui, |ui| {
                let table = self.session.table();
                if table.is_empty() {
                    ui.monospace("aucune");
                    return;
                }
                egui::Grid::new("variables_zpur")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for (nom, valeur) in table.iter() {
                            ui.monospace(nom);
                            ui.monospace(valeur.to_string());
                            ui.end_row();
                        }
                    });
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisé", "demarche_normalise", &self.demarche.normalise);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Résolus", "demarche_resolus", &self.demarche.resolus);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        ui.label("Historique :");

        if self.historique.is_empty() {
            ui.monospace("(vide)");
            return;
        }

        for (i, e) in self.historique.iter().enumerate().rev() {
            ui.push_id(i, |ui| {
                ui.monospace(format!("> {}", e.entree));
                if let Some(sortie) = &e.sortie {
                    Self::champ_monospace(ui, "sortie", sortie, 1);
                }
            });
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        // On garde un cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearHistorique => self.clear_historique(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
                Action::Commande(cmd) => {
                    self.entree = cmd.to_string();
                    self.valider();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str) {
        if ui.add_sized([46.0, 28.0], egui::Button::new(texte)).clicked() {
            self.entree.push_str(texte);
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearHistorique,
    ResetTotal,
    Backspace,
    Commande(&'static str),
}
