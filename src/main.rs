// src/main.rs
//
// Calculatrice Z-pur — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 ou boucle console (--console)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod console;
#[cfg(not(target_arch = "wasm32"))]
mod journal;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice Z-pur";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod options {
    use clap::Parser;

    use calculatrice_zpur::noyau::eval::{BITS_MAX_DEFAUT, EXPOSANT_MAX_DEFAUT};
    use calculatrice_zpur::noyau::Limites;

    #[derive(Parser, Debug)]
    #[command(version, about = "Calculatrice entière exacte avec variables", long_about = None)]
    pub struct Options {
        /// Lit les lignes sur stdin au lieu d’ouvrir une fenêtre
        #[arg(long, default_value_t = false)]
        pub console: bool,

        /// Filtre du journal (ex: "debug", "calculatrice_zpur=trace"). Remplace RUST_LOG.
        #[arg(long)]
        pub log: Option<String>,

        /// Plus grand exposant accepté par "^"
        #[arg(long, default_value_t = EXPOSANT_MAX_DEFAUT)]
        pub exposant_max: u32,

        /// Taille max (en bits) d’un résultat de "^"
        #[arg(long, default_value_t = BITS_MAX_DEFAUT)]
        pub bits_max: u64,
    }

    impl Options {
        pub fn limites(&self) -> Limites {
            Limites {
                exposant_max: self.exposant_max,
                bits_max: self.bits_max,
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    let opts = options::Options::parse();
    journal::init(opts.log.as_deref());

    let limites = opts.limites();
    tracing::info!(console = opts.console, exposant_max = limites.exposant_max, "démarrage");

    if opts.console {
        console::run(limites)?;
        return Ok(());
    }

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 740.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        native,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(limites)))),
    )?;

    Ok(())
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
