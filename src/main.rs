// src/main.rs
//
// Somme de racines — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - Journalisation (natif)     : niveau lu dans SOMME_RACINES_LOG (défaut: warn)
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppDistance;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Somme de racines";

/// Variable d’environnement du niveau de journalisation.
#[cfg(not(target_arch = "wasm32"))]
const VAR_LOG: &str = "SOMME_RACINES_LOG";

/* ------------------------ Journalisation (natif) ------------------------ */

/// Niveau demandé ; `Err(texte)` si la valeur est illisible (on retombe sur WARN).
#[cfg(not(target_arch = "wasm32"))]
fn niveau_log(valeur: Option<&str>) -> Result<tracing::Level, String> {
    match valeur.map(str::trim) {
        None | Some("") => Ok(tracing::Level::WARN),
        Some(v) => v.parse::<tracing::Level>().map_err(|_| v.to_string()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::FmtSubscriber;

    let brut = std::env::var(VAR_LOG).ok();
    let (niveau, illisible) = match niveau_log(brut.as_deref()) {
        Ok(n) => (n, None),
        Err(v) => (tracing::Level::WARN, Some(v)),
    };

    let subscriber = FmtSubscriber::builder().with_max_level(niveau).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("abonné tracing non installé : {e}");
        return;
    }

    if let Some(v) = illisible {
        tracing::warn!(valeur = %v, "{VAR_LOG} illisible, niveau WARN");
    }
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 740.0])
            .with_min_inner_size([440.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppDistance>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppDistance, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
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
                Box::new(|_cc| Ok(Box::<AppDistance>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
