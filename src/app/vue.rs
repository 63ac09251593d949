// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppDistance (etat.rs) pour natif + wasm
// - Une ligne par terme : radicande + coefficient (texte brut, lu par le noyau)
// - Clavier : Enter évalue (quand un champ a le focus)
// - Tactile : gros boutons, focus redonné après ajout/retrait
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::{AppDistance, Demarche, DIGITS_MAX};

impl AppDistance {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Somme de racines");
                ui.add_space(6.0);

                self.ui_lignes(ui);

                ui.add_space(8.0);
                self.ui_actions(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_lignes(&mut self, ui: &mut egui::Ui) {
        ui.label("Termes (coefficient × Sqrt[radicande]) :");

        let focus = self.focus_ligne.take();
        let mut a_retirer: Option<usize> = None;
        let mut evaluer = false;

        egui::Grid::new("grille_termes")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, ligne) in self.lignes.iter_mut().enumerate() {
                    let coeff = ui.add(
                        egui::TextEdit::singleline(&mut ligne.coeff)
                            .desired_width(110.0)
                            .hint_text("coefficient")
                            .id_salt(("coeff", i))
                            .code_editor(),
                    );

                    ui.monospace("Sqrt[");

                    let racine = ui.add(
                        egui::TextEdit::singleline(&mut ligne.racine)
                            .desired_width(110.0)
                            .hint_text("radicande")
                            .id_salt(("racine", i))
                            .code_editor(),
                    );

                    ui.monospace("]");

                    if focus == Some(i) {
                        coeff.request_focus();
                    }

                    let enter = ui.input(|inp| inp.key_pressed(egui::Key::Enter));
                    if enter && (coeff.lost_focus() || racine.lost_focus()) {
                        evaluer = true;
                    }

                    let retire = ui
                        .add_sized([30.0, 24.0], egui::Button::new("✕"))
                        .on_hover_text("Retire ce terme");
                    if retire.clicked() {
                        a_retirer = Some(i);
                    }

                    ui.end_row();
                }
            });

        if let Some(i) = a_retirer {
            self.retire_ligne(i);
        }
        if evaluer {
            self.eval_via_noyau();
        }
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton_action(ui, "+ terme", "Ajoute une ligne", Action::AjouteLigne);

            ui.separator();

            // Contrat: C = lignes seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Une seule ligne vide", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("ΣLocal :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 2);

        ui.add_space(6.0);

        ui.label("ΣLocal :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "socal_out", &self.lecture, 2);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Entrée", "demarche_entree", &self.demarche.entree);
                Self::champ_demarche(
                    ui,
                    "Décompositions",
                    "demarche_decompositions",
                    &self.demarche.decompositions,
                );
                Self::champ_demarche(ui, "Seaux", "demarche_seaux", &self.demarche.seaux);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
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
            .add_sized([64.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::AjouteLigne => self.ajoute_ligne(),
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    /// Évalue les lignes via le noyau, puis dépose EXACT/ΣLocal/Démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match somme_racines::noyau::evalue_lignes(&self.paires(), self.digits) {
            Ok((exact, lecture, d_noyau)) => {
                let d_ui = Demarche {
                    entree: d_noyau.entree,
                    decompositions: d_noyau.decompositions,
                    seaux: d_noyau.seaux,
                    note: d_noyau.note,
                };
                self.set_resultats(exact, lecture, d_ui);
            }
            Err(e) => {
                tracing::info!(erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    AjouteLigne,
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
