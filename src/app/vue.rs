// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression précédente (petite) + affichage (grand), alignés à droite
// - Tactile : pavé 5×4 de gros boutons
// - Clavier : texte tapé + Enter/Backspace, routés par la table du noyau
//
// Note :
// - Les caractères arrivent par Event::Text (pas Event::Key) : "+" n’est pas déclenché deux fois.
// - Enter/Backspace n’ont pas d’Event::Text => on les lit en Event::Key.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Action, Operateur};

const TAILLE_BOUTON: [f32; 2] = [72.0, 56.0];
const TAILLE_AFFICHAGE: f32 = 40.0;
const TAILLE_AFFICHAGE_MIN: f32 = 14.0;
/// Au-delà, la police de l’affichage rétrécit (grands résultats sans notation scientifique).
const LONGUEUR_PLEINE_TAILLE: usize = 12;

/// Pavé : libellé + action, ligne par ligne.
const PAVE: [[(&str, Action); 4]; 5] = [
    [
        ("AC", Action::Effacer),
        ("±", Action::Signe),
        ("%", Action::Pourcentage),
        ("÷", Action::Operateur(Operateur::Divise)),
    ],
    [
        ("7", Action::Chiffre('7')),
        ("8", Action::Chiffre('8')),
        ("9", Action::Chiffre('9')),
        ("×", Action::Operateur(Operateur::Fois)),
    ],
    [
        ("4", Action::Chiffre('4')),
        ("5", Action::Chiffre('5')),
        ("6", Action::Chiffre('6')),
        ("-", Action::Operateur(Operateur::Moins)),
    ],
    [
        ("1", Action::Chiffre('1')),
        ("2", Action::Chiffre('2')),
        ("3", Action::Chiffre('3')),
        ("+", Action::Operateur(Operateur::Plus)),
    ],
    [
        ("0", Action::Chiffre('0')),
        (".", Action::Point),
        ("DEL", Action::Retour),
        ("=", Action::Egal),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /// Clavier : à appeler une fois par frame, avant la vue.
    pub fn lire_clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    let mut tampon = [0u8; 4];
                    for c in texte.chars() {
                        self.touche(c.encode_utf8(&mut tampon));
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => {
                    self.touche("Enter");
                }
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => {
                    self.touche("Backspace");
                }
                _ => {}
            }
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let precedente = self.previous_expression();
        let affichage = self.display().to_owned();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne réservée même vide : l’écran ne saute pas.
                    ui.label(egui::RichText::new(precedente).monospace().weak());
                    let taille = taille_affichage(affichage.chars().count());
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(affichage).monospace().size(taille),
                        )
                        .wrap(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (libelle, action) in ligne {
                        self.bouton(ui, libelle, action);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, action: Action) {
        let texte = egui::RichText::new(libelle).size(22.0);
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte));
        if resp.clicked() {
            self.appliquer(action);
        }
    }
}

/// Taille de police de l’affichage selon sa longueur : pleine taille jusqu’à 12 caractères,
/// puis proportionnelle, bornée à TAILLE_AFFICHAGE_MIN (le reste passe à la ligne).
fn taille_affichage(longueur: usize) -> f32 {
    if longueur <= LONGUEUR_PLEINE_TAILLE {
        return TAILLE_AFFICHAGE;
    }
    let ratio = LONGUEUR_PLEINE_TAILLE as f32 / longueur as f32;
    (TAILLE_AFFICHAGE * ratio).max(TAILLE_AFFICHAGE_MIN)
}
