//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du composeur (lignes de termes, résultats, erreur, digits, démarche)
//! et offrir des opérations simples (C/CLR/AC, ajout/retrait de ligne) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de lecture d’entiers).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes : digits ΣLocal et nombre de lignes.

/// Précision ΣLocal par défaut (lecture décimale tronquée).
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Garde-fou : nombre maximal de lignes (radicande, coefficient).
pub const LIGNES_MAX: usize = 64;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub entree: String,
    pub decompositions: String,
    pub seaux: String,
    pub note: String,
}

/// Une ligne saisie : texte brut, lu par le noyau seulement à l’évaluation.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct LigneTerme {
    pub racine: String,
    pub coeff: String,
}

#[derive(Clone, Debug)]
pub struct AppDistance {
    // --- entrée utilisateur ---
    pub lignes: Vec<LigneTerme>,

    // --- sorties ---
    pub exact: String,       // forme canonique
    pub lecture: String,     // ΣLocal (décimal tronqué)
    pub erreur: String,      // message d’erreur (lecture/construction)
    pub lecture_dispo: bool, // false si vide / erreur

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Ligne à focaliser à la prochaine frame (après ajout/retrait/C).
    pub focus_ligne: Option<usize>,
}

impl Default for AppDistance {
    fn default() -> Self {
        Self {
            lignes: vec![LigneTerme::default()],
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false,
            demarche: Demarche::default(),
            digits: DIGITS_DEFAUT,
            focus_ligne: Some(0),
        }
    }
}

impl AppDistance {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (lignes + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.clear_entree();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
    }

    /// C : une seule ligne vide (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.lignes.clear();
        self.lignes.push(LigneTerme::default());
        self.focus_ligne = Some(0);
    }

    /// Ajoute une ligne vide en fin (ignoré au-delà de LIGNES_MAX).
    pub fn ajoute_ligne(&mut self) {
        if self.lignes.len() >= LIGNES_MAX {
            return;
        }
        self.lignes.push(LigneTerme::default());
        self.focus_ligne = Some(self.lignes.len() - 1);
    }

    /// Retire la ligne `i` ; il reste toujours au moins une ligne.
    pub fn retire_ligne(&mut self, i: usize) {
        if i >= self.lignes.len() {
            return;
        }
        self.lignes.remove(i);
        if self.lignes.is_empty() {
            self.lignes.push(LigneTerme::default());
        }
        self.focus_ligne = Some(i.min(self.lignes.len() - 1));
    }

    /// Lignes au format attendu par le noyau.
    pub fn paires(&self) -> Vec<(String, String)> {
        self.lignes
            .iter()
            .map(|l| (l.racine.clone(), l.coeff.clone()))
            .collect()
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher aux lignes).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.clear_demarche();
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe ΣLocal + démarche (non fiables si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();

        self.lecture.clear();
        self.lecture_dispo = false;

        self.clear_demarche();
    }

    /// Utilitaire : déposer un résultat complet (EXACT + lecture + démarche).
    pub fn set_resultats(&mut self, exact: impl Into<String>, lecture: String, demarche: Demarche) {
        self.erreur.clear();
        self.exact = exact.into();
        self.demarche = demarche;
        self.lecture = lecture;
        self.lecture_dispo = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }
}
