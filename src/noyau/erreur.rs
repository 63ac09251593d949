// src/noyau/erreur.rs
//
// Erreurs du noyau (typées).
// L’UI n’en garde que le texte (Display).

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Radicande nul ou négatif : pas de décomposition sp²·a dans ce domaine.
    #[error("argument invalide : radicande {radicande} (doit être ≥ 1)")]
    ArgumentInvalide { radicande: BigInt },

    #[error("{champ} : entier attendu, reçu {texte:?}")]
    EntierInvalide { champ: &'static str, texte: String },

    #[error("Entrée vide")]
    EntreeVide,

    #[error("précision excessive : {digits} chiffres (maximum {max})")]
    PrecisionExcessive { digits: usize, max: usize },
}
