//! Noyau exact : sommes de racines Σ c·√a (coefficients entiers)
//!
//! Organisation interne :
//! - carre.rs    : extraction du plus grand carré (n = sp²·a)
//! - canon.rs    : seaux canoniques (fusion algébrique, retrait des zéros)
//! - distance.rs : valeur immuable + opérations
//! - format.rs   : affichage EXACT ("-1 + 3Sqrt[2] - Sqrt[10]")
//! - lecture.rs  : ΣLocal (décimal tronqué, entiers seulement)
//! - eval.rs     : pipeline complet (lignes texte -> EXACT + ΣLocal + démarche)
//! - erreur.rs   : erreurs typées

pub mod canon;
pub mod carre;
pub mod distance;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod lecture;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use carre::extrait_facteur_carre;
pub use distance::Distance;
pub use erreur::ErreurNoyau;
pub use eval::evalue_lignes;
pub use lecture::lecture_decimale;
