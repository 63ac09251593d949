//! Sommes de racines carrées exactes (Σ c·√a, c entier) et leur forme canonique.
//!
//! ```
//! use somme_racines::Distance;
//!
//! let d = Distance::depuis_termes([(1, -1), (2, 3), (10, -1), (17, 2)]).unwrap();
//! assert_eq!(d.to_string(), "-1 + 3Sqrt[2] - Sqrt[10] + 2Sqrt[17]");
//! ```

pub mod noyau;

pub use noyau::{extrait_facteur_carre, lecture_decimale, Distance, ErreurNoyau};
