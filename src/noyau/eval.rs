//! Noyau — évaluation (pipeline réel)
//!
//! lignes texte -> entiers -> décomposition (démarche) -> canon -> EXACT -> ΣLocal
//!
//! Remarque : la démarche et la valeur partagent les mêmes seaux (`canon::verse`) ;
//! chaque radicande n’est décomposé qu’une fois.

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::debug;

use super::canon::{verse, Termes};
use super::carre::decompose;
use super::distance::Distance;
use super::erreur::ErreurNoyau;
use super::format::{format_decomposition, format_termes};
use super::lecture::lecture_decimale;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    /// Termes tels que saisis : "(12, 5) (8, -1)"
    pub entree: String,
    /// Une décomposition par terme : "Sqrt[12] = 2Sqrt[3]"
    pub decompositions: String,
    /// Seaux après fusion (avant retrait des zéros) : "3 -> 10 ; 2 -> -2"
    pub seaux: String,
    pub note: String,
}

fn lit_entier(champ: &'static str, texte: &str) -> Result<BigInt, ErreurNoyau> {
    texte
        .trim()
        .parse::<BigInt>()
        .map_err(|_| ErreurNoyau::EntierInvalide {
            champ,
            texte: texte.to_string(),
        })
}

/// Lignes (radicande, coefficient) -> termes entiers ; lignes vides ignorées.
pub fn lit_lignes(lignes: &[(String, String)]) -> Result<Vec<(BigInt, BigInt)>, ErreurNoyau> {
    let mut termes = Vec::with_capacity(lignes.len());
    for (racine, coeff) in lignes {
        if racine.trim().is_empty() && coeff.trim().is_empty() {
            continue;
        }
        termes.push((lit_entier("radicande", racine)?, lit_entier("coefficient", coeff)?));
    }

    if termes.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }
    Ok(termes)
}

/// API publique : évalue des lignes de termes et retourne:
/// - EXACT (forme canonique)
/// - ΣLocal (lecture décimale tronquée à `digits`)
/// - Démarche (entrée, décompositions, seaux)
pub fn evalue_lignes(
    lignes: &[(String, String)],
    digits: usize,
) -> Result<(String, String, DemarcheNoyau), ErreurNoyau> {
    // 1) Entiers
    let termes = lit_lignes(lignes)?;

    // 2) Décompositions (valide tous les radicandes) + seaux bruts
    let mut decompositions = Vec::with_capacity(termes.len());
    let mut seaux = Termes::new();
    for (racine, coeff) in &termes {
        let (sp, a) = decompose(racine)?;
        decompositions.push(format_decomposition(racine, &sp, &a));
        verse(&mut seaux, a, coeff * &sp);
    }

    // 3) Valeur canonique : les mêmes seaux, zéros retirés
    let d = Distance::depuis_seaux(seaux.clone());

    let annules = seaux.values().filter(|c| c.is_zero()).count();
    let note = if annules > 0 {
        format!("{annules} seau(x) annulé(s)")
    } else {
        String::new()
    };

    let demarche = DemarcheNoyau {
        entree: termes
            .iter()
            .map(|(r, c)| format!("({r}, {c})"))
            .collect::<Vec<_>>()
            .join(" "),
        decompositions: decompositions.join("\n"),
        seaux: seaux
            .iter()
            .map(|(a, c)| format!("{a} -> {c}"))
            .collect::<Vec<_>>()
            .join(" ; "),
        note,
    };

    // 4) EXACT + ΣLocal
    let exact = format_termes(d.seaux());
    let lecture = lecture_decimale(&d, digits)?;

    debug!(%exact, termes = termes.len(), "évaluation");
    Ok((exact, lecture, demarche))
}
