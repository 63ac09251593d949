// src/noyau/canon.rs
//
// Canonicalisation forte (déterministe) d’une somme Σ c·√r :
// - chaque radicande r est décomposé r = sp²·a (a sans facteur carré)
// - c·sp est versé dans le seau a (les collisions s’additionnent)
// - les seaux nuls sont retirés
// - ordre croissant des radicandes garanti par BTreeMap
//
// Note : la déduplication est algébrique (√4 et 1 tombent dans le même seau),
// jamais numérique.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::trace;

use super::carre::decompose;
use super::erreur::ErreurNoyau;

/// Seaux canoniques : radicande sans carré -> coefficient non nul.
pub type Termes = BTreeMap<BigInt, BigInt>;

/// Construit la forme canonique depuis des termes bruts (radicande, coefficient).
///
/// Tout ou rien : un radicande ≤ 0 fait échouer l’ensemble.
pub fn canon_termes<I>(bruts: I) -> Result<Termes, ErreurNoyau>
where
    I: IntoIterator<Item = (BigInt, BigInt)>,
{
    let mut seaux = Termes::new();

    for (racine, coeff) in bruts {
        let (sp, a) = decompose(&racine)?;

        // Coefficient nul : aucun effet (mais le radicande reste validé).
        if coeff.is_zero() {
            continue;
        }

        trace!(%racine, %coeff, %sp, %a, "terme versé");
        verse(&mut seaux, a, coeff * sp);
    }

    seaux.retain(|_, c| !c.is_zero());
    Ok(seaux)
}

/// Ajoute `coeff` au seau `a` (créé à 0 si absent). Ne retire pas les zéros.
pub(crate) fn verse(seaux: &mut Termes, a: BigInt, coeff: BigInt) {
    let seau = seaux.entry(a).or_insert_with(BigInt::zero);
    *seau += coeff;
}

/// Fusion de deux formes déjà canoniques (mêmes clés = mêmes racines).
pub(crate) fn fusionne(gauche: &Termes, droite: &Termes) -> Termes {
    let mut seaux = gauche.clone();
    for (a, c) in droite {
        verse(&mut seaux, a.clone(), c.clone());
    }
    seaux.retain(|_, c| !c.is_zero());
    seaux
}
