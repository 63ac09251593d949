// src/noyau/carre.rs
//
// Extraction du plus grand carré : n = sp² · a, avec a sans facteur carré.
// - essais par p = 2 puis impairs (déterministe, O(√n) au pire)
// - chemin rapide u64 pour les radicandes usuels, BigInt au-delà
// - n ≤ 0 : erreur (pas de décomposition dans ce domaine)

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::ErreurNoyau;

/// Plus grand `sp` tel que `sp²` divise `n`.
pub fn extrait_facteur_carre(n: &BigInt) -> Result<BigInt, ErreurNoyau> {
    decompose(n).map(|(sp, _)| sp)
}

/// Décompose `n ≥ 1` en `(sp, a)` avec `n = sp² · a` et `a` sans facteur carré.
pub fn decompose(n: &BigInt) -> Result<(BigInt, BigInt), ErreurNoyau> {
    if !n.is_positive() {
        return Err(ErreurNoyau::ArgumentInvalide {
            radicande: n.clone(),
        });
    }

    if let Some(petit) = n.to_u64() {
        let (sp, a) = decompose_u64(petit);
        return Ok((BigInt::from(sp), BigInt::from(a)));
    }

    Ok(decompose_grand(n))
}

/// Même contrat que `decompose`, pour `n ≥ 1` tenant dans un u64.
pub fn decompose_u64(n: u64) -> (u64, u64) {
    debug_assert!(n >= 1, "radicande nul");

    let mut reste = n;
    let mut sp: u64 = 1;
    let mut a: u64 = 1;

    // On retire chaque premier entièrement : p^k donne p^(k/2) à sp et p^(k%2) à a.
    // reste décroît vite, donc la borne p² ≤ reste aussi.
    let mut p: u64 = 2;
    while p <= reste / p {
        let mut k = 0u32;
        while reste % p == 0 {
            reste /= p;
            k += 1;
        }
        sp *= p.pow(k / 2);
        if k % 2 == 1 {
            a *= p;
        }
        p = if p == 2 { 3 } else { p + 2 };
    }

    // Ce qui reste est 1 ou un premier (exposant 1).
    (sp, a * reste)
}

fn decompose_grand(n: &BigInt) -> (BigInt, BigInt) {
    let mut reste = n.clone();
    let mut sp = BigInt::one();
    let mut a = BigInt::one();

    let deux = BigInt::from(2u32);
    let mut p = deux.clone();
    while &p * &p <= reste {
        let mut impair = false;
        while (&reste % &p).is_zero() {
            reste /= &p;
            if impair {
                sp *= &p;
            }
            impair = !impair;
        }
        if impair {
            a *= &p;
        }
        if p == deux {
            p = BigInt::from(3u32);
        } else {
            p += 2u32;
        }
    }

    (sp, a * reste)
}

/// Vrai si `n ≥ 1` n’est divisible par aucun carré > 1.
pub fn est_sans_carre(n: &BigInt) -> bool {
    matches!(decompose(n), Ok((sp, _)) if sp.is_one())
}
