//! Tests scientifiques (campagne) : propriétés nommées + limites contrôlées.
//!
//! But : vérifier les invariants du noyau sans faire chauffer la machine.
//! - budget temps global sur la campagne d’extraction
//! - cribles indépendants de l’implémentation (pas d’auto-validation)
//! - cas littéraux pour l’affichage EXACT

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::carre::extrait_facteur_carre;
use super::distance::Distance;

const BORNE_EXTRACTION: usize = 1_000_000;

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn d(paires: &[(i64, i64)]) -> Distance {
    Distance::depuis_termes(paires.iter().copied())
        .unwrap_or_else(|e| panic!("termes={paires:?} err={e}"))
}

fn assert_exact_eq(paires: &[(i64, i64)], attendu: &str) {
    assert_eq!(d(paires).to_string(), attendu, "termes={paires:?}");
}

/// Crible : sans_carre[n] == false ssi p² | n pour un p ≥ 2.
fn crible_sans_carre(borne: usize) -> Vec<bool> {
    let mut sans_carre = vec![true; borne];
    let mut p = 2usize;
    while p * p < borne {
        let p2 = p * p;
        let mut m = p2;
        while m < borne {
            sans_carre[m] = false;
            m += p2;
        }
        p += 1;
    }
    sans_carre
}

/* ------------------------ Extraction ------------------------ */

#[test]
fn sci_extraction_un_million() {
    let start = Instant::now();
    let sans_carre = crible_sans_carre(BORNE_EXTRACTION);

    for n in 1..BORNE_EXTRACTION {
        let sp = extrait_facteur_carre(&BigInt::from(n))
            .unwrap()
            .to_usize()
            .unwrap();
        let sp2 = sp * sp;

        assert_eq!(n % sp2, 0, "sp² ne divise pas n={n}");
        let a = n / sp2;
        assert_eq!(sp2 * a, n, "n={n}");
        assert!(sans_carre[a], "n={n} : a={a} n’est pas sans carré");

        if n % 50_000 == 0 {
            budget(start, Duration::from_secs(120));
        }
    }
}

/* ------------------------ Affichage EXACT ------------------------ */

#[test]
fn sci_termes_isoles() {
    assert_eq!(Distance::nouvelle(3, 61).unwrap().to_string(), "3Sqrt[61]");
    assert_eq!(Distance::nouvelle(-42, 1003).unwrap().to_string(), "-42Sqrt[1003]");
}

#[test]
fn sci_signes_et_coefficients_unitaires() {
    assert_exact_eq(
        &[(1, -1), (2, 3), (10, -1), (17, 2)],
        "-1 + 3Sqrt[2] - Sqrt[10] + 2Sqrt[17]",
    );
    assert_exact_eq(&[(5, -1), (3, -1), (2, -1)], "-Sqrt[2] - Sqrt[3] - Sqrt[5]");
    assert_exact_eq(
        &[(2, -1), (3, -1), (5, -1), (7, -1), (11, -1), (13, -1)],
        "-Sqrt[2] - Sqrt[3] - Sqrt[5] - Sqrt[7] - Sqrt[11] - Sqrt[13]",
    );
}

#[test]
fn sci_extraction_dans_les_termes() {
    // 99 = 3²·11, 999 = 3²·111, 9999 = 3²·1111
    assert_exact_eq(
        &[(99, 2), (999, 2), (9999, 2)],
        "6Sqrt[11] + 6Sqrt[111] + 6Sqrt[1111]",
    );
    assert_exact_eq(&[(123, 3), (127, 5), (3, 18)], "18Sqrt[3] + 3Sqrt[123] + 5Sqrt[127]");
    // √20 = 2√5, √25 = 5
    assert_exact_eq(
        &[(5, 1), (10, 1), (15, 1), (20, 1), (25, 1), (30, 1)],
        "5 + 3Sqrt[5] + Sqrt[10] + Sqrt[15] + Sqrt[30]",
    );
}

#[test]
fn sci_fusion_algebrique() {
    let x = d(&[(4, -1), (16, -1), (64, -1), (2, -1), (8, -1), (32, -1), (128, -1)]);
    let seaux: Vec<(BigInt, BigInt)> = x.termes().map(|(a, c)| (a.clone(), c.clone())).collect();
    assert_eq!(
        seaux,
        vec![
            (BigInt::from(1), BigInt::from(-14)),
            (BigInt::from(2), BigInt::from(-15))
        ]
    );
    assert_eq!(x.to_string(), "-14 - 15Sqrt[2]");
}

#[test]
fn sci_constante_pure() {
    let x = d(&[(100, 5), (10_000, -5), (1_000_000, 5)]);
    assert_eq!(x.nb_termes(), 1);
    assert_eq!(x.partie_entiere(), BigInt::from(4550));
    assert_eq!(x.to_string(), "4550");
}

#[test]
fn sci_annulation_totale() {
    assert_exact_eq(&[(2, 5), (8, -1), (18, -1), (1, 0)], "0");
    assert_exact_eq(&[(9, 2), (36, -1)], "0");
}

/* ------------------------ Canon : point fixe + déterminisme ------------------------ */

#[test]
fn sci_canon_point_fixe() {
    let cas: &[&[(i64, i64)]] = &[
        &[(1, -1), (2, 3), (10, -1), (17, 2)],
        &[(99, 2), (999, 2), (9999, 2)],
        &[(4, -1), (16, -1), (64, -1), (2, -1), (8, -1), (32, -1), (128, -1)],
        &[(2, 1), (8, -2)],
    ];
    for paires in cas {
        let x = d(paires);
        let y = Distance::depuis_termes(x.termes().map(|(a, c)| (a.clone(), c.clone()))).unwrap();
        assert_eq!(x, y, "termes={paires:?}");
        assert_eq!(x.to_string(), y.to_string());
    }
}

#[test]
fn sci_determinisme_multi_threads() {
    let x = d(&[(1, -1), (2, 3), (10, -1), (17, 2), (1003, -42)]);
    let reference = x.to_string();

    let rendus: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| x.to_string())).collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread de rendu"))
            .collect()
    });

    for r in rendus {
        assert_eq!(r, reference);
    }
    assert_eq!(x.to_string(), reference);
}

/* ------------------------ Grands entiers ------------------------ */

#[test]
fn sci_radicandes_hors_i64() {
    // (10^12)²·2 et 2 tombent dans le même seau
    let grand: BigInt = BigInt::from(10).pow(24) * 2u32;
    let x = Distance::depuis_termes([(grand, BigInt::from(1)), (BigInt::from(2), BigInt::from(-1))])
        .unwrap();
    assert_eq!(x.to_string(), "999999999999Sqrt[2]");
}
