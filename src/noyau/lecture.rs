// src/noyau/lecture.rs
//
// ΣLocal : lecture décimale tronquée d’une Distance, en entiers seulement.
// - chaque terme c·√a est encadré en entier "scalé" : ⌊√(c²·a·10^(2k))⌋ et +1
// - k = digits + garde ; la somme des bornes encadre la valeur ×10^k
// - garde doublée tant que les deux bornes ne tronquent pas au même entier
// - radicande 1 : valeur exacte
// - troncature finale vers zéro

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::debug;

use super::distance::Distance;
use super::erreur::ErreurNoyau;

/// Chiffres de garde au premier essai.
const GARDE: u32 = 10;

/// Nombre maximal de chiffres décimaux d’une lecture.
pub const LECTURE_DIGITS_MAX: usize = 100_000;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

fn chiffres(digits: usize) -> Result<u32, ErreurNoyau> {
    match u32::try_from(digits) {
        Ok(n) if digits <= LECTURE_DIGITS_MAX => Ok(n),
        _ => Err(ErreurNoyau::PrecisionExcessive {
            digits,
            max: LECTURE_DIGITS_MAX,
        }),
    }
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: u32) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits as usize {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// (bas, haut) entiers avec bas ≤ c·√a·10^k ≤ haut.
fn bornes_terme(a: &BigInt, c: &BigInt, k: u32) -> (BigInt, BigInt) {
    let scale = pow10(k);
    if a.is_one() {
        let exact = c * scale;
        return (exact.clone(), exact);
    }

    let plancher = (c * c * a * &scale * &scale).sqrt();
    let plafond = &plancher + BigInt::one();
    if c.is_negative() {
        (-plafond, -plancher)
    } else {
        (plancher, plafond)
    }
}

fn bornes_scaled(d: &Distance, k: u32) -> (BigInt, BigInt) {
    d.seaux()
        .iter()
        .map(|(a, c)| bornes_terme(a, c, k))
        .fold((BigInt::zero(), BigInt::zero()), |(bas, haut), (b, h)| {
            (bas + b, haut + h)
        })
}

/// Valeur ×10^digits (entier), tronquée vers zéro.
///
/// La troncature est croissante : si les deux bornes tronquent au même entier,
/// la valeur aussi. Une valeur non entière est irrationnelle, donc jamais
/// exactement sur une frontière décimale, et la boucle termine.
pub fn eval_scaled(d: &Distance, digits: u32) -> BigInt {
    if d.est_entier() {
        return d.partie_entiere() * pow10(digits);
    }

    let mut garde = GARDE;
    loop {
        let (bas, haut) = bornes_scaled(d, digits + garde);
        let echelle = pow10(garde);

        // BigInt `/` tronque vers zéro
        let bas = bas / &echelle;
        let haut = haut / &echelle;
        if bas == haut {
            return bas;
        }

        debug!(digits, garde, "bornes discordantes, garde doublée");
        garde *= 2;
    }
}

/// ΣLocal : "23.43074902" pour 3Sqrt[61] à 8 chiffres.
pub fn lecture_decimale(d: &Distance, digits: usize) -> Result<String, ErreurNoyau> {
    let n = chiffres(digits)?;
    Ok(scaled_to_decimal(eval_scaled(d, n), n))
}
