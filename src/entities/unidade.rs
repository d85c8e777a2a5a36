//! Fixed label sets used by agreements, commitments and flow events.
//!
//! Both enums carry their CSV label through `strum`, so `as_ref()` yields the
//! exact text written to disk and `str::parse` recovers the variant.

use rand::{
    Rng,
    distributions::{Distribution, Standard},
};
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Unit of measure an agreement is priced in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, Deserialize,
)]
#[serde(try_from = "String")]
pub enum Unidade {
    /// Tablets
    #[strum(serialize = "comprimidos")]
    Comprimidos,
    /// Box
    #[strum(serialize = "caixa")]
    Caixa,
    /// Vials
    #[strum(serialize = "frascos")]
    Frascos,
    /// Grams
    #[strum(serialize = "gramas")]
    Gramas,
}

/// Facility where a stock movement happened.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, Deserialize,
)]
#[serde(try_from = "String")]
pub enum NomeUnidade {
    /// Central warehouse
    #[strum(serialize = "almoxarifado")]
    Almoxarifado,
    /// Central pharmacy
    #[strum(serialize = "farmacia central")]
    FarmaciaCentral,
    /// Surgical ward
    #[strum(serialize = "bloco cirurgico")]
    BlocoCirurgico,
}

impl TryFrom<String> for Unidade {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for NomeUnidade {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Distribution<Unidade> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Unidade {
        match rng.gen_range(0..4) {
            0 => Unidade::Comprimidos,
            1 => Unidade::Caixa,
            2 => Unidade::Frascos,
            _ => Unidade::Gramas,
        }
    }
}

impl Distribution<NomeUnidade> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NomeUnidade {
        match rng.gen_range(0..3) {
            0 => NomeUnidade::Almoxarifado,
            1 => NomeUnidade::FarmaciaCentral,
            _ => NomeUnidade::BlocoCirurgico,
        }
    }
}
