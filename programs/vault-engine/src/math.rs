use crate::error::{Result, VaultError};
use crate::state::VirtualOffset;

pub use self::wide::{U256, U512};

mod wide {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer, the width of every amount the vault handles.
        pub struct U256(4);
    }

    construct_uint! {
        /// Double-width intermediate for the product of two `U256` operands.
        pub struct U512(8);
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rounding {
    Down,
    Up,
}

/// Price `assets` in shares against a pool padded by `offset`.
///
/// shares = assets × (total_shares + offset.shares) / (total_assets + offset.assets)
///
/// Both sides carry their own virtual reserve, so an empty pool still has a
/// finite price and a donation is diluted across `offset.shares` phantom
/// shares.
pub fn convert_to_shares(
    assets: U256,
    total_assets: U256,
    total_shares: U256,
    offset: &VirtualOffset,
    rounding: Rounding,
) -> Result<U256> {
    let virtual_shares = total_shares
        .checked_add(offset.shares())
        .ok_or(VaultError::ArithmeticOverflow)?;

    let virtual_assets = total_assets
        .checked_add(offset.assets())
        .ok_or(VaultError::ArithmeticOverflow)?;

    mul_div(assets, virtual_shares, virtual_assets, rounding)
}

/// Inverse of [`convert_to_shares`]:
/// assets = shares × (total_assets + offset.assets) / (total_shares + offset.shares)
pub fn convert_to_assets(
    shares: U256,
    total_assets: U256,
    total_shares: U256,
    offset: &VirtualOffset,
    rounding: Rounding,
) -> Result<U256> {
    let virtual_shares = total_shares
        .checked_add(offset.shares())
        .ok_or(VaultError::ArithmeticOverflow)?;

    let virtual_assets = total_assets
        .checked_add(offset.assets())
        .ok_or(VaultError::ArithmeticOverflow)?;

    mul_div(shares, virtual_assets, virtual_shares, rounding)
}

/// Exact multiplication then division with configurable rounding.
///
/// Computes: (value × numerator) / denominator
/// The product is formed in 512 bits, so it never wraps; only a quotient
/// that does not fit in 256 bits is reported as overflow.
pub fn mul_div(value: U256, numerator: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    if denominator.is_zero() {
        return Err(VaultError::DivisionByZero);
    }

    let product = widen(value) * widen(numerator);
    let (quotient, remainder) = product.div_mod(widen(denominator));
    let quotient = narrow(quotient)?;

    match rounding {
        Rounding::Down => Ok(quotient),
        Rounding::Up if remainder.is_zero() => Ok(quotient),
        Rounding::Up => quotient
            .checked_add(U256::one())
            .ok_or(VaultError::ArithmeticOverflow),
    }
}

/// `10^exponent` as a 256-bit value.
pub fn pow10(exponent: u8) -> Result<U256> {
    U256::from(10u8)
        .checked_pow(U256::from(exponent))
        .ok_or(VaultError::ArithmeticOverflow)
}

fn widen(value: U256) -> U512 {
    let mut limbs = [0u64; 8];
    limbs[..4].copy_from_slice(&value.0);
    U512(limbs)
}

fn narrow(value: U512) -> Result<U256> {
    let U512(limbs) = value;
    if limbs[4..].iter().any(|&limb| limb != 0) {
        return Err(VaultError::ArithmeticOverflow);
    }

    let mut low = [0u64; 4];
    low.copy_from_slice(&limbs[..4]);
    Ok(U256(low))
}
