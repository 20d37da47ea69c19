#![no_std]
#![deny(clippy::pedantic)]
#![deny(warnings)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]


///
/// Implements FIPS 203 Module-Lattice-Based Key-Encapsulation Mechanism Standard,
/// parameter set ML-KEM-1024 (security category 5).
/// See <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.203.pdf>
//
// Supports automatically clearing sensitive data on drop
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::byte_fns::byte_decode;
use crate::helpers::{ct_eq, h};
use crate::ml_kem::{ml_kem_decaps, ml_kem_encaps, ml_kem_key_gen, ml_kem_key_gen_internal};
use crate::traits::{Decaps, Encaps, KeyGen, SerDes};
use rand_core::CryptoRngCore;

// Functionality map per FIPS 203
//
// Algorithm 2 BitsToBytes(b)                               --> optimized out (byte_fns.rs)
// Algorithm 3 BytesToBits(B)                                --> optimized out (byte_fns.rs)
// Algorithm 4 ByteEncode_d(F)                               --> byte_fns.rs
// Algorithm 5 ByteDecode_d(B)                               --> byte_fns.rs
// Algorithm 7 SampleNTT(B)                                  --> sampling.rs
// Algorithm 8 SamplePolyCBDη(B)                             --> sampling.rs
// Algorithm 9 NTT(f)                                        --> ntt.rs
// Algorithm 10 NTT−1(fˆ)                                    --> ntt.rs
// Algorithm 11 MultiplyNTTs(fˆ,ĝ)                           --> ntt.rs
// Algorithm 12 BaseCaseMultiply(a0,a1,b0,b1,γ)              --> ntt.rs
// Algorithm 13 K-PKE.KeyGen(d)                              --> k_pke.rs
// Algorithm 14 K-PKE.Encrypt(ekPKE,m,r)                     --> k_pke.rs
// Algorithm 15 K-PKE.Decrypt(dkPKE,c)                       --> k_pke.rs
// Algorithm 16 ML-KEM.KeyGen_internal(d,z)                 --> ml_kem.rs
// Algorithm 17 ML-KEM.Encaps_internal(ek,m)                --> ml_kem.rs
// Algorithm 18 ML-KEM.Decaps_internal(dk,c)                --> ml_kem.rs
// Algorithm 19 ML-KEM.KeyGen()                             --> ml_kem.rs
// Algorithm 20 ML-KEM.Encaps(ek)                           --> ml_kem.rs
// Algorithm 21 ML-KEM.Decaps(dk,c)                         --> ml_kem.rs
// PRF and XOF                                               --> helpers.rs
// Three hash functions: G, H, J                             --> helpers.rs
// Compress and Decompress                                   --> helpers.rs
//
// Only the ML-KEM-1024 parameter set is built; the matrix/vector/NTT helpers remain
// generic over K so the algorithms read the same as the multi-parameter-set original.

mod byte_fns;
mod helpers;
mod k_pke;
mod ml_kem;
mod ntt;
mod sampling;
mod types;

/// All functionality is covered by traits, such that consumers can utilize trait objects as desired.
pub mod traits;

// ML-KEM-1024 parameters, table 2 page 33.
const Q: u32 = 3329;
const ZETA: u32 = 17;
const K: usize = 4;
const ETA1: u32 = 2;
const ETA2: u32 = 2;
const DU: u32 = 11;
const DV: u32 = 5;
const ETA1_64: usize = ETA1 as usize * 64;
const ETA2_64: usize = ETA2 as usize * 64;

/// Serialized Encapsulation Key Length (in bytes)
pub const EK_LEN: usize = 384 * K + 32;
/// Serialized Decapsulation Key Length (in bytes)
pub const DK_LEN: usize = 768 * K + 96;
/// Serialized Ciphertext Length (in bytes)
pub const CT_LEN: usize = 32 * (DU as usize * K + DV as usize);
/// Shared Secret Key Length (in bytes)
pub const SSK_LEN: usize = 32;

const J_LEN: usize = 32 + CT_LEN;

/// The (opaque) secret key that can be de/serialized by each party.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecretKey([u8; SSK_LEN]);

impl SerDes for SharedSecretKey {
    type ByteArray = [u8; SSK_LEN];

    fn into_bytes(self) -> Self::ByteArray { self.0 }

    fn try_from_bytes(ssk: Self::ByteArray) -> Result<Self, &'static str> {
        // Not really needed but provided for symmetry.
        // No opportunity for validation, but using a Result for a future possibility
        Ok(SharedSecretKey(ssk))
    }
}

impl PartialEq for SharedSecretKey {
    fn eq(&self, other: &Self) -> bool { ct_eq(&self.0, &other.0) }
}


/// Correctly sized encapsulation key for ML-KEM-1024.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncapsKey([u8; EK_LEN]);

/// Correctly sized decapsulation key for ML-KEM-1024.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DecapsKey([u8; DK_LEN]);

/// Correctly sized ciphertext for ML-KEM-1024.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherText([u8; CT_LEN]);

/// Per FIPS 203, the key generation algorithm `ML-KEM.KeyGen` for ML-KEM (Algorithm 19)
/// accepts no input, utilizes randomness, and produces an encapsulation key and a
/// decapsulation key. While the encapsulation key can be made public, the decapsulation key
/// must remain private.
pub struct KG();

impl KeyGen for KG {
    type DecapsByteArray = [u8; DK_LEN];
    type DecapsKey = DecapsKey;
    type EncapsByteArray = [u8; EK_LEN];
    type EncapsKey = EncapsKey;

    fn try_keygen_with_rng(
        rng: &mut impl CryptoRngCore,
    ) -> Result<(EncapsKey, DecapsKey), &'static str> {
        let (mut ek, mut dk) = ([0u8; EK_LEN], [0u8; DK_LEN]);
        ml_kem_key_gen::<K, ETA1_64>(rng, &mut ek, &mut dk)?;
        Ok((EncapsKey(ek), DecapsKey(dk)))
    }

    fn keygen_from_seed(d: [u8; 32], z: [u8; 32]) -> (EncapsKey, DecapsKey) {
        let (mut ek, mut dk) = ([0u8; EK_LEN], [0u8; DK_LEN]);
        ml_kem_key_gen_internal::<K, ETA1_64>(d, z, &mut ek, &mut dk);
        (EncapsKey(ek), DecapsKey(dk))
    }

    fn validate_keypair_with_rng_vartime(
        _rng: &mut impl CryptoRngCore, ek: &Self::EncapsByteArray, dk: &Self::DecapsByteArray,
    ) -> bool {
        let len_ek_pke = 384 * K + 32;
        let len_dk_pke = 384 * K;
        let same_ek = *ek == dk[len_dk_pke..(len_dk_pke + len_ek_pke)];
        let same_h = h(ek) == dk[(len_dk_pke + len_ek_pke)..(len_dk_pke + len_ek_pke + 32)];
        same_ek & same_h
    }
}

impl Encaps for EncapsKey {
    type CipherText = CipherText;
    type SharedSecretKey = SharedSecretKey;

    fn try_encaps_with_rng(
        &self, rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::SharedSecretKey, Self::CipherText), &'static str> {
        let mut ct = [0u8; CT_LEN];
        let ssk = ml_kem_encaps::<K, ETA1_64, ETA2_64>(rng, DU, DV, &self.0, &mut ct)?;
        Ok((ssk, CipherText(ct)))
    }
}

impl Decaps for DecapsKey {
    type CipherText = CipherText;
    type SharedSecretKey = SharedSecretKey;

    fn try_decaps(&self, ct: &CipherText) -> Result<SharedSecretKey, &'static str> {
        ml_kem_decaps::<K, ETA1_64, ETA2_64, J_LEN, CT_LEN>(DU, DV, &self.0, &ct.0)
    }
}


impl SerDes for EncapsKey {
    type ByteArray = [u8; EK_LEN];

    fn into_bytes(self) -> Self::ByteArray { self.0 }

    fn try_from_bytes(ek: Self::ByteArray) -> Result<Self, &'static str> {
        // Validation per page 30: "the byte array containing the encapsulation key correctly
        // decodes to an array of integers modulo q without any modular reductions".
        for i in 0..K {
            byte_decode(12, &ek[384 * i..384 * (i + 1)])?;
        }
        Ok(EncapsKey(ek))
    }
}


impl SerDes for DecapsKey {
    type ByteArray = [u8; DK_LEN];

    fn into_bytes(self) -> Self::ByteArray { self.0 }

    fn try_from_bytes(dk: Self::ByteArray) -> Result<Self, &'static str> {
        // Page 31 checks are both fixed-size assertions already enforced by the byte
        // array type; a Result is kept for symmetry and future validation.
        Ok(DecapsKey(dk))
    }
}

impl SerDes for CipherText {
    type ByteArray = [u8; CT_LEN];

    fn into_bytes(self) -> Self::ByteArray { self.0 }

    fn try_from_bytes(ct: Self::ByteArray) -> Result<Self, &'static str> { Ok(CipherText(ct)) }
}
