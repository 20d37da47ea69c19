//! C ABI shim over the `fips203` ML-KEM-1024 crate.
//!
//! Every function takes pointers to caller-owned, fixed-size buffers sized per the
//! exported `EK_LEN`/`DK_LEN`/`CT_LEN`/`SSK_LEN` constants and returns `0` on success
//! or a negative value on failure. None of these functions allocate; callers own all
//! buffer storage.

use fips203::traits::{Decaps, Encaps, KeyGen, SerDes};
use fips203::{CipherText, DecapsKey, EncapsKey, CT_LEN, DK_LEN, EK_LEN, KG, SSK_LEN};
use rand_core::OsRng;

const ERR_RNG: i32 = -1;
const ERR_DECODE: i32 = -2;
const ERR_INTERNAL: i32 = -3;

/// # Safety
/// `ek_out` and `dk_out` must each point to at least `EK_LEN`/`DK_LEN` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn ml_kem_1024_keygen(ek_out: *mut u8, dk_out: *mut u8) -> i32 {
    let (ek, dk) = match KG::try_keygen_with_rng(&mut OsRng) {
        Ok(pair) => pair,
        Err(_) => return ERR_RNG,
    };
    core::ptr::copy_nonoverlapping(ek.into_bytes().as_ptr(), ek_out, EK_LEN);
    core::ptr::copy_nonoverlapping(dk.into_bytes().as_ptr(), dk_out, DK_LEN);
    0
}

/// # Safety
/// `ek_in` must point to `EK_LEN` readable bytes. `ct_out` and `ssk_out` must each
/// point to at least `CT_LEN`/`SSK_LEN` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn ml_kem_1024_encaps(
    ek_in: *const u8, ct_out: *mut u8, ssk_out: *mut u8,
) -> i32 {
    let mut ek_bytes = [0u8; EK_LEN];
    core::ptr::copy_nonoverlapping(ek_in, ek_bytes.as_mut_ptr(), EK_LEN);
    let ek = match EncapsKey::try_from_bytes(ek_bytes) {
        Ok(ek) => ek,
        Err(_) => return ERR_DECODE,
    };
    let (ssk, ct) = match ek.try_encaps_with_rng(&mut OsRng) {
        Ok(pair) => pair,
        Err(_) => return ERR_INTERNAL,
    };
    core::ptr::copy_nonoverlapping(ct.into_bytes().as_ptr(), ct_out, CT_LEN);
    core::ptr::copy_nonoverlapping(ssk.into_bytes().as_ptr(), ssk_out, SSK_LEN);
    0
}

/// # Safety
/// `dk_in` must point to `DK_LEN` readable bytes, `ct_in` to `CT_LEN` readable bytes,
/// and `ssk_out` to at least `SSK_LEN` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn ml_kem_1024_decaps(
    dk_in: *const u8, ct_in: *const u8, ssk_out: *mut u8,
) -> i32 {
    let mut dk_bytes = [0u8; DK_LEN];
    core::ptr::copy_nonoverlapping(dk_in, dk_bytes.as_mut_ptr(), DK_LEN);
    let mut ct_bytes = [0u8; CT_LEN];
    core::ptr::copy_nonoverlapping(ct_in, ct_bytes.as_mut_ptr(), CT_LEN);

    let dk = match DecapsKey::try_from_bytes(dk_bytes) {
        Ok(dk) => dk,
        Err(_) => return ERR_DECODE,
    };
    let ct = match CipherText::try_from_bytes(ct_bytes) {
        Ok(ct) => ct,
        Err(_) => return ERR_DECODE,
    };
    let ssk = match dk.try_decaps(&ct) {
        Ok(ssk) => ssk,
        Err(_) => return ERR_INTERNAL,
    };
    core::ptr::copy_nonoverlapping(ssk.into_bytes().as_ptr(), ssk_out, SSK_LEN);
    0
}
