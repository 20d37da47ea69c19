use crate::types::Z;
use crate::Q;

/// Algorithm 4 `ByteEncode<d>(F)` on page 19.
/// Encodes an array of d-bit integers into a byte array, for 1 ≤ d ≤ 12.
///
/// Input: integer array `F ∈ Z^256_m`, where `m = 2^d if d < 12` and `m = q if d = 12` <br>
/// Output: byte array B ∈ B^{32d}
pub(crate) fn byte_encode(d: u32, integers_f: &[Z; 256], bytes_b: &mut [u8]) {
    let mut temp = 0u64;
    let mut bit_index = 0;
    let mut byte_index = 0;
    for coeff in integers_f {
        let coeff = u64::from(coeff.get_u16()) & (2u64.pow(d) - 1);
        temp |= coeff << bit_index;
        bit_index += d as usize;
        while bit_index > 7 {
            bytes_b[byte_index] = temp as u8;
            temp >>= 8;
            byte_index += 1;
            bit_index -= 8;
        }
    }
}


/// Algorithm 5 `ByteDecode<d>(B)` on page 19.
/// Decodes a byte array into an array of d-bit integers, for 1 ≤ d ≤ 12.
///
/// Input: byte array B ∈ B^{32d} <br>
/// Output: integer array `F ∈ Z^256_m`, where `m = 2^d if d < 12` and `m = q if d = 12`
///
/// Rejects (for `d = 12`) any decoded coefficient `>= q`, per the FIPS 203 ModulusCheck
/// that `ByteDecode_12` applies when decoding an encapsulation key.
pub(crate) fn byte_decode(d: u32, bytes_b: &[u8]) -> Result<[Z; 256], &'static str> {
    let mut integers_f = [Z::default(); 256];
    let bitlen = d;
    let mut temp = 0u64;
    let mut int_index = 0;
    let mut bit_index = 0;
    for byte in bytes_b {
        temp |= u64::from(*byte) << bit_index;
        bit_index += 8;
        while bit_index >= bitlen {
            let tmask = temp & (2u64.pow(bitlen) - 1);
            integers_f[int_index] = Z(tmask as u16);
            bit_index -= bitlen;
            temp >>= bitlen;
            int_index += 1;
        }
    }
    if d == 12 {
        if !integers_f.iter().all(|e| u32::from(e.get_u16()) < Q) {
            return Err("Alg5: ByteDecode_12 coefficient out of range");
        }
    }
    Ok(integers_f)
}


#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec;
    use alloc::vec::Vec;

    use rand::{Rng, SeedableRng};

    use crate::byte_fns::{byte_decode, byte_encode};

    #[test]
    fn test_decode_and_encode() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(123);
        for _i in 0..100 {
            let num_bytes = 32 * 11;
            let mut bytes2 = vec![0u8; num_bytes];
            let bytes1: Vec<u8> = (0..num_bytes).map(|_| rng.gen()).collect();
            let integers = byte_decode(11, &bytes1).unwrap();
            byte_encode(11, &integers, &mut bytes2);
            assert_eq!(bytes1, bytes2);

            let num_bytes = 32 * 10;
            let bytes1: Vec<u8> = (0..num_bytes).map(|_| rng.gen()).collect();
            let mut bytes2 = vec![0u8; num_bytes];
            let integers = byte_decode(10, &bytes1).unwrap();
            byte_encode(10, &integers, &mut bytes2);
            assert_eq!(bytes1, bytes2);

            let num_bytes = 32 * 5;
            let bytes1: Vec<u8> = (0..num_bytes).map(|_| rng.gen()).collect();
            let mut bytes2 = vec![0u8; num_bytes];
            let integers = byte_decode(5, &bytes1).unwrap();
            byte_encode(5, &integers, &mut bytes2);
            assert_eq!(bytes1, bytes2);

            let num_bytes = 32 * 4;
            let bytes1: Vec<u8> = (0..num_bytes).map(|_| rng.gen()).collect();
            let mut bytes2 = vec![0u8; num_bytes];
            let integers = byte_decode(4, &bytes1).unwrap();
            byte_encode(4, &integers, &mut bytes2);
            assert_eq!(bytes1, bytes2);
        }
    }

    #[test]
    fn test_byte_decode_12_rejects_out_of_range() {
        // 12-bit encoding of q (3329) repeated: first two bytes form a value >= q.
        let mut bytes = vec![0u8; 384];
        bytes[0] = 0xFF;
        bytes[1] = 0x0F; // low 12 bits = 0xFFF = 4095 >= q
        assert!(byte_decode(12, &bytes).is_err());
    }
}
