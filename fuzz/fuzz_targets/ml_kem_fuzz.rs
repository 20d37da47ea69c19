#![no_main]
use fips203::{
    traits::{Decaps, Encaps, KeyGen, SerDes},
    CipherText, DecapsKey, EncapsKey, KG, CT_LEN, DK_LEN, EK_LEN, SSK_LEN,
};
use libfuzzer_sys::fuzz_target;
use rand_core::{CryptoRng, RngCore};

// Wrapper struct to help organize the fuzz input
#[derive(arbitrary::Arbitrary, Debug)]
struct FuzzInput {
    d: [u8; 32],
    z: [u8; 32],
    e: [u8; 32],
    ek_xor: [u8; EK_LEN],
    dk_xor: [u8; DK_LEN],
    ct_xor: [u8; CT_LEN],
    sk_xor: [u8; SSK_LEN],
}

fuzz_target!(|input: FuzzInput| {
    // Generate keypair deterministically from fuzzer input
    let (ek_a, dk_a) = KG::keygen_from_seed(input.d, input.z);

    // Serialize and deserialize encapsulation key; XOR
    let mut ek_bytes = ek_a.into_bytes();
    ek_bytes.iter_mut().zip(input.ek_xor.iter()).for_each(|(x1, x2)| *x1 ^= x2);
    let ek_b = match EncapsKey::try_from_bytes(ek_bytes) {
        Ok(k) => k,
        Err(_) => return,
    };

    // Serialize and deserialize decapsulation key
    let mut dk_bytes = dk_a.into_bytes();
    dk_bytes.iter_mut().zip(input.dk_xor.iter()).for_each(|(x1, x2)| *x1 ^= x2);
    let dk_b = match DecapsKey::try_from_bytes(dk_bytes) {
        Ok(k) => k,
        Err(_) => return,
    };

    let (ss, ct) = ek_b.encaps_from_seed(&input.e);

    // Serialize and deserialize ciphertext; XOR
    let mut ct_bytes = ct.into_bytes();
    ct_bytes.iter_mut().zip(input.ct_xor.iter()).for_each(|(x1, x2)| *x1 ^= x2);
    let ct_b = match CipherText::try_from_bytes(ct_bytes) {
        Ok(c) => c,
        Err(_) => return,
    };

    // Serialize and deserialize shared secret; XOR
    let mut sk_bytes = ss.into_bytes();
    sk_bytes.iter_mut().zip(input.sk_xor.iter()).for_each(|(x1, x2)| *x1 ^= x2);
    let _sk_b = match fips203::SharedSecretKey::try_from_bytes(sk_bytes) {
        Ok(s) => s,
        Err(_) => return,
    };

    // Decapsulate whatever ciphertext survived the XOR corruption. Implicit
    // rejection means this should never panic, whether or not ct_b round-trips.
    let _ = dk_b.try_decaps(&ct_b);

    // ----- CUSTOM RNG TO REPLAY VALUES -----
    struct TestRng {
        data: Vec<Vec<u8>>,
    }

    impl RngCore for TestRng {
        fn next_u32(&mut self) -> u32 { unimplemented!() }

        fn next_u64(&mut self) -> u64 { unimplemented!() }

        fn fill_bytes(&mut self, out: &mut [u8]) {
            let x = self.data.pop().expect("test rng problem");
            out.copy_from_slice(&x)
        }

        fn try_fill_bytes(&mut self, out: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(out);
            Ok(())
        }
    }

    impl CryptoRng for TestRng {}

    impl TestRng {
        fn new() -> Self { TestRng { data: Vec::new() } }

        fn push(&mut self, new_data: &[u8]) {
            let x = new_data.to_vec();
            self.data.push(x);
        }
    }

    let mut rng = TestRng::new();
    let mut z = input.z;
    z.iter_mut().zip(input.ct_xor[0..1].iter()).for_each(|(x1, x2)| *x1 ^= x2);
    rng.push(&input.d);
    rng.push(&z);
    let (ek_c, dk_c) = match KG::try_keygen_with_rng(&mut rng) {
        Ok(k) => k,
        Err(_) => return,
    };
    rng.push(&input.d);
    rng.push(&z);
    KG::validate_keypair_with_rng_vartime(&mut rng, &ek_c.into_bytes(), &dk_c.into_bytes());
});
