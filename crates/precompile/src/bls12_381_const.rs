//! Constants of the EIP-2537 encoding, catalog and gas schedule.

/// BLS12_G1ADD precompile address.
pub const G1_ADD_ADDRESS: u64 = 0x0a;
/// BLS12_G1MUL precompile address.
pub const G1_MUL_ADDRESS: u64 = 0x0b;
/// BLS12_G1MULTIEXP precompile address, shared by every multiexp algorithm.
pub const G1_MSM_ADDRESS: u64 = 0x0c;
/// BLS12_G2ADD precompile address.
pub const G2_ADD_ADDRESS: u64 = 0x0d;
/// BLS12_G2MUL precompile address.
pub const G2_MUL_ADDRESS: u64 = 0x0e;
/// BLS12_G2MULTIEXP precompile address, shared by every multiexp algorithm.
pub const G2_MSM_ADDRESS: u64 = 0x0f;
/// BLS12_PAIRING precompile address.
pub const PAIRING_ADDRESS: u64 = 0x10;
/// BLS12_MAP_FP_TO_G1 precompile address.
pub const MAP_FP_TO_G1_ADDRESS: u64 = 0x11;
/// BLS12_MAP_FP2_TO_G2 precompile address.
pub const MAP_FP2_TO_G2_ADDRESS: u64 = 0x12;

/// BLS12_G1ADD gas.
pub const G1_ADD_GAS: u64 = 600;
/// BLS12_G1MUL gas, also the per-item base of the G1 multiexp schedule.
pub const G1_MUL_GAS: u64 = 12000;
/// BLS12_G2ADD gas.
pub const G2_ADD_GAS: u64 = 4500;
/// BLS12_G2MUL gas, also the per-item base of the G2 multiexp schedule.
pub const G2_MUL_GAS: u64 = 55000;
/// Fixed part of the pairing gas.
pub const PAIRING_BASE_GAS: u64 = 115000;
/// Pairing gas charged per `(G1, G2)` pair.
pub const PAIRING_PER_PAIR_GAS: u64 = 23000;
/// BLS12_MAP_FP_TO_G1 gas.
pub const MAP_FP_TO_G1_GAS: u64 = 5500;
/// BLS12_MAP_FP2_TO_G2 gas.
pub const MAP_FP2_TO_G2_GAS: u64 = 110000;
/// Divisor applied to `k * mul_gas * discount` in the multiexp schedule.
pub const MSM_MULTIPLIER: u64 = 1000;

/// Finite field element length.
pub const FP_LENGTH: usize = 48;
/// Padded finite field element length.
pub const PADDED_FP_LENGTH: usize = 64;
/// Padded quadratic extension field element length.
pub const PADDED_FP2_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// Number of zero bytes in front of every field element.
pub const FP_PAD_BY: usize = PADDED_FP_LENGTH - FP_LENGTH;
/// Scalar length.
pub const SCALAR_LENGTH: usize = 32;
/// Number of scalar bits handed to the engine.
pub const NBITS: usize = 8 * SCALAR_LENGTH;
/// Encoded G1 point length.
pub const PADDED_G1_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// Encoded G2 point length.
pub const PADDED_G2_LENGTH: usize = 2 * PADDED_FP2_LENGTH;

/// BLS12_G1ADD input length.
pub const G1_ADD_INPUT_LENGTH: usize = 2 * PADDED_G1_LENGTH;
/// BLS12_G1MUL input length.
pub const G1_MUL_INPUT_LENGTH: usize = PADDED_G1_LENGTH + SCALAR_LENGTH;
/// Width of one `(point, scalar)` item of a G1 multiexp input.
pub const G1_MSM_INPUT_LENGTH: usize = G1_MUL_INPUT_LENGTH;
/// BLS12_G2ADD input length.
pub const G2_ADD_INPUT_LENGTH: usize = 2 * PADDED_G2_LENGTH;
/// BLS12_G2MUL input length.
pub const G2_MUL_INPUT_LENGTH: usize = PADDED_G2_LENGTH + SCALAR_LENGTH;
/// Width of one `(point, scalar)` item of a G2 multiexp input.
pub const G2_MSM_INPUT_LENGTH: usize = G2_MUL_INPUT_LENGTH;
/// Width of one `(G1, G2)` item of a pairing input.
pub const PAIRING_INPUT_LENGTH: usize = PADDED_G1_LENGTH + PADDED_G2_LENGTH;
/// BLS12_MAP_FP_TO_G1 input length.
pub const MAP_FP_TO_G1_INPUT_LENGTH: usize = PADDED_FP_LENGTH;
/// BLS12_MAP_FP2_TO_G2 input length.
pub const MAP_FP2_TO_G2_INPUT_LENGTH: usize = PADDED_FP2_LENGTH;

/// Output length of every operation returning a G1 point.
pub const G1_OUTPUT_LENGTH: usize = PADDED_G1_LENGTH;
/// Output length of every operation returning a G2 point.
pub const G2_OUTPUT_LENGTH: usize = PADDED_G2_LENGTH;
/// Pairing output length. The result is a 32-byte big-endian 0 or 1.
pub const PAIRING_OUTPUT_LENGTH: usize = 32;

/// Field modulus, big-endian non-Montgomery form.
pub const MODULUS_REPR: [u8; FP_LENGTH] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// Multiexp discounts indexed by `k - 1`, clamped to the last entry.
pub static MSM_DISCOUNT_TABLE: [u16; 128] = [
    1200, 888, 764, 641, 594, 547, 500, 453, 438, 423, 408, 394, 379, 364, 349, 334, 330, 326,
    322, 318, 314, 310, 306, 302, 298, 294, 289, 285, 281, 277, 273, 269, 268, 266, 265, 263, 262,
    260, 259, 257, 256, 254, 253, 251, 250, 248, 247, 245, 244, 242, 241, 239, 238, 236, 235, 233,
    232, 231, 229, 228, 226, 225, 223, 222, 221, 220, 219, 219, 218, 217, 216, 216, 215, 214, 213,
    213, 212, 211, 211, 210, 209, 208, 208, 207, 206, 205, 205, 204, 203, 202, 202, 201, 200, 199,
    199, 198, 197, 196, 196, 195, 194, 193, 193, 192, 191, 191, 190, 189, 188, 188, 187, 186, 185,
    185, 184, 183, 182, 182, 181, 180, 179, 179, 178, 177, 176, 176, 175, 174,
];
