/// reverse the bit order of the low `bits` bits of `data`
///
/// output bit `i` is input bit `bits - 1 - i`. everything at or above
/// position `bits` comes out zero, whatever the input had up there.
///
/// `bits` has to be in `1..=32`. the engine only ever asks for 32, anything
/// else is a caller bug (checked in debug builds only).
pub const fn reflect(data: u32, bits: u32) -> u32 {
    debug_assert!(matches!(bits, 1..=32));

    let mut reflection = 0u32;
    let mut bit = 0;
    while bit < bits {
        if (data >> bit) & 1 == 1 {
            reflection |= 1 << (bits - 1 - bit);
        }
        bit += 1;
    }
    reflection
}
