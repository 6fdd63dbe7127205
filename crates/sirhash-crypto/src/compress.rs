// Compression function (FIPS 180-4 section 6.2.2, steps 2-4)

#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// One round over the working registers `[a, b, c, d, e, f, g, h]`.
#[inline]
fn round(regs: [u32; 8], k: u32, w: u32) -> [u32; 8] {
    let [a, b, c, d, e, f, g, h] = regs;
    let temp1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));
    [
        temp1.wrapping_add(temp2),
        a,
        b,
        c,
        d.wrapping_add(temp1),
        e,
        f,
        g,
    ]
}

/// Folds one expanded block into the hash state.
///
/// Runs 64 rounds seeded from `state`, then adds the final registers back
/// onto `state` word by word, modulo 2^32. The incoming state is not
/// modified; the new state is returned.
pub fn compress(state: &[u32; 8], schedule: &[u32; 64], k: &[u32; 64]) -> [u32; 8] {
    let regs = k
        .iter()
        .zip(schedule.iter())
        .fold(*state, |regs, (&k, &w)| round(regs, k, w));

    let mut out = *state;
    for (word, reg) in out.iter_mut().zip(regs) {
        *word = word.wrapping_add(reg);
    }
    out
}
