//! Password generation.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use zeroize::Zeroize;

use crate::charset;
use crate::policy::GeneratorPolicy;

/// Generates a password with the thread-local CSPRNG.
///
/// The result has exactly `policy.length()` characters, including at least
/// one from every enabled class.
pub fn generate(policy: &GeneratorPolicy) -> SecretString {
    generate_with_rng(policy, &mut rand::thread_rng())
}

/// Generates a password drawing from `rng`.
///
/// `rand`'s range sampling rejects out-of-range values instead of taking a
/// modulus, so every draw is uniform over its alphabet.
pub fn generate_with_rng<R>(policy: &GeneratorPolicy, rng: &mut R) -> SecretString
where
    R: Rng + CryptoRng + ?Sized,
{
    let exclude_ambiguous = policy.exclude_ambiguous();
    let chars = charset::build(policy.classes(), exclude_ambiguous);
    let mut password: Vec<char> = Vec::with_capacity(policy.length());

    // One mandatory draw per enabled class
    for class in policy.classes() {
        password.push(random_char(&class.alphabet(exclude_ambiguous), rng));
    }

    while password.len() < policy.length() {
        password.push(random_char(&chars, rng));
    }

    // Fisher-Yates, so the mandatory draws land anywhere
    password.shuffle(rng);

    let out = collect_exact(&password);
    password.zeroize();
    SecretString::new(out.into_boxed_str())
}

/// Collects into a `String` whose capacity equals its length, so boxing it
/// does not reallocate. Alphabets are ASCII.
fn collect_exact(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    out.extend(chars.iter());
    out
}

#[inline]
fn random_char<R: Rng + ?Sized>(alphabet: &[char], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}
