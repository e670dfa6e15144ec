//! Password generation
//!
//! Each character first picks a character class uniformly, then a character
//! uniformly within that class. Class coverage is not guaranteed.

use rand::Rng;
use rand::seq::SliceRandom;

use super::role::{PasswordTier, Role};

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIALS: &[u8] = b"!@#$%^&*";

const EXECUTIVE_CLASSES: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SPECIALS];
const STAFF_CLASSES: [&[u8]; 3] = [UPPERCASE, LOWERCASE, DIGITS];

impl PasswordTier {
    pub fn length(self) -> usize {
        match self {
            PasswordTier::Executive => 8,
            PasswordTier::Staff => 6,
        }
    }

    pub fn classes(self) -> &'static [&'static [u8]] {
        match self {
            PasswordTier::Executive => &EXECUTIVE_CLASSES,
            PasswordTier::Staff => &STAFF_CLASSES,
        }
    }

    /// Whether `c` belongs to one of this tier's classes.
    pub fn allows(self, c: char) -> bool {
        c.is_ascii() && self.classes().iter().any(|class| class.contains(&(c as u8)))
    }
}

/// Generates a password for `role` using the thread-local RNG.
pub fn generate_password(role: Role) -> String {
    generate_password_with(role, &mut rand::thread_rng())
}

pub fn generate_password_with<R: Rng>(role: Role, rng: &mut R) -> String {
    let tier = role.password_tier();
    let classes = tier.classes();

    (0..tier.length())
        .map(|_| {
            let class = classes[rng.gen_range(0..classes.len())];
            // classes are non-empty constants
            let byte = class.choose(rng).copied().unwrap_or(b'A');
            char::from(byte)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_role_gets_its_tier_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for role in Role::ALL {
            let tier = role.password_tier();
            for _ in 0..200 {
                let password = generate_password_with(role, &mut rng);
                assert_eq!(password.len(), tier.length(), "{role}: {password}");
                assert!(password.chars().all(|c| tier.allows(c)), "{role}: {password}");
            }
        }
    }

    #[test]
    fn staff_passwords_never_contain_specials() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let password = generate_password_with(Role::Intern, &mut rng);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn executive_passwords_draw_specials_eventually() {
        let mut rng = StdRng::seed_from_u64(3);
        let saw_special = (0..200)
            .map(|_| generate_password_with(Role::VicePresident, &mut rng))
            .any(|p| p.bytes().any(|b| SPECIALS.contains(&b)));
        assert!(saw_special);
    }

    #[test]
    fn thread_rng_variant_matches_tier() {
        let password = generate_password(Role::ItHead);
        assert_eq!(password.len(), 8);
    }
}
