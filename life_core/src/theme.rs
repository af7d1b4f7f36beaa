use rand::Rng;

/// Color palette id, fixed for a session. Every paint call carries it so the
/// renderer never has to remember it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Theme(u8);

impl Theme {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(id: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&id).then_some(Theme(id))
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Theme(rng.random_range(Self::MIN..=Self::MAX))
    }

    /// Theme from a command line argument. Missing, non-numeric or out of range
    /// arguments get a random theme instead of an error.
    pub fn from_arg<R: Rng + ?Sized>(arg: Option<&str>, rng: &mut R) -> Self {
        let Some(arg) = arg else {
            return Self::random(rng);
        };
        match arg.trim().parse::<u8>().ok().and_then(Self::new) {
            Some(theme) => theme,
            None => {
                log::info!("Theme argument [{arg}] is not in 1-7, picking one at random");
                Self::random(rng)
            },
        }
    }

    pub fn id(&self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_log::test;

    use super::*;

    #[test]
    fn only_one_through_seven_are_themes() {
        assert_eq!(Theme::new(0), None);
        assert_eq!(Theme::new(8), None);
        for id in 1..=7 {
            assert_eq!(Theme::new(id).map(|theme| theme.id()), Some(id));
        }
    }

    #[test]
    fn valid_argument_selects_theme() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Theme::from_arg(Some("3"), &mut rng).id(), 3);
        assert_eq!(Theme::from_arg(Some("7"), &mut rng).id(), 7);
    }

    #[test]
    fn bad_arguments_fall_back_to_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for arg in [None, Some("0"), Some("8"), Some("-3"), Some("blue"), Some("300")] {
            for _ in 0..20 {
                let id = Theme::from_arg(arg, &mut rng).id();
                assert!((1..=7).contains(&id), "{arg:?} gave {id}");
            }
        }
    }

    #[test]
    fn random_themes_cover_the_palette() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[usize::from(Theme::random(&mut rng).id() - 1)] = true;
        }
        assert!(seen.iter().all(|seen| *seen));
    }
}
