use crisp8::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Headless platform: randomness from `rand`, sound is only logged
pub struct HostContext {
    rng: StdRng,
    sound: bool,
}

impl HostContext {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            sound: false,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            sound: false,
        }
    }

    pub fn is_sound_on(&self) -> bool {
        self.sound
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Context for HostContext {
    fn sound_on(&mut self) {
        log::info!("beep on");
        self.sound = true;
    }

    fn sound_off(&mut self) {
        log::info!("beep off");
        self.sound = false;
    }

    fn gen_random(&mut self) -> u8 {
        self.rng.gen::<u8>()
    }
}
