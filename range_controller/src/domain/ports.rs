use crate::domain::errors::RegisterError;

// Port for the uniform random draws used by mode and machine selection.
pub trait RandomSource {
    /// Returns a value uniformly distributed in `[0, bound)`. `bound` is never 0.
    fn next_below(&mut self, bound: u32) -> u32;
}

// Port producing a freshly seeded random source for each firing cycle.
pub trait RandomSeeder {
    type Source: RandomSource;

    fn reseed(&self) -> Self::Source;
}

// Port for retrieving the current time; used to reseed once per firing cycle.
pub trait Clock: Send + Sync {
    fn now_epoch_nanos(&self) -> u64;
}

// Port for the host's word-addressed register store.
pub trait RegisterStore {
    fn read(&self, address: usize, words: &mut [i16]) -> Result<(), RegisterError>;
    fn write(&self, address: usize, words: &[i16]) -> Result<(), RegisterError>;

    fn read_word(&self, address: usize) -> Result<i16, RegisterError> {
        let mut word = [0i16; 1];
        self.read(address, &mut word)?;
        Ok(word[0])
    }

    fn write_word(&self, address: usize, value: i16) -> Result<(), RegisterError> {
        self.write(address, &[value])
    }
}
