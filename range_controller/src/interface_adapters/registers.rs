use crate::domain::errors::RegisterError;
use crate::domain::ports::RegisterStore;
use crate::use_cases::register_map::REGISTER_SPAN;
use std::sync::{Arc, Mutex};

/// Word-addressed register image shared between the setup and firing use cases.
///
/// Cloning yields another handle to the same words.
#[derive(Debug, Clone)]
pub struct MemoryRegisters {
    words: Arc<Mutex<Vec<i16>>>,
}

impl MemoryRegisters {
    pub fn new(size: usize) -> Self {
        Self {
            words: Arc::new(Mutex::new(vec![0; size])),
        }
    }

    fn span(address: usize, len: usize, size: usize) -> Result<std::ops::Range<usize>, RegisterError> {
        let end = address.saturating_add(len);
        if end > size {
            return Err(RegisterError::OutOfRange { address, end, size });
        }
        Ok(address..end)
    }
}

impl Default for MemoryRegisters {
    fn default() -> Self {
        Self::new(REGISTER_SPAN)
    }
}

impl RegisterStore for MemoryRegisters {
    fn read(&self, address: usize, words: &mut [i16]) -> Result<(), RegisterError> {
        let guard = self.words.lock().map_err(|_| RegisterError::Poisoned)?;
        let range = Self::span(address, words.len(), guard.len())?;
        words.copy_from_slice(&guard[range]);
        Ok(())
    }

    fn write(&self, address: usize, words: &[i16]) -> Result<(), RegisterError> {
        let mut guard = self.words.lock().map_err(|_| RegisterError::Poisoned)?;
        let range = Self::span(address, words.len(), guard.len())?;
        guard[range].copy_from_slice(words);
        Ok(())
    }
}
