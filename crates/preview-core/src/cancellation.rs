use anyhow::{Result, anyhow};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Cancellation handle for one document load.
///
/// The session mints one per `open()`, tagged with that open's generation,
/// and cancels it on close or load timeout. The loader holds a clone and
/// polls it between chapters.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    generation: u64,
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn for_generation(generation: u64) -> Self {
        Self {
            generation,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn check_cancelled(&self, stage: &'static str) -> Result<()> {
        if self.is_cancelled() {
            return Err(anyhow!(
                "document load {} cancelled at stage={stage}",
                self.generation
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_cancellation() {
        let token = CancellationToken::for_generation(3);
        let loader_side = token.clone();
        assert!(loader_side.check_cancelled("open").is_ok());

        token.cancel();
        assert!(loader_side.is_cancelled());
        let err = loader_side
            .check_cancelled("chapter")
            .expect_err("cancelled token should error");
        assert_eq!(err.to_string(), "document load 3 cancelled at stage=chapter");
    }

    #[test]
    fn tokens_of_different_loads_are_independent() {
        let first = CancellationToken::for_generation(1);
        let second = CancellationToken::for_generation(2);
        first.cancel();
        assert!(!second.is_cancelled());
        assert_eq!(second.generation(), 2);
    }
}
