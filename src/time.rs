use std::time::{Duration, Instant};

pub struct Stopwatch {
    start: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            start: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn start_new() -> Self {
        let mut sw = Self::new();
        sw.start();

        sw
    }

    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    pub fn restart(&mut self) {
        self.elapsed = self.elapsed();
        self.start = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        match self.start {
            Some(start) => start.elapsed(),
            None => self.elapsed,
        }
    }
}
