//! Timed step sequences
//!
//! A sequence is a finite list of steps, each waiting a delay after the
//! previous one. The same sequence drives two things: static CSS delays
//! (`schedule`) and live playback (`play`), which resolves once the last step
//! and the trailing pause have elapsed.

use std::time::Duration;

/// Receives steps as a sequence plays
pub trait StepSink<T> {
    fn on_step(&mut self, index: usize, item: &T);
}

impl<T: Clone> StepSink<T> for Vec<T> {
    fn on_step(&mut self, _index: usize, item: &T) {
        self.push(item.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    /// Wait before this step, measured from the previous one
    pub delay: Duration,
    pub item: T,
}

/// Per-line timing of the typing effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Before a line fades in
    pub show: Duration,
    /// Fade-in settle time
    pub settle: Duration,
    /// Pause before the next line
    pub gap: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            show: Duration::from_millis(50),
            settle: Duration::from_millis(100),
            gap: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    steps: Vec<Step<T>>,
    /// Wait after the last step before `play` resolves
    tail: Duration,
}

impl<T> Sequence<T> {
    pub fn new(steps: Vec<Step<T>>, tail: Duration) -> Self {
        Self { steps, tail }
    }

    /// Item `i` fires at `i * interval`
    pub fn staggered(items: impl IntoIterator<Item = T>, interval: Duration) -> Self {
        let steps = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Step {
                delay: if i == 0 { Duration::ZERO } else { interval },
                item,
            })
            .collect();
        Self::new(steps, Duration::ZERO)
    }

    /// Lines revealed one after another, each line fully settled plus a gap
    /// before the next one starts
    pub fn typing(lines: impl IntoIterator<Item = T>, timing: TypingTiming) -> Self {
        let between = timing.settle + timing.gap + timing.show;
        let steps = lines
            .into_iter()
            .enumerate()
            .map(|(i, item)| Step {
                delay: if i == 0 { timing.show } else { between },
                item,
            })
            .collect();
        Self::new(steps, timing.settle + timing.gap)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Absolute offset of each step from the start
    pub fn schedule(&self) -> impl Iterator<Item = (Duration, &T)> + '_ {
        self.steps.iter().scan(Duration::ZERO, |elapsed, step| {
            *elapsed += step.delay;
            Some((*elapsed, &step.item))
        })
    }

    /// Time until `play` resolves
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum::<Duration>() + self.tail
    }

    /// Play the steps in order, awaiting each delay. Returns the number of
    /// steps delivered.
    pub async fn play<S: StepSink<T>>(&self, sink: &mut S) -> usize {
        for (index, step) in self.steps.iter().enumerate() {
            if !step.delay.is_zero() {
                tokio::time::sleep(step.delay).await;
            }
            sink.on_step(index, &step.item);
        }
        if !self.tail.is_zero() {
            tokio::time::sleep(self.tail).await;
        }
        self.steps.len()
    }
}
