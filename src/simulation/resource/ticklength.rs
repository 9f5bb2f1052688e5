#[derive(Default)]
pub struct TickLength(pub std::time::Duration);

impl TickLength {
    /// Tick length in seconds, as handed to scaled integration.
    pub fn delta(&self) -> f32 {
        self.0.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_delta() {
        let tick = TickLength(Duration::from_millis(250));

        assert_eq!(tick.delta(), 0.25);
    }
}
