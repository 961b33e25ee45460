#[cfg(test)]
mod tests {
    use crate::config::{InputStyle, TimingConfig};
    use crate::timing::{Delays, Timing};

    fn timing() -> Timing {
        Timing::new(
            Delays {
                gravity_interval: 500,
                move_delay: 150,
                rotate_delay: 200,
                hard_drop_delay: 500,
            },
            InputStyle::Held,
        )
    }

    #[test]
    fn test_gravity_is_inclusive() {
        let timing = timing();
        assert!(!timing.gravity_due(499));
        assert!(timing.gravity_due(500));
    }

    #[test]
    fn test_repeat_delays_are_strict() {
        let timing = timing();
        assert!(!timing.move_due(150));
        assert!(timing.move_due(151));
        assert!(!timing.rotate_due(200));
        assert!(timing.rotate_due(201));
        assert!(!timing.hard_drop_due(500));
        assert!(timing.hard_drop_due(501));
    }

    #[test]
    fn test_markers_are_independent() {
        let mut timing = timing();
        timing.last_move = 1000;
        assert!(!timing.move_due(1100));
        assert!(timing.rotate_due(1100));
        assert!(timing.gravity_due(1100));
    }

    #[test]
    fn test_resume_shifts_markers_by_paused_time() {
        let mut timing = timing();
        timing.last_move = 100;
        timing.last_rotate = 200;
        timing.last_hard_drop = 300;
        timing.last_gravity = 400;

        timing.pause(450);
        assert_eq!(timing.paused_at(), Some(450));
        timing.resume(5450);

        assert_eq!(timing.paused_at(), None);
        assert_eq!(timing.last_move, 5100);
        assert_eq!(timing.last_rotate, 5200);
        assert_eq!(timing.last_hard_drop, 5300);
        assert_eq!(timing.last_gravity, 5400);
        // Gravity was 50ms from due when paused and still is
        assert!(!timing.gravity_due(5899));
        assert!(timing.gravity_due(5900));
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let mut timing = timing();
        timing.last_gravity = 400;
        timing.resume(9000);
        assert_eq!(timing.last_gravity, 400);
    }

    #[test]
    fn test_reset_restarts_all_channels() {
        let mut timing = timing();
        timing.pause(10);
        timing.reset(2000);

        assert_eq!(timing.last_move, 2000);
        assert_eq!(timing.last_rotate, 2000);
        assert_eq!(timing.last_hard_drop, 2000);
        assert_eq!(timing.last_gravity, 2000);
        assert_eq!(timing.paused_at(), None);
    }

    #[test]
    fn test_delays_from_config() {
        let config = TimingConfig {
            gravity_interval_ms: 800,
            move_delay_ms: 50,
            rotate_delay_ms: 120,
            hard_drop_delay_ms: 0,
            frame_rate: 30,
        };
        let delays = Delays::from(&config);

        assert_eq!(delays.gravity_interval, 800);
        assert_eq!(delays.move_delay, 50);
        assert_eq!(delays.rotate_delay, 120);
        assert_eq!(delays.hard_drop_delay, 0);
    }
}
