#![no_main]

use gesturelog::config::AppConfig;
use gesturelog::controller::Screen;
use gesturelog::input::{MotionAction, MotionEvent};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Each 4-byte chunk is one event: action, x, y, time step
    let mut screen = Screen::create(&AppConfig::default());
    let mut t: i64 = 0;
    for chunk in data.chunks_exact(4) {
        let action = match chunk[0] % 4 {
            0 => MotionAction::Down,
            1 => MotionAction::Move,
            2 => MotionAction::Up,
            _ => MotionAction::Cancel,
        };
        t += i64::from(chunk[3]);
        let event = MotionEvent::new(action, 0, f32::from(chunk[1]), f32::from(chunk[2]), t);
        assert!(screen.on_touch(&event));
    }

    let listener = screen.touch_listener();
    assert!(listener.pool().outstanding() <= 1);
    assert_eq!(listener.pool().outstanding() == 1, listener.is_tracking());
});
