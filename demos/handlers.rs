use std::sync::{Arc, Mutex};
use std::thread;

use capture_guard::Capturable;

struct Screen {
    title: String,
    taps: Mutex<u32>,
}

impl Screen {
    fn on_tap(&self, button: &str) {
        let mut taps = self.taps.lock().unwrap();
        *taps += 1;
        println!("{}: `{button}` tapped {} times", self.title, *taps);
    }
}

fn main() {
    let screen = Arc::new(Screen {
        title: "settings".to_owned(),
        taps: Mutex::new(0),
    });

    // The handler doesn't keep `screen` alive.
    let handler = screen
        .capture()
        .fn_(|screen: Arc<Screen>, button: &'static str| screen.on_tap(button));

    let handler = thread::spawn(move || {
        handler("save");
        handler("cancel");
        handler
    })
    .join()
    .unwrap();

    drop(screen);
    // Screen is gone, so this does nothing.
    assert_eq!(handler("save"), None);
    println!("screen dropped, handler ignored the tap");
}
