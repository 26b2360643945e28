use chargemap::{
    navigation::{self, Launcher, Platform},
    shared::geo::Coordinate,
};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingLauncher {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl Launcher for RecordingLauncher {
    fn open_url(&self, uri: &str) -> Result<(), navigation::Error> {
        self.opened.borrow_mut().push(uri.to_string());
        if self.fail {
            Err(navigation::Error::Launch {
                uri: uri.to_string(),
                reason: "no handler".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[test]
fn open_navigation_android_test() {
    let launcher = RecordingLauncher::default();
    let destination = Coordinate::from((59.3326, 18.0649));
    navigation::open_navigation(&launcher, Platform::Android, &destination);
    assert_eq!(
        *launcher.opened.borrow(),
        vec!["google.navigation:q=59.3326,18.0649".to_string()]
    );
}

#[test]
fn open_navigation_failure_is_swallowed_test() {
    let launcher = RecordingLauncher {
        fail: true,
        ..Default::default()
    };
    let destination = Coordinate::from((59.3326, 18.0649));
    navigation::open_navigation(&launcher, Platform::Ios, &destination);
    // Tried exactly once, no retry.
    assert_eq!(
        *launcher.opened.borrow(),
        vec!["http://maps.apple.com/?daddr=59.3326,18.0649".to_string()]
    );
}
