//! Log output of a recovering parse. Kept in its own test binary because it
//! installs a global logger.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("sitemark_core") {
            let mut records = self.0.lock().unwrap();
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn test_recovered_errors_stay_below_warn() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let errors = sitemark_core::check("fine\n\nbad **x\n\nalso _bad");
    assert_eq!(errors.len(), 2);

    let records = LOGGER.0.lock().unwrap();
    assert!(records.iter().all(|(level, _)| *level > Level::Warn));
    let recovered = records
        .iter()
        .filter(|(level, message)| *level == Level::Debug && message.starts_with("recovered: "))
        .count();
    assert_eq!(recovered, 2);
}
