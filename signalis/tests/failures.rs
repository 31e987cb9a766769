//! Slot failures: panics and `try_invoke`.

use signalis::{BoxError, Collect, Last, Signal, SignalError, testing::CallLog};
use std::{
    cell::Cell,
    panic::{AssertUnwindSafe, catch_unwind},
    rc::Rc,
};

#[test]
fn test_panic_leaves_slots_in_place() {
    let fail = Rc::new(Cell::new(true));
    let mut signal: Signal<dyn FnMut() -> u32, Collect<u32>> = Signal::new();

    signal.register(|| 1);
    let f = fail.clone();
    signal.register(move || {
        if f.get() {
            panic!("slot failure");
        }
        2
    });
    signal.register(|| 3);

    let outcome = catch_unwind(AssertUnwindSafe(|| signal.invoke(())));
    assert!(outcome.is_err());
    assert_eq!(signal.len(), 3);

    fail.set(false);
    assert_eq!(
        signal.invoke(()),
        vec![1, 2, 3],
        "partial results from the failed run must not leak"
    );
}

#[test]
fn test_panic_keeps_earlier_side_effects() {
    let log = CallLog::new();
    let mut signal: Signal<dyn FnMut()> = Signal::new();

    let l = log.clone();
    signal.register(move || l.record("before"));
    signal.register(|| panic!("slot failure"));
    let l = log.clone();
    signal.register(move || l.record("after"));

    let outcome = catch_unwind(AssertUnwindSafe(|| signal.invoke(())));
    assert!(outcome.is_err());
    assert_eq!(log.entries(), vec!["before"]);
}

fn fallible_signal(
    log: &CallLog<&'static str>,
) -> Signal<dyn FnMut(u32) -> Result<u32, String>, Collect<u32>> {
    let mut signal: Signal<dyn FnMut(u32) -> Result<u32, String>, Collect<u32>> = Signal::new();

    let l = log.clone();
    signal.register(move |x: u32| -> Result<u32, String> {
        l.record("a");
        Ok(x)
    });
    let l = log.clone();
    signal.register(move |x: u32| -> Result<u32, String> {
        l.record("b");
        if x == 0 {
            Err("zero is not allowed".to_string())
        } else {
            Ok(x * 2)
        }
    });
    let l = log.clone();
    signal.register(move |x: u32| -> Result<u32, String> {
        l.record("c");
        Ok(x * 3)
    });

    signal
}

#[test]
fn test_try_invoke_success() {
    let log = CallLog::new();
    let mut signal = fallible_signal(&log);

    assert_eq!(signal.try_invoke((1,)), Ok(vec![1, 2, 3]));
    assert_eq!(log.entries(), vec!["a", "b", "c"]);
}

#[test]
fn test_try_invoke_stops_at_first_error() {
    let log = CallLog::new();
    let mut signal = fallible_signal(&log);

    assert_eq!(
        signal.try_invoke((0,)),
        Err("zero is not allowed".to_string())
    );
    assert_eq!(log.take(), vec!["a", "b"], "slots after the failure must not run");

    assert_eq!(signal.try_invoke((2,)), Ok(vec![2, 4, 6]));
    assert_eq!(log.entries(), vec!["a", "b", "c"]);
}

#[test]
fn test_try_invoke_failing_last_slot() {
    let mut signal: Signal<dyn FnMut() -> Result<u8, String>, Collect<u8>> = Signal::new();
    signal.register(|| -> Result<u8, String> { Ok(1) });
    signal.register(|| -> Result<u8, String> { Err("last".to_string()) });

    assert_eq!(signal.try_invoke(()), Err("last".to_string()));
}

fn latest_reading(
    signal: &mut Signal<dyn FnMut() -> Result<u32, BoxError>, Last<u32>>,
) -> Result<u32, SignalError> {
    let reading = signal.try_invoke(())?;
    Ok(reading?)
}

#[test]
fn test_errors_convert_into_signal_error() {
    let mut signal: Signal<dyn FnMut() -> Result<u32, BoxError>, Last<u32>> = Signal::new();
    assert!(matches!(
        latest_reading(&mut signal),
        Err(SignalError::Empty(_))
    ));

    signal.register(|| -> Result<u32, BoxError> { Ok(7) });
    assert_eq!(latest_reading(&mut signal).ok(), Some(7));

    let offline = signal.register(|| -> Result<u32, BoxError> { Err("sensor offline".into()) });
    let err = latest_reading(&mut signal).expect_err("slot fails");
    assert!(matches!(err, SignalError::Slot(_)));

    signal.unregister(offline);
    assert_eq!(latest_reading(&mut signal).ok(), Some(7));
}
