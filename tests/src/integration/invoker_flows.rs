//! # Invoker Flows
//!
//! At-most-once wrappers under thread contention and failure.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    use serde_json::{json, Value};

    use once_invoker::{Memo, SharedMemo};

    #[test]
    fn stampede_of_first_callers_builds_once() {
        const THREADS: usize = 12;

        let builds = Arc::new(AtomicU32::new(0));
        let barrier = Arc::new(Barrier::new(THREADS));

        let counter = Arc::clone(&builds);
        let memo = Arc::new(SharedMemo::infallible(move |caller: usize| {
            counter.fetch_add(1, Ordering::SeqCst);
            // The stored value records which caller won the race.
            json!({ "built_by": caller })
        }));

        let workers: Vec<_> = (0..THREADS)
            .map(|caller| {
                let memo = Arc::clone(&memo);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    memo.value(caller)
                })
            })
            .collect();

        let results: Vec<Value> = workers
            .into_iter()
            .map(|worker| worker.join().expect("caller thread panicked"))
            .collect();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        for result in &results {
            assert_eq!(result, &results[0]);
        }
    }

    #[test]
    fn error_then_success_is_cached_from_the_success_on() {
        let attempts = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&attempts);
        let memo: SharedMemo<&'static str, Value, String> = SharedMemo::new(move |label| {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt < 3 {
                Err(format!("attempt {attempt} failed"))
            } else {
                Ok(json!({ "label": label, "attempt": attempt }))
            }
        });

        assert_eq!(memo.call("a"), Err("attempt 1 failed".to_string()));
        assert_eq!(memo.call("b"), Err("attempt 2 failed".to_string()));
        assert!(!memo.is_complete());

        // Third call succeeds with its own arguments and becomes permanent.
        let value = memo.call("c").expect("third attempt succeeds");
        assert_eq!(value["label"], "c");
        assert_eq!(value["attempt"], 3);

        // Later callers get the cached value, arguments ignored.
        assert_eq!(memo.call("zzz"), Ok(value.clone()));
        assert_eq!(memo.result(), Some(value));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn single_threaded_memo_ignores_later_arguments() {
        let mut memo = Memo::infallible(|(a, b): (u32, u32)| a + b);

        assert_eq!(memo.value((1, 23)), 24);
        // Different arguments, same stored answer: the wrapper is
        // argument-insensitive once complete.
        assert_eq!(memo.value((12, 3)), 24);
        assert_eq!(memo.value((0, 0)), 24);
        assert_eq!(memo.result(), Some(&24));
    }
}
