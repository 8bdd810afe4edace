/// Calls a fallible step, retrying it on error up to `retries` times with a fixed
/// delay in between. Evaluates to the last result paired with the number of attempts made.
///
/// # Arguments
///
/// * 'policy' - a &RetryParameters
/// * 'step' - name of the step, used when logging failed attempts
/// * 'f' - closure performing the step
#[macro_export]
macro_rules! retry {
    ($policy:expr, $step:expr, $f:expr $(,)?) => {{
        let policy: &$crate::config::RetryParameters = $policy;
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let res = $f();
            if let Err(e) = &res {
                if attempts <= policy.retries {
                    log::warn!("{} failed (attempt {} of {}): {}, retrying in {}s",
                        $step, attempts, policy.retries + 1, e, policy.delay_secs);
                    std::thread::sleep(std::time::Duration::from_secs(policy.delay_secs));
                    continue;
                }
            }
            break (res, attempts);
        }
    }};
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use crate::config::RetryParameters;

    const NO_DELAY: RetryParameters = RetryParameters { retries: 2, delay_secs: 0 };

    #[test]
    fn succeeds_without_retry() {
        let calls = Cell::new(0);
        let (res, attempts) = retry!(&NO_DELAY, "step", || { calls.set(calls.get() + 1); Ok::<u8, String>(7) });

        assert_eq!(res, Ok(7));
        assert_eq!(attempts, 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn recovers_after_a_failed_attempt() {
        let calls = Cell::new(0);
        let (res, attempts) = retry!(&NO_DELAY, "step", || {
            calls.set(calls.get() + 1);
            if calls.get() < 2 { Err("boom".to_string()) } else { Ok(1) }
        });

        assert_eq!(res, Ok(1));
        assert_eq!(attempts, 2);
    }

    #[test]
    fn gives_up_after_retries_are_spent() {
        let calls = Cell::new(0);
        let (res, attempts) = retry!(&NO_DELAY, "step", || { calls.set(calls.get() + 1); Err::<(), _>("boom") });

        assert_eq!(res, Err("boom"));
        assert_eq!(attempts, 3);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn zero_retries_means_a_single_attempt() {
        let policy = RetryParameters { retries: 0, delay_secs: 0 };
        let (res, attempts) = retry!(&policy, "step", || Err::<(), _>("boom"));

        assert!(res.is_err());
        assert_eq!(attempts, 1);
    }
}
