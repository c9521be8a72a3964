//! Process environment helpers.
//!
//! Tests that touch the process environment must be marked `#[serial]`.

#![allow(dead_code)]

/// Temporarily set an environment variable for the duration of a closure.
///
/// The original value is restored after the closure completes.
///
/// # Safety
///
/// This function modifies environment variables, which is inherently unsafe
/// in multi-threaded programs. Only use in serialized tests.
pub fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    // SAFETY: Test-only code, serialized with #[serial]
    unsafe { std::env::set_var(key, value) };

    let result = f();

    // SAFETY: Test-only code, serialized with #[serial]
    match original {
        Some(v) => unsafe { std::env::set_var(key, v) },
        None => unsafe { std::env::remove_var(key) },
    }

    result
}

/// Temporarily remove an environment variable for the duration of a closure.
///
/// # Safety
///
/// This function modifies environment variables, which is inherently unsafe
/// in multi-threaded programs. Only use in serialized tests.
pub fn without_env_var<F, R>(key: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    // SAFETY: Test-only code, serialized with #[serial]
    unsafe { std::env::remove_var(key) };

    let result = f();

    if let Some(v) = original {
        // SAFETY: Test-only code, serialized with #[serial]
        unsafe { std::env::set_var(key, v) };
    }

    result
}

