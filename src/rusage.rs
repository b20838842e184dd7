//! Observed peak-memory provider.
//!
//! One function per target platform; the rest of the crate never branches on
//! platform identity. Returns `None` when the figure is unavailable rather
//! than a value with unknown units.

/// Returns the process peak resident set size in bytes, if the platform can
/// report one.
///
/// Unix systems use `getrusage(RUSAGE_SELF)`. Note the figure is a
/// high-water mark over the whole process lifetime, not a per-measurement
/// delta.
#[cfg(unix)]
pub fn peak_rss_bytes() -> Option<u64> {
    // SAFETY: a zeroed rusage is a valid out-parameter and the error return
    // is checked before the struct is read.
    let ru = unsafe {
        let mut ru: libc::rusage = std::mem::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, &mut ru) != 0 {
            return None;
        }
        ru
    };
    maxrss_to_bytes(ru.ru_maxrss)
}

#[cfg(not(unix))]
pub fn peak_rss_bytes() -> Option<u64> {
    None
}

/// Converts `ru_maxrss` to bytes. Linux and the BSDs report kilobytes,
/// macOS reports bytes; other platforms get `None` instead of a silently
/// wrong unit.
#[cfg(unix)]
fn maxrss_to_bytes(ru_maxrss: libc::c_long) -> Option<u64> {
    if ru_maxrss <= 0 {
        return None;
    }
    let rss = ru_maxrss as u64;

    #[cfg(any(
        target_os = "linux",
        target_os = "android",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly"
    ))]
    {
        Some(rss.saturating_mul(1024))
    }

    #[cfg(target_os = "macos")]
    {
        Some(rss)
    }

    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly",
        target_os = "macos"
    )))]
    {
        let _ = rss;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    fn running_process_reports_positive_rss() {
        let mut v = Vec::with_capacity(10_000);
        for i in 0..10_000u64 {
            v.push(i * i);
        }
        std::hint::black_box(&v);

        let rss = peak_rss_bytes();
        assert!(rss.is_some_and(|bytes| bytes > 0));
    }

    #[test]
    #[cfg(unix)]
    fn nonpositive_maxrss_is_unavailable() {
        assert_eq!(maxrss_to_bytes(-1), None);
        assert_eq!(maxrss_to_bytes(0), None);
    }
}
