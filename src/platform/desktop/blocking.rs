/// Runs store work from an event handler. The desktop renderer has no
/// separate blocking pool, so the closure runs inline on the UI thread.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
