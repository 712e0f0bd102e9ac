use std::fmt;
use std::sync::Arc;

/// Exit status used after a fatal message has been written.
pub const FATAL_EXIT_CODE: i32 = 1;

/// What a logger does after writing a fatal message.
///
/// The default ends the process. Hosts that need to unwind on their own, and
/// tests, can install a handler that records the request instead.
#[derive(Clone)]
pub struct ExitHandler {
    handler: Arc<dyn Fn(i32) + Send + Sync>,
    kind: &'static str,
}

impl ExitHandler {
    pub fn process() -> Self {
        Self {
            handler: Arc::new(exit_process),
            kind: "process",
        }
    }

    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            kind: "custom",
        }
    }

    pub fn exit(&self, code: i32) {
        (self.handler)(code)
    }
}

impl Default for ExitHandler {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for ExitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExitHandler({})", self.kind)
    }
}

fn exit_process(code: i32) {
    std::process::exit(code)
}
