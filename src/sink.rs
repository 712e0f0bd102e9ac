use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use termcolor::{Buffer, BufferWriter, ColorChoice, WriteColor};

/// Destination for rendered log lines.
///
/// A line is rendered into its own buffer first and then handed to the
/// writer in a single `write_all` while holding the sink's lock. Any number
/// of threads can share one sink without their lines interleaving, and
/// rendering a message may itself log through the same sink. Cloning a sink
/// shares the underlying writer and its lock.
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    colored: bool,
    kind: &'static str,
}

impl Sink {
    pub fn stdout(color: ColorChoice) -> Self {
        let colored = BufferWriter::stdout(color).buffer().supports_color();
        Self::from_writer(io::stdout(), colored, "stdout")
    }

    pub fn stderr(color: ColorChoice) -> Self {
        let colored = BufferWriter::stderr(color).buffer().supports_color();
        Self::from_writer(io::stderr(), colored, "stderr")
    }

    /// Wrap a plain writer. Color output is never written to it.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::from_writer(writer, false, "writer")
    }

    /// Wrap any writer. With `colored` set, lines carry ANSI color codes.
    pub fn from_writer<W: Write + Send + 'static>(
        writer: W,
        colored: bool,
        kind: &'static str,
    ) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            colored,
            kind,
        }
    }

    /// Write one line. `render` writes the line content, the sink terminates it.
    ///
    /// `render` runs before the lock is taken. Nothing is written when it fails.
    pub fn write_line<F>(&self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn WriteColor) -> io::Result<()>,
    {
        let mut line = self.buffer();
        render(&mut line)?;
        line.write_all(b"\n")?;

        let mut writer = self.lock();
        writer.write_all(line.as_slice())?;
        writer.flush()
    }

    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    fn buffer(&self) -> Buffer {
        if self.colored {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        }
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        // A writer that panicked mid-line leaves the lock poisoned; keep logging anyway.
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sink({})", self.kind)
    }
}

/// In-memory writer whose clones all append to the same buffer.
///
/// Hand one clone to a [`Sink`] and keep another to read back what was logged.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).to_string()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .map(std::string::ToString::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedBuffer({:?})", self.contents())
    }
}

#[cfg(test)]
mod tests {
    use super::{SharedBuffer, Sink};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use std::thread;

    // Writer that records every `write` call separately.
    struct WriteRecorder {
        writes: Arc<Mutex<Vec<String>>>,
    }

    impl Write for WriteRecorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes
                .lock()
                .unwrap()
                .push(String::from_utf8_lossy(buf).to_string());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_line_terminates_lines() {
        let buffer = SharedBuffer::new();
        let sink = Sink::writer(buffer.clone());
        sink.write_line(|out| write!(out, "first")).unwrap();
        sink.write_line(|out| write!(out, "second")).unwrap();

        assert_eq!(buffer.contents(), "first\nsecond\n");
        assert_eq!(buffer.lines(), vec!["first", "second"]);
    }

    #[test]
    fn plain_writer_drops_colors() {
        let buffer = SharedBuffer::new();
        let sink = Sink::writer(buffer.clone());
        sink.write_line(|out| {
            out.set_color(&crate::LogLevel::Error.color())?;
            write!(out, "[ERROR]")?;
            out.reset()?;
            write!(out, " boom")
        })
        .unwrap();

        assert_eq!(buffer.contents(), "[ERROR] boom\n");
    }

    #[test]
    fn colored_writer_keeps_escapes() {
        let buffer = SharedBuffer::new();
        let sink = Sink::from_writer(buffer.clone(), true, "colored");
        sink.write_line(|out| {
            out.set_color(&crate::LogLevel::Error.color())?;
            write!(out, "[ERROR]")?;
            out.reset()
        })
        .unwrap();

        let output = buffer.contents();
        assert!(output.starts_with("\u{1b}["), "Unexpected output: {:?}", output);
        assert!(output.contains("[ERROR]"));
        assert!(output.ends_with("\u{1b}[0m\n"), "Unexpected output: {:?}", output);
    }

    #[test]
    fn render_may_write_to_the_same_sink() {
        let buffer = SharedBuffer::new();
        let sink = Sink::writer(buffer.clone());
        sink.write_line(|out| {
            sink.write_line(|inner| write!(inner, "inner"))?;
            write!(out, "outer")
        })
        .unwrap();

        assert_eq!(buffer.lines(), vec!["inner", "outer"]);
    }

    #[test]
    fn line_is_written_in_one_call() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let sink = Sink::writer(WriteRecorder {
            writes: writes.clone(),
        });
        sink.write_line(|out| {
            write!(out, "[INFO]")?;
            write!(out, " ")?;
            write!(out, "hello")
        })
        .unwrap();

        assert_eq!(*writes.lock().unwrap(), vec!["[INFO] hello\n".to_string()]);
    }

    #[test]
    fn render_failure_is_returned() {
        let buffer = SharedBuffer::new();
        let sink = Sink::writer(buffer.clone());
        let result = sink.write_line(|_| Err(io::Error::new(io::ErrorKind::Other, "nope")));

        assert!(result.is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn clones_share_the_writer() {
        let buffer = SharedBuffer::new();
        let sink = Sink::writer(buffer.clone());
        let cloned = sink.clone();
        sink.write_line(|out| write!(out, "a")).unwrap();
        cloned.write_line(|out| write!(out, "b")).unwrap();

        assert_eq!(buffer.lines(), vec!["a", "b"]);
    }

    #[test]
    fn concurrent_lines_stay_intact() {
        let buffer = SharedBuffer::new();
        let sink = Sink::writer(buffer.clone());
        let handles = (0..8)
            .map(|t| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        sink.write_line(|out| {
                            write!(out, "thread ")?;
                            write!(out, "{} ", t)?;
                            write!(out, "line {}", i)
                        })
                        .unwrap();
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = buffer.lines();
        assert_eq!(lines.len(), 400);
        for t in 0..8 {
            for i in 0..50 {
                let expected = format!("thread {} line {}", t, i);
                assert!(lines.contains(&expected), "Missing line: {}", expected);
            }
        }
    }

    #[test]
    fn debug_output() {
        let sink = Sink::writer(Vec::new());
        assert_eq!(format!("{:?}", sink), "Sink(writer)");
    }
}
