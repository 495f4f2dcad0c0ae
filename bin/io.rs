use std::fmt::Display;
use std::io::{self, Write};
use tracing::instrument;

/// A line oriented output interface.
#[derive(Debug)]
pub struct Io<W: Write> {
    writer: W,
}

impl<W: Write> Io<W> {
    pub fn new(writer: W) -> Self {
        Io { writer }
    }

    /// Send a message.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str;
    use test_strategy::proptest;

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        Io::new(&mut buf).send(&s)?;
        assert_eq!(str::from_utf8(&buf)?, s + "\n");
    }

    #[proptest]
    fn messages_are_sent_in_order(a: String, b: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf);
        io.send(&a)?;
        io.send(&b)?;
        io.flush()?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, [a, b].join("\n") + "\n");
    }
}
