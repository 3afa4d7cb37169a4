//! Mock output destination for the line writer.
use mockall::mock;

use std::io::{self, Write};

mock! {
    pub Destination {}
    impl Write for Destination {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}
