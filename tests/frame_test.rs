//! Axis-label printer tests
//!
//! A small in-memory frame stands in for the host dataframe library.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use typelens::error::LensError;
    use typelens::frame::{format_axis_labels, write_axis_labels, AxisLabeled};

    struct TestFrame {
        rows: Vec<String>,
        cols: Vec<String>,
    }

    impl TestFrame {
        fn new(rows: &[&str], cols: &[&str]) -> Self {
            Self {
                rows: rows.iter().map(|s| s.to_string()).collect(),
                cols: cols.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl AxisLabeled for TestFrame {
        fn ndim(&self) -> usize {
            2
        }

        fn axis_labels(&self, axis: usize) -> Option<&[String]> {
            match axis {
                0 => Some(&self.rows),
                1 => Some(&self.cols),
                _ => None,
            }
        }
    }

    #[test]
    fn test_labels_are_quoted_and_comma_separated() {
        let frame = TestFrame::new(&["a", "b", "c"], &["x"]);
        let formatted = format_axis_labels(&frame, 0).unwrap();
        assert_eq!(formatted, "\"a\", \"b\", \"c\"");
    }

    #[test]
    fn test_single_label_has_no_separator() {
        let frame = TestFrame::new(&["a", "b"], &["only"]);
        let formatted = format_axis_labels(&frame, 1).unwrap();
        assert_eq!(formatted, "\"only\"");
    }

    #[test]
    fn test_empty_axis_formats_empty() {
        let frame = TestFrame::new(&[], &["x"]);
        let formatted = format_axis_labels(&frame, 0).unwrap();
        assert_eq!(formatted, "");
    }

    #[test]
    fn test_unknown_axis_is_an_error() {
        let frame = TestFrame::new(&["a"], &["x"]);
        match format_axis_labels(&frame, 5) {
            Err(LensError::UnknownAxis { axis, ndim }) => {
                assert_eq!(axis, 5);
                assert_eq!(ndim, 2);
            }
            other => panic!("expected UnknownAxis, got {:?}", other),
        }
    }

    /// Writer that refuses every write
    struct BrokenWriter;

    impl std::io::Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_failure_propagates_as_io_error() {
        let frame = TestFrame::new(&["a", "b"], &["x"]);
        match write_axis_labels(&frame, 0, &mut BrokenWriter) {
            Err(LensError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_matches_format() {
        let frame = TestFrame::new(&["2024", "2025"], &["temp"]);
        let mut buffer = Vec::new();
        write_axis_labels(&frame, 0, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "\"2024\", \"2025\"");
    }
}
