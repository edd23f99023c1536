//! Curated macro module samples

/// Access to the sample modules by number.
pub struct Samples;

impl Samples {
    /// Full text of sample module `number`.
    ///
    /// Panics on an unknown number; samples are fixed at compile time.
    pub fn module(number: usize) -> &'static str {
        match number {
            1 => include_str!("../../../samples/module-01-minimal.bas"),
            2 => include_str!("../../../samples/module-02-quirks.bas"),
            3 => include_str!("../../../samples/module-03-short-genre.bas"),
            4 => include_str!("../../../samples/module-04-unterminated.bas"),
            other => panic!("no sample module numbered {}", other),
        }
    }

    /// File name of sample module `number`, relative to the `samples/` directory.
    pub fn file_name(number: usize) -> &'static str {
        match number {
            1 => "module-01-minimal.bas",
            2 => "module-02-quirks.bas",
            3 => "module-03-short-genre.bas",
            4 => "module-04-unterminated.bas",
            other => panic!("no sample module numbered {}", other),
        }
    }

    pub fn count() -> usize {
        4
    }
}
