use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::redundancy::{DegeneracyTable, Row};
use crate::seq;

const HEADER: [&str; 13] = [
    "codon", "aa",
    "first_non", "first_2s", "first_2v",
    "third_non", "third_2s", "third_2v", "third_four",
    "l0", "l2s", "l2v", "l4",
];

/// A writer of codon degeneracy tables in tab-separated format.
pub struct Writer<W: io::Write> {
    inner: csv::Writer<W>,
}

impl Writer<fs::File> {
    /// Write to a given file path.
    pub fn to_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        fs::File::create(path).map(Writer::new)
    }
}

impl<W: io::Write> Writer<W> {
    /// Write to a given writer.
    pub fn new(writer: W) -> Self {
        Writer {
            inner: csv::WriterBuilder::new()
                .delimiter(b'\t')
                .has_headers(false)
                .from_writer(writer),
        }
    }

    /// Write the header and one row for each of the 64 codons.
    pub fn write_table(&mut self, table: &DegeneracyTable) -> Result<()> {
        self.write_header()?;
        for row in table.rows() {
            self.write_row(&row)?;
        }
        self.flush()
    }

    /// Write the header and one row for each given codon.
    /// Fails on the first invalid codon.
    pub fn write_codons<S: AsRef<str>>(&mut self, table: &DegeneracyTable, codons: &[S]) -> Result<()> {
        self.write_header()?;
        for codon in codons {
            let row = table.row(codon.as_ref())?;
            self.write_row(&row)?;
        }
        self.flush()
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.inner.write_record(&HEADER)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        let values = [
            row.first.non, row.first.two_s, row.first.two_v,
            row.third.non, row.third.two_s, row.third.two_v, row.third.four,
            row.l.l0, row.l.l2s, row.l.l2v, row.l.l4,
        ];

        let mut record = vec![seq::codon_str(&row.codon).to_owned(), (row.aa as char).to_string()];
        record.extend(values.iter().map(|x| format!("{:.6}", x)));
        self.inner.write_record(&record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}
