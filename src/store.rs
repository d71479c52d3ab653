// Inventory store: owns the in-memory records and mirrors them to the
// backing file. Capture appends one line; restock rewrites the whole file.

use crate::error::StoreError;
use crate::record::{display_amount, ShoeRecord, HEADER};
use rust_decimal::Decimal;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of `InventoryStore::load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// One line of the value report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemValue<'a> {
    pub product: &'a str,
    pub code: &'a str,
    /// `None` when cost times quantity overflows.
    pub value: Option<Decimal>,
}

impl fmt::Display for ItemValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Code: {}) - Total Value: ", self.product, self.code)?;
        match self.value {
            Some(value) => write!(f, "{}", display_amount(value)),
            None => write!(f, "too large to compute"),
        }
    }
}

#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    records: Vec<ShoeRecord>,
}

impl InventoryStore {
    /// Create an empty store backed by `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryStore {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[ShoeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read the backing file, skip its header and append every parsable
    /// line to memory. Malformed lines are logged and counted, not fatal.
    pub fn load(&mut self) -> Result<LoadReport, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::Missing(self.path.clone()))
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let mut report = LoadReport::default();
        for (idx, line) in contents.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<ShoeRecord>() {
                Ok(record) => {
                    self.records.push(record);
                    report.loaded += 1;
                }
                Err(e) => {
                    warn!(line = idx + 1, error = %e, "skipping malformed inventory line");
                    report.skipped += 1;
                }
            }
        }
        info!(
            path = %self.path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "inventory loaded"
        );
        Ok(report)
    }

    /// Append one line to the backing file, then keep the record in memory.
    /// A missing or empty file gets the header first; a file whose last
    /// line is unterminated gets a newline before the record.
    pub fn append(&mut self, record: ShoeRecord) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        let len = file
            .metadata()
            .map_err(|e| StoreError::io(&self.path, e))?
            .len();

        let mut out = String::new();
        if len == 0 {
            out.push_str(HEADER);
            out.push('\n');
        } else {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))
                .and_then(|_| file.read_exact(&mut last))
                .map_err(|e| StoreError::io(&self.path, e))?;
            if last[0] != b'\n' {
                out.push('\n');
            }
        }
        out.push_str(&record.to_line());
        out.push('\n');
        file.write_all(out.as_bytes())
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!(code = %record.code, "record appended");
        self.records.push(record);
        Ok(())
    }

    /// Fixed-column table of every record, or a notice when empty.
    pub fn list_all(&self) -> String {
        if self.records.is_empty() {
            return "No shoes in inventory.".to_string();
        }

        let mut out = format!(
            "{:<15} {:<10} {:<20} {:<10} {:<10}\n",
            "Country", "Code", "Product", "Cost", "Quantity"
        );
        out.push_str(&"-".repeat(65));
        out.push('\n');
        for shoe in &self.records {
            let cost = format!("{:.2}", shoe.cost);
            out.push_str(&format!(
                "{:<15} {:<10} {:<20} {:<10} {:<10}\n",
                shoe.country, shoe.code, shoe.product, cost, shoe.quantity
            ));
        }
        out
    }

    /// First record whose code matches, ignoring case.
    pub fn find_by_code(&self, code: &str) -> Option<&ShoeRecord> {
        let wanted = code.trim().to_lowercase();
        self.records
            .iter()
            .find(|shoe| shoe.code.to_lowercase() == wanted)
    }

    fn lowest_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, shoe) in self.records.iter().enumerate() {
            match best {
                Some(b) if self.records[b].quantity <= shoe.quantity => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Record with the smallest quantity; the first one wins ties.
    pub fn lowest_stock(&self) -> Option<&ShoeRecord> {
        self.lowest_index().map(|i| &self.records[i])
    }

    /// Record with the largest quantity; the first one wins ties.
    pub fn highest_stock(&self) -> Option<&ShoeRecord> {
        self.records.iter().fold(None, |best, shoe| match best {
            Some(b) if b.quantity >= shoe.quantity => Some(b),
            _ => Some(shoe),
        })
    }

    /// Add `amount` to the lowest-stock record and rewrite the backing file.
    /// On a failed rewrite the in-memory quantity is rolled back.
    pub fn restock_lowest(&mut self, amount: u32) -> Result<&ShoeRecord, StoreError> {
        let idx = self.lowest_index().ok_or(StoreError::Empty)?;
        let previous = self.records[idx].quantity;
        let updated = previous
            .checked_add(amount)
            .ok_or(StoreError::QuantityOverflow {
                current: previous,
                added: amount,
            })?;

        self.records[idx].quantity = updated;
        if let Err(e) = self.save() {
            self.records[idx].quantity = previous;
            return Err(e);
        }
        info!(code = %self.records[idx].code, previous, updated, "restocked");
        Ok(&self.records[idx])
    }

    /// Rewrite the backing file from memory: header plus every record.
    pub fn save(&self) -> Result<(), StoreError> {
        let mut out = String::from(HEADER);
        out.push('\n');
        for shoe in &self.records {
            out.push_str(&shoe.to_line());
            out.push('\n');
        }
        fs::write(&self.path, out).map_err(|e| StoreError::io(&self.path, e))?;
        debug!(records = self.records.len(), "inventory file rewritten");
        Ok(())
    }

    /// Per-record cost times quantity, in store order.
    pub fn value_report(&self) -> Vec<ItemValue<'_>> {
        self.records
            .iter()
            .map(|shoe| ItemValue {
                product: &shoe.product,
                code: &shoe.code,
                value: shoe.value(),
            })
            .collect()
    }
}
