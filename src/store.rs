use crate::error::{GhActivityError, Result};
use crate::model::Contribution;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write one JSON object per line, in record order.
pub fn save<P: AsRef<Path>>(records: &[Contribution], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read records back in file order. Any line that fails to parse, or that
/// carries an out-of-range month, aborts the load with the 1-based line
/// number. There is no schema versioning; `save` and `load` must stay in
/// lockstep.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Contribution>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record: Contribution =
            serde_json::from_str(&line).map_err(|e| GhActivityError::StoreCorrupt {
                line: index + 1,
                reason: e.to_string(),
            })?;
        if !(1..=12).contains(&record.period.month()) {
            return Err(GhActivityError::StoreCorrupt {
                line: index + 1,
                reason: format!("month out of range: {}", record.period.month()),
            });
        }
        records.push(record);
    }
    Ok(records)
}
